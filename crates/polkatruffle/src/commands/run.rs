use std::{io, process::Command};

use derive_more::{Display, Error, From};

use crate::{commands::Run, process::run_inherited};

/// `run` subcommand errors.
#[derive(Debug, Display, From, Error)]
pub(crate) enum RunError {
    /// IO-related error.
    Io(io::Error),

    /// [`which`] crate was unable to determine location of the `npx` binary file.
    #[display(fmt = "unable to locate npx: {}", _0)]
    Which(which::Error),
}

/// Run flow entrypoint: proxy the provided arguments to the Truffle CLI.
pub(crate) fn run(Run { truffle_args }: Run) -> Result<(), RunError> {
    let npx = which::which("npx")?;

    run_inherited(Command::new(npx).arg("truffle").args(&truffle_args))?;

    Ok(())
}
