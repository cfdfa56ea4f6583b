use std::{env::current_dir, io, process::Command};

use derive_more::{Display, Error, From};

use crate::{commands::Init, process::run_inherited, scaffold};

/// `init` subcommand errors.
#[derive(Debug, Display, From, Error)]
pub(crate) enum InitError {
    /// IO-related error.
    Io(io::Error),

    /// [`which`] crate was unable to determine location of the `npm` binary file.
    #[display(fmt = "unable to locate npm: {}", _0)]
    Which(which::Error),

    /// Project name is empty after trimming.
    #[display(fmt = "project name cannot be empty")]
    EmptyProjectName,

    /// Destination directory already exists.
    #[display(fmt = "directory {} already exists", _0)]
    AlreadyExists(#[error(ignore)] String),
}

/// Init flow entrypoint.
pub(crate) fn init(Init { name }: Init) -> Result<(), InitError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(InitError::EmptyProjectName);
    }

    let dest = current_dir()?.join(name);

    if dest.exists() {
        return Err(InitError::AlreadyExists(name.into()));
    }

    scaffold::unpack_template(&dest)?;

    println!("Installing dependencies in {name}...");

    let npm = which::which("npm")?;

    run_inherited(Command::new(npm).arg("install").current_dir(&dest))?;

    println!();
    println!("Successfully initialized {name}.");
    println!();
    println!("Next steps:");
    println!("  1. cd {name}");
    println!("  2. Create a .env file with MNEMONIC=\"your twelve-word mnemonic\"");
    println!("     or PRIVATE_KEY=\"0xYourPrivateKeyHere\"");
    println!("  3. polkatruffle run compile");
    println!("  4. polkatruffle run migrate --network passetHubTestnet");

    Ok(())
}
