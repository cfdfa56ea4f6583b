use std::{
    io,
    process::{self, Command, Stdio},
};

/// Run an external command with inherited stdio.
///
/// A nonzero child exit status terminates the current process with the same
/// status code. The child has already reported its own failure to the user
/// at that point, so nothing else is printed.
pub(crate) fn run_inherited(command: &mut Command) -> io::Result<()> {
    let status = command
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    if !status.success() {
        process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
