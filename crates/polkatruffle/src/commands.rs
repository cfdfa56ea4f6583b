/// `init` subcommand.
mod init;

/// `run` subcommand.
mod run;

/// `verify` subcommand.
mod verify;

pub(crate) use init::init;
pub(crate) use run::run;
pub(crate) use verify::verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI configuration.
#[derive(Parser)]
#[command(about)]
pub(crate) struct Cli {
    /// Configuration file path.
    #[arg(short, long, default_value = "Polkatruffle.toml")]
    pub config_file: Option<PathBuf>,

    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scaffold a new Truffle project configured for Passet Hub and install its dependencies.
    Init(Init),

    /// Proxy the remaining arguments to the Truffle CLI.
    Run(Run),

    /// Verify a deployed contract on the Passet Hub Blockscout explorer.
    Verify(Verify),
}

/// `init` subcommand configuration.
#[derive(Args)]
pub struct Init {
    /// Name of the new project directory to create.
    name: String,
}

/// `run` subcommand configuration.
#[derive(Args)]
#[clap(trailing_var_arg = true)]
pub struct Run {
    /// Arguments passed to the Truffle CLI (for example, `compile` or `migrate`).
    #[clap(allow_hyphen_values = true)]
    truffle_args: Vec<String>,
}

/// `verify` subcommand configuration.
#[derive(Args)]
pub struct Verify {
    /// Address of the deployed contract.
    address: String,

    /// Network name as defined in the project configuration.
    #[arg(short, long)]
    network: String,

    /// Blockscout API key; the BS_API_KEY environment variable is used when omitted.
    #[arg(short = 'k', long)]
    api_key: Option<String>,
}
