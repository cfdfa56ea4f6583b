//! # polkatruffle
//!
//! Command-line companion for Solidity development on the Passet Hub testnet.
//!
//! The tool scaffolds Truffle projects pre-configured for Passet Hub, proxies
//! build commands to the Truffle CLI and submits contract sources to the
//! Passet Hub Blockscout explorer for verification.

use clap::Parser;
use commands::{Cli, Commands};

/// Build artifact records and deployment matching.
mod artifact;

/// CLI subcommands.
mod commands;

/// Project configuration.
mod config;

/// Blockscout verification API client.
mod explorer;

/// External tool invocation.
mod process;

/// Embedded project template.
mod scaffold;

/// CLI entrypoint.
fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => commands::init(args)?,
        Commands::Run(args) => commands::run(args)?,
        Commands::Verify(args) => commands::verify(cli.config_file, args)?,
    }

    Ok(())
}
