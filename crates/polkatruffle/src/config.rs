use std::{collections::HashMap, path::PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Default project configuration file name.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "Polkatruffle.toml";

/// Named network entry.
#[derive(Debug, Deserialize)]
pub(crate) struct NetworkConfig {
    /// Chain identifier of the network, used to match deployment
    /// records in build artifacts.
    pub chain_id: u64,
}

/// Optimizer section of the compiler configuration.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OptimizerConfig {
    /// Whether the optimizer was enabled during compilation.
    #[serde(default)]
    pub enabled: bool,

    /// Optimizer run count the contracts were compiled with.
    pub runs: Option<u32>,
}

/// Compiler settings reported to the explorer during verification.
#[derive(Debug, Deserialize)]
pub(crate) struct CompilerConfig {
    /// `solc` version the project is compiled with.
    pub version: String,

    /// Optimizer settings.
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

/// Project configuration.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectConfig {
    /// Named networks available for deployment and verification.
    #[serde(default)]
    pub networks: HashMap<String, NetworkConfig>,

    /// Compiler settings.
    pub compiler: Option<CompilerConfig>,
}

impl ProjectConfig {
    /// Create new config using the provided or default configuration file.
    ///
    /// See [`Env`] for more details on how to use environment variables configuration.
    ///
    /// [`Env`]: figment::providers::Env
    pub fn new(path: Option<PathBuf>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.unwrap_or(PathBuf::from(DEFAULT_CONFIG_FILE))))
            .merge(Env::prefixed("POLKATRUFFLE_").split("_"))
            .extract()
    }
}
