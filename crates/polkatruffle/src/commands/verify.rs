use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use derive_more::{Display, Error, From};
use indicatif::ProgressBar;

use crate::{
    artifact,
    commands::Verify,
    config::ProjectConfig,
    explorer::{ExplorerClient, ExplorerError, VerificationRequest, DEFAULT_API_URL},
};

/// Environment variable consulted when `--api-key` is not passed.
const API_KEY_VAR: &str = "BS_API_KEY";

/// Directory with compiled Truffle artifacts, relative to the project root.
const ARTIFACTS_DIR: &str = "build/contracts";

/// Directory with contract sources, relative to the project root.
const SOURCES_DIR: &str = "contracts";

/// `verify` subcommand errors.
///
/// All of these are terminal for the current invocation; nothing is retried.
#[derive(Debug, Display, From, Error)]
pub(crate) enum VerifyError {
    /// Unable to parse the project configuration with [`figment`].
    Figment(figment::Error),

    /// Verification API error.
    Explorer(ExplorerError),

    /// No API key was provided through the CLI or the environment.
    #[display(
        fmt = "blockscout API key missing: pass --api-key or set the BS_API_KEY environment variable"
    )]
    MissingApiKey,

    /// Requested network has no entry in the project configuration.
    #[display(fmt = "network {} is not defined in the project configuration", name)]
    #[from(ignore)]
    UnknownNetwork { name: String },

    /// Project configuration has no compiler section.
    #[display(fmt = "project configuration does not specify a compiler version")]
    MissingCompilerVersion,

    /// Compiled artifacts directory cannot be read.
    #[display(fmt = "unable to read build/contracts: run `polkatruffle run compile` first")]
    MissingArtifactsDirectory,

    /// No artifact matches the requested deployment.
    #[display(
        fmt = "no artifact in build/contracts matches address {} on network {}",
        address,
        network
    )]
    #[from(ignore)]
    ArtifactNotFound { address: String, network: String },

    /// Matched artifact has no corresponding source file.
    #[display(fmt = "contract source not found at {}", path)]
    #[from(ignore)]
    SourceMissing { path: String },
}

/// Verify flow entrypoint.
pub(crate) fn verify(
    config_file: Option<PathBuf>,
    Verify {
        address,
        network,
        api_key,
    }: Verify,
) -> Result<(), VerifyError> {
    let api_key = match api_key {
        Some(key) => key,
        None => env::var(API_KEY_VAR).map_err(|_| VerifyError::MissingApiKey)?,
    };

    let config = ProjectConfig::new(config_file)?;

    let chain_id = config
        .networks
        .get(&network)
        .ok_or_else(|| VerifyError::UnknownNetwork {
            name: network.clone(),
        })?
        .chain_id;

    let compiler = config
        .compiler
        .as_ref()
        .ok_or(VerifyError::MissingCompilerVersion)?;

    let progress = ProgressBar::new_spinner();

    progress.enable_steady_tick(Duration::from_millis(150));
    progress.set_message("Scanning build artifacts...");

    let artifacts = artifact::load_directory(Path::new(ARTIFACTS_DIR))
        .map_err(|_| VerifyError::MissingArtifactsDirectory)?;

    let Some(matched) = artifact::find_deployed(&artifacts, chain_id, &address) else {
        return Err(VerifyError::ArtifactNotFound { address, network });
    };

    let source_path = PathBuf::from(SOURCES_DIR).join(format!("{}.sol", matched.contract_name));

    let source_code = fs::read_to_string(&source_path).map_err(|_| VerifyError::SourceMissing {
        path: source_path.display().to_string(),
    })?;

    progress.set_message(format!(
        "Submitting verification for {} at {address}...",
        matched.contract_name
    ));

    let request = VerificationRequest::single_file(
        &api_key,
        &address,
        &matched.contract_name,
        &source_code,
        compiler,
        matched.constructor_arguments.as_deref().unwrap_or_default(),
    );

    let client = ExplorerClient::new(DEFAULT_API_URL);
    let guid = client.verify_source_code(&request)?;

    progress.finish_with_message("Verification submitted.");

    println!("Submission GUID: {guid}");
    println!("Check status at: {}", client.check_status_url(&guid));

    Ok(())
}
