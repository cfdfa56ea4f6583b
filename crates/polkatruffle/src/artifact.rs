//! # Artifacts
//!
//! Truffle stores one JSON file per compiled contract in a flat
//! `build/contracts` directory. Each file records the contract name and a
//! map of deployment addresses keyed by chain identifier, which is enough
//! to locate the artifact that corresponds to a deployed address.
//!
//! Matching is implemented over an in-memory list of parsed records, so
//! the lookup itself stays independent from filesystem iteration.

use std::{collections::HashMap, ffi::OsStr, fs, io, path::Path};

use serde::Deserialize;

/// A single per-chain deployment record.
#[derive(Debug, Deserialize)]
pub(crate) struct Deployment {
    /// Address the contract instance was deployed at.
    pub address: String,
}

/// Compiled contract artifact.
#[derive(Debug, Deserialize)]
pub(crate) struct Artifact {
    /// Declared contract name, which doubles as the source file stem.
    #[serde(rename = "contractName")]
    pub contract_name: String,

    /// Deployment records keyed by stringified chain identifier.
    #[serde(default)]
    pub networks: HashMap<String, Deployment>,

    /// ABI-encoded constructor arguments captured at deployment time.
    #[serde(rename = "constructorArguments")]
    pub constructor_arguments: Option<String>,
}

impl Artifact {
    /// Deployment record of this artifact on the given chain, if any.
    pub fn deployment(&self, chain_id: u64) -> Option<&Deployment> {
        self.networks.get(&chain_id.to_string())
    }
}

/// Load every artifact from a flat directory of JSON files.
///
/// Files without a `.json` extension and files that do not parse as
/// artifacts are skipped.
pub(crate) fn load_directory(dir: &Path) -> io::Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(OsStr::to_str) != Some("json") {
            continue;
        }

        if let Ok(artifact) = serde_json::from_str::<Artifact>(&fs::read_to_string(&path)?) {
            artifacts.push(artifact);
        }
    }

    Ok(artifacts)
}

/// Find the first artifact deployed at `address` on the given chain.
///
/// Addresses are compared case-insensitively. If multiple artifacts declare
/// the same address on the same chain, the first one in iteration order wins.
pub(crate) fn find_deployed<'a>(
    artifacts: &'a [Artifact],
    chain_id: u64,
    address: &str,
) -> Option<&'a Artifact> {
    artifacts.iter().find(|artifact| {
        artifact
            .deployment(chain_id)
            .map_or(false, |deployment| {
                deployment.address.eq_ignore_ascii_case(address)
            })
    })
}
