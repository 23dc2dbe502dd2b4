//! Reading and writing the per-network deployments files

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::ConfigError, network::NetworkProfile, paths::ProjectPaths};

/// The shape of a `deployments/<network>.json` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DeploymentsFile {
    /// Deployed contract addresses keyed by contract name
    #[serde(default)]
    deployments: BTreeMap<String, Address>,
}

/// The path of the deployments file for the named network
pub fn deployments_file(root: &Path, paths: &ProjectPaths, network: &str) -> PathBuf {
    root.join(&paths.deployments).join(format!("{network}.json"))
}

/// Read the deployments recorded for the named network, returning an empty
/// table when no file exists yet
pub fn read_deployments(
    root: &Path,
    paths: &ProjectPaths,
    network: &str,
) -> Result<BTreeMap<String, Address>, ConfigError> {
    let path = deployments_file(root, paths, network);
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(&path)
        .map_err(|e| ConfigError::ReadFile(format!("{}: {}", path.display(), e)))?;
    let file: DeploymentsFile = serde_json::from_str(&contents)
        .map_err(|e| ConfigError::ReadFile(format!("{}: {}", path.display(), e)))?;

    Ok(file.deployments)
}

/// Read the address recorded for the given contract on the named network
pub fn read_deployed_address(
    root: &Path,
    paths: &ProjectPaths,
    network: &str,
    contract_key: &str,
) -> Result<Address, ConfigError> {
    read_deployments(root, paths, network)?
        .remove(contract_key)
        .ok_or_else(|| {
            ConfigError::ReadFile(format!(
                "no deployment recorded for {} on {}",
                contract_key, network
            ))
        })
}

/// Record the address of a deployed contract on the named network
pub fn write_deployed_address(
    root: &Path,
    paths: &ProjectPaths,
    network: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ConfigError> {
    let path = deployments_file(root, paths, network);

    let mut file = DeploymentsFile {
        deployments: read_deployments(root, paths, network)?,
    };
    file.deployments.insert(contract_key.to_string(), address);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConfigError::WriteFile(format!("{}: {}", path.display(), e)))?;
    }

    let contents =
        serde_json::to_string_pretty(&file).map_err(|e| ConfigError::WriteFile(e.to_string()))?;
    fs::write(&path, contents)
        .map_err(|e| ConfigError::WriteFile(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

/// Record a deployment for the given network profile, honoring its
/// `persist_deployments` flag.
///
/// Returns whether the address was written.
pub fn record_deployment(
    root: &Path,
    paths: &ProjectPaths,
    profile: &NetworkProfile,
    contract_key: &str,
    address: Address,
) -> Result<bool, ConfigError> {
    if !profile.persist_deployments {
        debug!("skipping deployments record for {}", profile.name);
        return Ok(false);
    }

    write_deployed_address(root, paths, &profile.name, contract_key, address)?;

    Ok(true)
}
