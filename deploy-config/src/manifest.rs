//! The on-disk configuration file and its discovery

use std::{
    collections::{BTreeMap, BTreeSet},
    env, fs,
    path::{Path, PathBuf},
};

use alloy_primitives::ChainId;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    bindings::BindingsTarget,
    constants::{CONFIG_FILE_NAME, CONFIG_PATH_ENV_VAR},
    errors::ConfigError,
    solc::SolcVersion,
};

// ------------
// | SECTIONS |
// ------------

/// The root of the `deploy.toml` configuration file.
///
/// Every section is optional, the file patches the built-in configuration
/// rather than replacing it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// The network selected when none is named
    pub default_network: Option<String>,
    /// The compiler section
    pub solc: Option<SolcSection>,
    /// Per-network entries, patching built-in networks or adding new ones
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkEntry>,
    /// The directory layout section
    pub paths: Option<PathsSection>,
    /// The bindings section
    pub bindings: Option<BindingsSection>,
    /// The test runner section
    pub test_runner: Option<TestRunnerSection>,
}

/// The `[solc]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolcSection {
    /// The compiler profiles, replacing the built-in list when present
    pub compilers: Vec<CompilerEntry>,
}

/// A single compiler entry in the `[solc]` section
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerEntry {
    /// The compiler version
    #[serde_as(as = "DisplayFromStr")]
    pub version: SolcVersion,
    /// Whether the optimizer is enabled, defaults to enabled
    pub optimizer_enabled: Option<bool>,
    /// The number of optimizer runs, defaults to the project-wide value
    pub optimizer_runs: Option<u32>,
}

/// A `[networks.<name>]` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkEntry {
    /// The RPC endpoint URL.
    ///
    /// Endpoints for the built-in live networks normally come from the
    /// environment, a value here is mostly useful for self-hosted nodes.
    pub url: Option<String>,
    /// The chain ID
    pub chain_id: Option<ChainId>,
    /// The tags attached to the network, replacing existing ones
    pub tags: Option<BTreeSet<String>>,
    /// Whether the network is a live chain
    pub live: Option<bool>,
    /// Whether deployments are recorded for the network
    pub persist_deployments: Option<bool>,
    /// Whether contracts above the EIP-170 size limit may be deployed
    pub allow_unlimited_contract_size: Option<bool>,
    /// Whether node-side logging is enabled
    pub logging_enabled: Option<bool>,
    /// A mnemonic to derive accounts from.
    ///
    /// Private keys never appear in the configuration file, they are read
    /// from the environment.
    pub mnemonic: Option<String>,
}

/// The `[paths]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// The directory containing the Solidity sources
    pub sources: Option<PathBuf>,
    /// The directory containing the contract test suites
    pub tests: Option<PathBuf>,
    /// The compilation cache directory
    pub cache: Option<PathBuf>,
    /// The artifacts output directory
    pub artifacts: Option<PathBuf>,
    /// The deployments directory
    pub deployments: Option<PathBuf>,
}

/// The `[bindings]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingsSection {
    /// The directory the bindings are written to
    pub out_dir: Option<PathBuf>,
    /// The client library targeted
    pub target: Option<BindingsTarget>,
}

/// The `[test_runner]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestRunnerSection {
    /// The per-test timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

// -------------
// | DISCOVERY |
// -------------

impl ConfigFile {
    /// Parse a configuration file from its TOML source
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::ManifestParsing(e.to_string()))
    }

    /// Read and parse the configuration file at the given path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFile(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&source)
    }

    /// Locate the configuration file for the project rooted at `root`.
    ///
    /// The `DEPLOY_CONFIG` environment variable takes precedence and must
    /// point at an existing file. Otherwise `deploy.toml` under the project
    /// root is used when present.
    pub fn locate(root: &Path) -> Result<Option<PathBuf>, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(ConfigError::ReadFile(format!(
                    "{} points at {}, which does not exist",
                    CONFIG_PATH_ENV_VAR,
                    path.display()
                )));
            }

            return Ok(Some(path));
        }

        let default = root.join(CONFIG_FILE_NAME);
        Ok(default.is_file().then_some(default))
    }
}
