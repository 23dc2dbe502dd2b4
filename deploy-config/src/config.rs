//! The assembled project configuration and its resolution pipeline

use std::{collections::BTreeMap, path::Path, time::Duration};

use serde::Serialize;
use serde_with::{serde_as, DurationMilliSeconds};
use tracing::debug;

use crate::{
    bindings::BindingsConfig,
    constants::{
        AVAX_MAINNET_CHAIN_ID, AVAX_MAINNET_NETWORK, DEFAULT_TEST_TIMEOUT_MS, LOCAL_NETWORK,
        TENDERLY_NETWORK,
    },
    env::EnvOverrides,
    errors::ConfigError,
    manifest::{ConfigFile, NetworkEntry},
    network::{NetworkAccounts, NetworkProfile, PrivateKey},
    paths::ProjectPaths,
    solc::{CompilerProfile, SolcConfig},
};

// ------------
// | SECTIONS |
// ------------

/// Settings for the contract test runner
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRunnerConfig {
    /// The timeout applied to each test
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        TestRunnerConfig {
            timeout: Duration::from_millis(DEFAULT_TEST_TIMEOUT_MS),
        }
    }
}

/// Cross-network signing keys sourced from the environment
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectSecrets {
    /// The deployer's key, fanned out to the live networks
    pub deployer: Option<PrivateKey>,
    /// The staker's key, held for operational scripts
    pub staker: Option<PrivateKey>,
}

/// The fully resolved project configuration
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    /// The compiler settings
    pub solc: SolcConfig,
    /// The name of the network selected when none is named
    pub default_network: String,
    /// The network table, keyed by network name
    pub networks: BTreeMap<String, NetworkProfile>,
    /// The directory layout
    pub paths: ProjectPaths,
    /// The bindings settings
    pub bindings: BindingsConfig,
    /// The test runner settings
    pub test_runner: TestRunnerConfig,
    /// Signing keys sourced from the environment
    pub secrets: ProjectSecrets,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            LOCAL_NETWORK.to_string(),
            NetworkProfile::local(LOCAL_NETWORK),
        );
        networks.insert(
            TENDERLY_NETWORK.to_string(),
            NetworkProfile::live(TENDERLY_NETWORK),
        );

        let mut avax = NetworkProfile::live(AVAX_MAINNET_NETWORK);
        avax.chain_id = Some(AVAX_MAINNET_CHAIN_ID);
        networks.insert(AVAX_MAINNET_NETWORK.to_string(), avax);

        ProjectConfig {
            solc: SolcConfig::default(),
            default_network: TENDERLY_NETWORK.to_string(),
            networks,
            paths: ProjectPaths::default(),
            bindings: BindingsConfig::default(),
            test_runner: TestRunnerConfig::default(),
            secrets: ProjectSecrets::default(),
        }
    }
}

// --------------
// | RESOLUTION |
// --------------

impl ProjectConfig {
    /// Load the configuration for the project rooted at the current directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(Path::new("."))
    }

    /// Load the configuration for the project rooted at `root`
    pub fn load_at(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_manifest(root, None)
    }

    /// Load the configuration for the project rooted at `root`, reading the
    /// configuration file at `manifest` rather than discovering one.
    ///
    /// Resolution order: built-in defaults, then the configuration file,
    /// then the environment. Later layers win.
    pub fn load_with_manifest(root: &Path, manifest: Option<&Path>) -> Result<Self, ConfigError> {
        // Values from a `.env` file become visible to the overlay below,
        // without overriding variables already exported
        let _ = dotenvy::dotenv();

        let mut config = ProjectConfig::default();

        let manifest = match manifest {
            Some(path) => Some(path.to_path_buf()),
            None => ConfigFile::locate(root)?,
        };

        if let Some(path) = manifest {
            debug!("applying configuration file at {}", path.display());
            config.apply_manifest(&ConfigFile::from_path(&path)?);
        }

        config.apply_env(EnvOverrides::capture()?);
        config.validate()?;

        Ok(config)
    }

    /// Fold a configuration file into the configuration
    pub fn apply_manifest(&mut self, file: &ConfigFile) {
        if let Some(name) = &file.default_network {
            self.default_network = name.clone();
        }

        if let Some(solc) = &file.solc {
            self.solc.compilers = solc
                .compilers
                .iter()
                .map(|entry| {
                    let mut profile = CompilerProfile::optimized(entry.version);
                    if let Some(enabled) = entry.optimizer_enabled {
                        profile.optimizer_enabled = enabled;
                    }
                    if let Some(runs) = entry.optimizer_runs {
                        profile.optimizer_runs = runs;
                    }

                    profile
                })
                .collect();
        }

        for (name, entry) in &file.networks {
            self.patch_network(name, entry);
        }

        if let Some(paths) = &file.paths {
            if let Some(sources) = &paths.sources {
                self.paths.sources = sources.clone();
            }
            if let Some(tests) = &paths.tests {
                self.paths.tests = tests.clone();
            }
            if let Some(cache) = &paths.cache {
                self.paths.cache = cache.clone();
            }
            if let Some(artifacts) = &paths.artifacts {
                self.paths.artifacts = artifacts.clone();
            }
            if let Some(deployments) = &paths.deployments {
                self.paths.deployments = deployments.clone();
            }
        }

        if let Some(bindings) = &file.bindings {
            if let Some(out_dir) = &bindings.out_dir {
                self.bindings.out_dir = out_dir.clone();
            }
            if let Some(target) = bindings.target {
                self.bindings.target = target;
            }
        }

        if let Some(test_runner) = &file.test_runner {
            if let Some(timeout_ms) = test_runner.timeout_ms {
                self.test_runner.timeout = Duration::from_millis(timeout_ms);
            }
        }
    }

    /// Patch the named network with a configuration file entry, inserting a
    /// new profile when the name is not already present
    fn patch_network(&mut self, name: &str, entry: &NetworkEntry) {
        let profile = self.networks.entry(name.to_string()).or_insert_with(|| {
            if entry.live.unwrap_or(true) {
                NetworkProfile::live(name)
            } else {
                NetworkProfile::local(name)
            }
        });

        if let Some(url) = &entry.url {
            profile.url = Some(url.clone());
        }
        if let Some(chain_id) = entry.chain_id {
            profile.chain_id = Some(chain_id);
        }
        if let Some(tags) = &entry.tags {
            profile.tags = tags.clone();
        }
        if let Some(live) = entry.live {
            profile.live = live;
        }
        if let Some(persist) = entry.persist_deployments {
            profile.persist_deployments = persist;
        }
        if let Some(allow) = entry.allow_unlimited_contract_size {
            profile.allow_unlimited_contract_size = allow;
        }
        if let Some(logging) = entry.logging_enabled {
            profile.logging_enabled = logging;
        }
        if let Some(mnemonic) = &entry.mnemonic {
            profile.accounts = NetworkAccounts::Mnemonic {
                phrase: mnemonic.clone(),
            };
        }
    }

    /// Fold the environment overlay into the configuration.
    ///
    /// The deployer key is fanned out to every live network still awaiting
    /// an explicit key list. Networks whose accounts come from a mnemonic
    /// are left untouched.
    pub fn apply_env(&mut self, overrides: EnvOverrides) {
        if let Some(tags) = overrides.default_tags {
            // An empty tag list keeps the built-in tags
            if !tags.is_empty() {
                if let Some(local) = self.networks.get_mut(LOCAL_NETWORK) {
                    local.tags = tags.into_iter().collect();
                }
            }
        }

        if let Some(url) = overrides.tenderly_rpc {
            if let Some(profile) = self.networks.get_mut(TENDERLY_NETWORK) {
                profile.url = Some(url);
            }
        }

        if let Some(url) = overrides.avax_mainnet_rpc {
            if let Some(profile) = self.networks.get_mut(AVAX_MAINNET_NETWORK) {
                profile.url = Some(url);
            }
        }

        if let Some(key) = overrides.deployer_key {
            for profile in self.networks.values_mut() {
                let awaiting_keys =
                    matches!(&profile.accounts, NetworkAccounts::Keys(keys) if keys.is_empty());
                if profile.live && awaiting_keys {
                    profile.accounts = NetworkAccounts::Keys(vec![key.clone()]);
                }
            }

            self.secrets.deployer = Some(key);
        }

        if let Some(key) = overrides.staker_key {
            self.secrets.staker = Some(key);
        }
    }

    /// Validate the assembled configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solc.validate()?;

        if !self.networks.contains_key(&self.default_network) {
            return Err(ConfigError::UnknownNetwork(self.default_network.clone()));
        }

        for (name, profile) in &self.networks {
            if name != &profile.name {
                return Err(ConfigError::Validation(format!(
                    "network table key {} does not match profile name {}",
                    name, profile.name
                )));
            }
            profile.validate()?;
        }

        self.paths.validate()?;

        if self.test_runner.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "test timeout must be non-zero".to_string(),
            ));
        }

        if self.bindings.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "bindings out_dir must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    // -----------
    // | LOOKUPS |
    // -----------

    /// Look up a network by name
    pub fn network(&self, name: &str) -> Result<&NetworkProfile, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// Look up a network by name and check it is ready to be used as a
    /// deployment target
    pub fn resolve_network(&self, name: &str) -> Result<&NetworkProfile, ConfigError> {
        let profile = self.network(name)?;
        profile.ensure_ready()?;

        Ok(profile)
    }

    /// Resolve the default network
    pub fn resolve_default_network(&self) -> Result<&NetworkProfile, ConfigError> {
        self.resolve_network(&self.default_network)
    }
}
