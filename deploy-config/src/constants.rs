//! Constants used in the project configuration

use alloy_primitives::ChainId;

use crate::solc::SolcVersion;

// -------------------------
// | ENVIRONMENT VARIABLES |
// -------------------------

/// The name of the environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The name of the environment variable holding the staker's private key
pub const STAKER_KEY_ENV_VAR: &str = "STAKER_KEY";

/// The name of the environment variable holding the comma-separated tags
/// applied to the local network
pub const DEFAULT_TAG_ENV_VAR: &str = "DEFAULT_TAG";

/// The name of the environment variable holding the Tenderly fork RPC URL
pub const TENDERLY_RPC_ENV_VAR: &str = "TENDERLY_RPC";

/// The name of the environment variable holding the Avalanche mainnet RPC URL
pub const AVAX_MAINNET_RPC_ENV_VAR: &str = "AVAX_MAINNET";

/// The name of the environment variable overriding the location of the
/// configuration file
pub const CONFIG_PATH_ENV_VAR: &str = "DEPLOY_CONFIG";

// ------------
// | NETWORKS |
// ------------

/// The name of the in-process development network
pub const LOCAL_NETWORK: &str = "hardhat";

/// The name of the Tenderly fork network
pub const TENDERLY_NETWORK: &str = "tenderly";

/// The name of the Avalanche C-Chain mainnet network
pub const AVAX_MAINNET_NETWORK: &str = "avax_mainnet";

/// The tag applied to the local network when `DEFAULT_TAG` is unset
pub const LOCAL_TAG: &str = "local";

/// The tag applied to the live networks
pub const PRODUCTION_TAG: &str = "production";

/// The mnemonic used to derive accounts on the local network.
///
/// Funds nothing anywhere, safe to commit.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test tank";

/// The chain ID of the local network
pub const LOCAL_CHAIN_ID: ChainId = 1;

/// The chain ID of the Avalanche C-Chain
pub const AVAX_MAINNET_CHAIN_ID: ChainId = 43114;

// -------------
// | COMPILERS |
// -------------

/// The compiler version used for the legacy contract sources
pub const LEGACY_SOLC_VERSION: SolcVersion = SolcVersion::new(0, 7, 6);

/// The compiler version used for the current contract sources
pub const CURRENT_SOLC_VERSION: SolcVersion = SolcVersion::new(0, 8, 17);

/// The number of optimizer runs applied to every compiler profile
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 999_999;

// --------
// | KEYS |
// --------

/// The number of bytes in a raw private key
pub const NUM_BYTES_PRIVATE_KEY: usize = 32;

/// The word counts BIP-39 permits for a mnemonic phrase
pub const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// The placeholder emitted wherever a private key would otherwise be
/// printed or serialized
pub const REDACTED_KEY: &str = "<redacted>";

// ---------
// | PATHS |
// ---------

/// The name of the configuration file searched for at the project root
pub const CONFIG_FILE_NAME: &str = "deploy.toml";

/// The directory containing the Solidity sources, relative to the project root
pub const SOURCES_DIR: &str = "contracts";

/// The directory containing the contract test suites, relative to the
/// project root
pub const TESTS_DIR: &str = "test";

/// The directory containing the compilation cache, relative to the
/// project root
pub const CACHE_DIR: &str = "cache";

/// The directory containing the compilation artifacts, relative to the
/// project root
pub const ARTIFACTS_DIR: &str = "artifacts";

/// The directory containing the generated contract bindings, relative to the
/// project root
pub const BINDINGS_DIR: &str = "typechain";

/// The directory containing the per-network deployments files, relative to
/// the project root
pub const DEPLOYMENTS_DIR: &str = "deployments";

// -----------
// | TESTING |
// -----------

/// The timeout applied to each contract test, in milliseconds.
///
/// Forked-network tests routinely take over a minute.
pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 200_000;
