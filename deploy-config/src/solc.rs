//! Solidity compiler versions and per-version compilation settings

use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    constants::{CURRENT_SOLC_VERSION, DEFAULT_OPTIMIZER_RUNS, LEGACY_SOLC_VERSION},
    errors::ConfigError,
};

// ------------
// | VERSIONS |
// ------------

/// A Solidity compiler version, e.g. `0.8.17`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolcVersion {
    /// The major version
    pub major: u64,
    /// The minor version
    pub minor: u64,
    /// The patch version
    pub patch: u64,
}

impl SolcVersion {
    /// Construct a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        SolcVersion {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SolcVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('.').collect();
        let [major, minor, patch]: [&str; 3] = components
            .try_into()
            .map_err(|_| ConfigError::InvalidVersion(s.to_string()))?;

        let parse = |component: &str| {
            component
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidVersion(s.to_string()))
        };

        Ok(SolcVersion::new(parse(major)?, parse(minor)?, parse(patch)?))
    }
}

impl Display for SolcVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ------------
// | PROFILES |
// ------------

/// The settings applied to a single compiler version
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerProfile {
    /// The compiler version this profile applies to
    #[serde_as(as = "DisplayFromStr")]
    pub version: SolcVersion,
    /// Whether the optimizer is enabled
    pub optimizer_enabled: bool,
    /// The number of optimizer runs
    pub optimizer_runs: u32,
}

impl CompilerProfile {
    /// Construct a profile with the optimizer enabled at the default
    /// number of runs
    pub fn optimized(version: SolcVersion) -> Self {
        CompilerProfile {
            version,
            optimizer_enabled: true,
            optimizer_runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

/// The full set of compiler profiles used to build the contract sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    /// The compiler profiles, one per version appearing in the sources
    pub compilers: Vec<CompilerProfile>,
}

impl Default for SolcConfig {
    fn default() -> Self {
        SolcConfig {
            compilers: vec![
                CompilerProfile::optimized(LEGACY_SOLC_VERSION),
                CompilerProfile::optimized(CURRENT_SOLC_VERSION),
            ],
        }
    }
}

impl SolcConfig {
    /// Validate the compiler list, requiring at least one profile and
    /// no duplicate versions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compilers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one compiler profile is required".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for profile in &self.compilers {
            if !seen.insert(profile.version) {
                return Err(ConfigError::Validation(format!(
                    "duplicate compiler version: {}",
                    profile.version
                )));
            }
        }

        Ok(())
    }
}
