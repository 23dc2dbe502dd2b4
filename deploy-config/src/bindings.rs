//! Settings for the generated contract bindings

use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{constants::BINDINGS_DIR, errors::ConfigError};

/// The client library the bindings are generated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingsTarget {
    /// Bindings for ethers.js v5
    EthersV5,
    /// Bindings for ethers.js v6
    EthersV6,
    /// Bindings for web3.js
    Web3,
}

impl BindingsTarget {
    /// The identifier the target is written as in the configuration file
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingsTarget::EthersV5 => "ethers-v5",
            BindingsTarget::EthersV6 => "ethers-v6",
            BindingsTarget::Web3 => "web3",
        }
    }
}

impl FromStr for BindingsTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethers-v5" => Ok(BindingsTarget::EthersV5),
            "ethers-v6" => Ok(BindingsTarget::EthersV6),
            "web3" => Ok(BindingsTarget::Web3),
            _ => Err(ConfigError::Validation(format!(
                "unknown bindings target: {}",
                s
            ))),
        }
    }
}

impl Display for BindingsTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for the contract bindings generated after compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsConfig {
    /// The directory the bindings are written to, relative to the
    /// project root
    pub out_dir: PathBuf,
    /// The client library targeted
    pub target: BindingsTarget,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        BindingsConfig {
            out_dir: PathBuf::from(BINDINGS_DIR),
            target: BindingsTarget::EthersV5,
        }
    }
}
