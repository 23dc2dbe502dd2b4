//! Network profiles and the signing accounts attached to them

use std::{
    collections::BTreeSet,
    fmt::{self, Debug, Formatter},
    str::FromStr,
};

use alloy_primitives::{ChainId, B256};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    constants::{
        AVAX_MAINNET_NETWORK, AVAX_MAINNET_RPC_ENV_VAR, DEV_MNEMONIC, LOCAL_CHAIN_ID, LOCAL_TAG,
        MNEMONIC_WORD_COUNTS, NUM_BYTES_PRIVATE_KEY, PRIVATE_KEY_ENV_VAR, PRODUCTION_TAG,
        REDACTED_KEY, TENDERLY_NETWORK, TENDERLY_RPC_ENV_VAR,
    },
    errors::ConfigError,
};

// --------
// | KEYS |
// --------

/// A raw secp256k1 private key used to sign deployment transactions.
///
/// Never printed or serialized in the clear.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(B256);

impl PrivateKey {
    /// Parse a key from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| ConfigError::InvalidKey(e.to_string()))?;

        if bytes.len() != NUM_BYTES_PRIVATE_KEY {
            return Err(ConfigError::InvalidKey(format!(
                "expected {} bytes, got {}",
                NUM_BYTES_PRIVATE_KEY,
                bytes.len()
            )));
        }

        Ok(PrivateKey(B256::from_slice(&bytes)))
    }

    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl FromStr for PrivateKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrivateKey::from_hex(s)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({})", REDACTED_KEY)
    }
}

impl Serialize for PrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED_KEY)
    }
}

impl<'de> Deserialize<'de> for PrivateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PrivateKey::from_hex(&s).map_err(de::Error::custom)
    }
}

// ------------
// | ACCOUNTS |
// ------------

/// The source of signing accounts for a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkAccounts {
    /// Accounts derived in-process from a seed phrase
    Mnemonic {
        /// The BIP-39 seed phrase
        phrase: String,
    },
    /// An explicit list of private keys
    Keys(Vec<PrivateKey>),
}

impl NetworkAccounts {
    /// The explicit signing keys attached to the network, empty for
    /// mnemonic-derived accounts
    pub fn keys(&self) -> &[PrivateKey] {
        match self {
            NetworkAccounts::Keys(keys) => keys,
            NetworkAccounts::Mnemonic { .. } => &[],
        }
    }

    /// Whether the source yields at least one signing account
    pub fn has_signers(&self) -> bool {
        match self {
            NetworkAccounts::Mnemonic { .. } => true,
            NetworkAccounts::Keys(keys) => !keys.is_empty(),
        }
    }

    /// Validate the account source
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let NetworkAccounts::Mnemonic { phrase } = self {
            let words = phrase.split_whitespace().count();
            if !MNEMONIC_WORD_COUNTS.contains(&words) {
                return Err(ConfigError::InvalidMnemonic(format!(
                    "expected 12, 15, 18, 21, or 24 words, got {}",
                    words
                )));
            }
        }

        Ok(())
    }
}

// ------------
// | PROFILES |
// ------------

/// A target network for contract deployment and testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// The name the network is selected by
    pub name: String,
    /// Free-form labels attached to the network, e.g. "local" or "production"
    pub tags: BTreeSet<String>,
    /// Whether the network is a live chain rather than an in-process one
    pub live: bool,
    /// Whether deployed contract addresses are recorded under the
    /// deployments directory
    pub persist_deployments: bool,
    /// The RPC endpoint URL, unset until provided by the environment
    pub url: Option<String>,
    /// The chain ID, unset for networks that assign one at connection time
    pub chain_id: Option<ChainId>,
    /// Whether contracts above the EIP-170 size limit may be deployed
    pub allow_unlimited_contract_size: bool,
    /// Whether node-side logging is enabled
    pub logging_enabled: bool,
    /// The source of signing accounts
    pub accounts: NetworkAccounts,
}

impl NetworkProfile {
    /// Construct an in-process development network
    pub fn local(name: &str) -> Self {
        NetworkProfile {
            name: name.to_string(),
            tags: BTreeSet::from([LOCAL_TAG.to_string()]),
            live: false,
            persist_deployments: false,
            url: None,
            chain_id: Some(LOCAL_CHAIN_ID),
            allow_unlimited_contract_size: true,
            logging_enabled: false,
            accounts: NetworkAccounts::Mnemonic {
                phrase: DEV_MNEMONIC.to_string(),
            },
        }
    }

    /// Construct a live network awaiting an endpoint and signing keys from
    /// the environment
    pub fn live(name: &str) -> Self {
        NetworkProfile {
            name: name.to_string(),
            tags: BTreeSet::from([PRODUCTION_TAG.to_string()]),
            live: true,
            persist_deployments: true,
            url: None,
            chain_id: None,
            allow_unlimited_contract_size: false,
            logging_enabled: true,
            accounts: NetworkAccounts::Keys(vec![]),
        }
    }

    /// The explicit signing keys attached to the network
    pub fn signing_keys(&self) -> &[PrivateKey] {
        self.accounts.keys()
    }

    /// Validate the profile's static fields.
    ///
    /// Readiness of live networks (endpoint and keys present) is checked
    /// separately by [`ensure_ready`](Self::ensure_ready) so that a loaded
    /// configuration may carry partially configured networks the caller
    /// never selects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::Validation(
                "network name must be non-empty".to_string(),
            ));
        }

        self.check_endpoint_scheme()?;
        self.accounts.validate()
    }

    /// Check the profile is ready to be used as a deployment target.
    ///
    /// Live profiles must carry an http(s) endpoint URL and at least one
    /// signing key; in-process profiles are always ready.
    pub fn ensure_ready(&self) -> Result<(), ConfigError> {
        if !self.live {
            return Ok(());
        }

        if self.url.is_none() {
            return Err(ConfigError::MissingEndpoint(endpoint_hint(&self.name)));
        }
        self.check_endpoint_scheme()?;

        if !self.accounts.has_signers() {
            return Err(ConfigError::MissingSigningKey(format!(
                "network {} has no signing keys, set {}",
                self.name, PRIVATE_KEY_ENV_VAR
            )));
        }

        Ok(())
    }

    /// Check that the endpoint URL, when set, carries an http(s) scheme.
    ///
    /// The URL itself stays out of the error message, it may embed an
    /// access token
    fn check_endpoint_scheme(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(format!(
                    "network {} requires an http(s) url",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

/// Describe where the endpoint URL for the named network comes from
fn endpoint_hint(name: &str) -> String {
    match name {
        TENDERLY_NETWORK => format!("network {} requires {}", name, TENDERLY_RPC_ENV_VAR),
        AVAX_MAINNET_NETWORK => format!("network {} requires {}", name, AVAX_MAINNET_RPC_ENV_VAR),
        _ => format!("network {} has no endpoint url configured", name),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ConfigError;

    use super::{NetworkAccounts, NetworkProfile, PrivateKey};

    /// A 32-byte key used across the tests below
    const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe51296170827936ea5cce4b76994b0f";

    #[test]
    fn test_parse_private_key() {
        let bare = PrivateKey::from_hex(TEST_KEY).unwrap();
        let prefixed = PrivateKey::from_hex(&format!("0x{TEST_KEY}")).unwrap();
        assert_eq!(bare, prefixed);
        assert_eq!(bare.as_bytes().len(), 32);
    }

    #[test]
    fn test_reject_malformed_keys() {
        for s in ["", "0x", "abcd", "zz0883a69102937d6231471b5dbb6204"] {
            assert!(PrivateKey::from_hex(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn test_key_never_displayed() {
        let key = PrivateKey::from_hex(TEST_KEY).unwrap();
        let debug = format!("{key:?}");
        let json = serde_json::to_string(&key).unwrap();
        assert!(!debug.contains("4c0883"));
        assert!(!json.contains("4c0883"));
        assert!(json.contains("<redacted>"));
    }

    #[test]
    fn test_mnemonic_word_count() {
        let accounts = NetworkAccounts::Mnemonic {
            phrase: "one two three".to_string(),
        };
        assert!(matches!(
            accounts.validate(),
            Err(ConfigError::InvalidMnemonic(_))
        ));

        let accounts = NetworkAccounts::Mnemonic {
            phrase: crate::constants::DEV_MNEMONIC.to_string(),
        };
        accounts.validate().unwrap();
    }

    #[test]
    fn test_local_profile_always_ready() {
        let profile = NetworkProfile::local("hardhat");
        profile.validate().unwrap();
        profile.ensure_ready().unwrap();
    }

    #[test]
    fn test_live_profile_requires_endpoint_first() {
        let profile = NetworkProfile::live("tenderly");
        assert!(matches!(
            profile.ensure_ready(),
            Err(ConfigError::MissingEndpoint(_))
        ));
    }

    #[test]
    fn test_live_profile_requires_keys() {
        let mut profile = NetworkProfile::live("tenderly");
        profile.url = Some("https://rpc.example.com".to_string());
        assert!(matches!(
            profile.ensure_ready(),
            Err(ConfigError::MissingSigningKey(_))
        ));

        profile.accounts = NetworkAccounts::Keys(vec![PrivateKey::from_hex(TEST_KEY).unwrap()]);
        profile.ensure_ready().unwrap();
    }

    #[test]
    fn test_reject_non_http_endpoint() {
        let mut profile = NetworkProfile::live("tenderly");
        profile.url = Some("ws://rpc.example.com".to_string());
        let err = profile.validate().unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
        // The error names the network, never the URL
        assert!(message.contains("tenderly"));
        assert!(!message.contains("example.com"));
    }

    #[test]
    fn test_ready_gate_rejects_non_http_endpoint() {
        let mut profile = NetworkProfile::live("tenderly");
        profile.url = Some("ws://rpc.example.com".to_string());
        profile.accounts = NetworkAccounts::Keys(vec![PrivateKey::from_hex(TEST_KEY).unwrap()]);

        assert!(matches!(
            profile.ensure_ready(),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }
}
