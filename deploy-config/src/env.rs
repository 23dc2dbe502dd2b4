//! The environment overlay applied on top of the built-in and file-based
//! configuration

use std::env;

use crate::{
    constants::{
        AVAX_MAINNET_RPC_ENV_VAR, DEFAULT_TAG_ENV_VAR, PRIVATE_KEY_ENV_VAR, STAKER_KEY_ENV_VAR,
        TENDERLY_RPC_ENV_VAR,
    },
    errors::ConfigError,
    network::PrivateKey,
};

/// The configuration values read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// The deployer's signing key, from `PRIVATE_KEY`
    pub deployer_key: Option<PrivateKey>,
    /// The staker's signing key, from `STAKER_KEY`
    pub staker_key: Option<PrivateKey>,
    /// The tags applied to the local network, from `DEFAULT_TAG`
    pub default_tags: Option<Vec<String>>,
    /// The Tenderly fork endpoint, from `TENDERLY_RPC`
    pub tenderly_rpc: Option<String>,
    /// The Avalanche mainnet endpoint, from `AVAX_MAINNET`
    pub avax_mainnet_rpc: Option<String>,
}

impl EnvOverrides {
    /// Capture the overlay from the process environment
    pub fn capture() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Build the overlay from the given key/value pairs.
    ///
    /// Split out from [`capture`](Self::capture) so tests can exercise the
    /// overlay without mutating the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut overrides = EnvOverrides::default();

        for (key, value) in vars {
            match key.as_str() {
                PRIVATE_KEY_ENV_VAR => {
                    overrides.deployer_key = Some(parse_key(PRIVATE_KEY_ENV_VAR, &value)?);
                }
                STAKER_KEY_ENV_VAR => {
                    overrides.staker_key = Some(parse_key(STAKER_KEY_ENV_VAR, &value)?);
                }
                DEFAULT_TAG_ENV_VAR => {
                    overrides.default_tags = Some(split_tags(&value));
                }
                TENDERLY_RPC_ENV_VAR => {
                    overrides.tenderly_rpc = Some(value);
                }
                AVAX_MAINNET_RPC_ENV_VAR => {
                    overrides.avax_mainnet_rpc = Some(value);
                }
                _ => {}
            }
        }

        Ok(overrides)
    }

    /// Whether the overlay carries no values
    pub fn is_empty(&self) -> bool {
        self.deployer_key.is_none()
            && self.staker_key.is_none()
            && self.default_tags.is_none()
            && self.tenderly_rpc.is_none()
            && self.avax_mainnet_rpc.is_none()
    }
}

/// Parse a private key from the named environment variable, attributing
/// parse failures to the variable
fn parse_key(var: &str, value: &str) -> Result<PrivateKey, ConfigError> {
    PrivateKey::from_hex(value).map_err(|e| match e {
        ConfigError::InvalidKey(detail) => ConfigError::InvalidKey(format!("{}: {}", var, detail)),
        other => other,
    })
}

/// Split a comma-separated tag list, dropping empty segments
fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::errors::ConfigError;

    use super::EnvOverrides;

    /// Build the overlay from a slice of string pairs
    fn overrides_from(pairs: &[(&str, &str)]) -> Result<EnvOverrides, ConfigError> {
        EnvOverrides::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_capture_all_vars() {
        let key = "4c0883a69102937d6231471b5dbb6204fe51296170827936ea5cce4b76994b0f";
        let overrides = overrides_from(&[
            ("PRIVATE_KEY", key),
            ("STAKER_KEY", key),
            ("DEFAULT_TAG", "staging,fork"),
            ("TENDERLY_RPC", "https://rpc.tenderly.co/fork/123"),
            ("AVAX_MAINNET", "https://api.avax.network/ext/bc/C/rpc"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert!(overrides.deployer_key.is_some());
        assert!(overrides.staker_key.is_some());
        assert_eq!(
            overrides.default_tags,
            Some(vec!["staging".to_string(), "fork".to_string()])
        );
        assert!(overrides.tenderly_rpc.is_some());
        assert!(overrides.avax_mainnet_rpc.is_some());
    }

    #[test]
    fn test_empty_environment() {
        let overrides = overrides_from(&[]).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_malformed_key_names_variable() {
        let err = overrides_from(&[("PRIVATE_KEY", "not-hex")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey(_)));
        assert!(err.to_string().contains("PRIVATE_KEY"));
    }

    #[test]
    fn test_tag_splitting_drops_empty_segments() {
        let overrides = overrides_from(&[("DEFAULT_TAG", "a,,b,")]).unwrap();
        assert_eq!(
            overrides.default_tags,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_wholly_empty_tag_list() {
        let overrides = overrides_from(&[("DEFAULT_TAG", "")]).unwrap();
        assert_eq!(overrides.default_tags, Some(vec![]));
    }
}
