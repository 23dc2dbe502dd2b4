//! Tests of configuration file discovery and layering

use std::{fs, path::PathBuf, time::Duration};

use deploy_config::{
    config::ProjectConfig,
    env::EnvOverrides,
    errors::ConfigError,
    manifest::ConfigFile,
};
use eyre::Result;
use tempfile::tempdir;

/// A configuration file used across the tests below
const PROJECT_CONFIG: &str = r#"
    default_network = "fuji"

    [solc]
    compilers = [{ version = "0.8.20" }]

    [networks.fuji]
    live = true
    chain_id = 43113
    tags = ["staging"]

    [paths]
    artifacts = "out"

    [test_runner]
    timeout_ms = 60000
"#;

#[test]
fn test_locate_finds_project_root_file() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("deploy.toml"), PROJECT_CONFIG)?;

    let located = ConfigFile::locate(dir.path())?;
    assert_eq!(located, Some(dir.path().join("deploy.toml")));

    Ok(())
}

#[test]
fn test_locate_without_file() -> Result<()> {
    let dir = tempdir()?;
    assert_eq!(ConfigFile::locate(dir.path())?, None);

    Ok(())
}

#[test]
fn test_load_with_manifest() -> Result<()> {
    let dir = tempdir()?;
    let manifest = dir.path().join("deploy.toml");
    fs::write(&manifest, PROJECT_CONFIG)?;

    let config = ProjectConfig::load_with_manifest(dir.path(), Some(&manifest))?;

    assert_eq!(config.default_network, "fuji");
    assert_eq!(config.networks["fuji"].chain_id, Some(43113));
    assert_eq!(config.paths.artifacts, PathBuf::from("out"));
    assert_eq!(config.solc.compilers.len(), 1);
    assert_eq!(config.test_runner.timeout, Duration::from_millis(60_000));

    // The built-in networks survive the patch
    assert!(config.networks.contains_key("hardhat"));
    assert!(config.networks.contains_key("tenderly"));
    assert!(config.networks.contains_key("avax_mainnet"));

    Ok(())
}

#[test]
fn test_load_rejects_malformed_manifest() -> Result<()> {
    let dir = tempdir()?;
    let manifest = dir.path().join("deploy.toml");
    fs::write(&manifest, "not_a_known_field = true")?;

    let err = ProjectConfig::load_with_manifest(dir.path(), Some(&manifest)).unwrap_err();
    assert!(matches!(err, ConfigError::ManifestParsing(_)));

    Ok(())
}

#[test]
fn test_load_rejects_unknown_default_network() -> Result<()> {
    let dir = tempdir()?;
    let manifest = dir.path().join("deploy.toml");
    fs::write(&manifest, "default_network = \"goerli\"")?;

    let err = ProjectConfig::load_with_manifest(dir.path(), Some(&manifest)).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownNetwork(_)));

    Ok(())
}

#[test]
fn test_env_layer_wins_over_manifest() -> Result<()> {
    let file = ConfigFile::from_toml(
        r#"
        [networks.tenderly]
        url = "https://self-hosted.example.com"
        "#,
    )?;

    let mut config = ProjectConfig::default();
    config.apply_manifest(&file);

    let overrides = EnvOverrides::from_vars([(
        "TENDERLY_RPC".to_string(),
        "https://rpc.tenderly.co/fork/123".to_string(),
    )])?;
    config.apply_env(overrides);

    assert_eq!(
        config.networks["tenderly"].url.as_deref(),
        Some("https://rpc.tenderly.co/fork/123")
    );

    Ok(())
}

#[test]
fn test_live_network_readiness_staging() -> Result<()> {
    let mut config = ProjectConfig::default();

    // Nothing configured: the endpoint is reported missing first
    assert!(matches!(
        config.resolve_network("tenderly"),
        Err(ConfigError::MissingEndpoint(_))
    ));

    // Endpoint configured, still no key
    config.apply_env(EnvOverrides::from_vars([(
        "TENDERLY_RPC".to_string(),
        "https://rpc.tenderly.co/fork/123".to_string(),
    )])?);
    assert!(matches!(
        config.resolve_network("tenderly"),
        Err(ConfigError::MissingSigningKey(_))
    ));

    // Key configured: the network resolves
    config.apply_env(EnvOverrides::from_vars([(
        "PRIVATE_KEY".to_string(),
        "4c0883a69102937d6231471b5dbb6204fe51296170827936ea5cce4b76994b0f".to_string(),
    )])?);
    let profile = config.resolve_network("tenderly")?;
    assert_eq!(profile.signing_keys().len(), 1);

    Ok(())
}

#[test]
fn test_local_network_resolves_without_env() -> Result<()> {
    let config = ProjectConfig::default();
    let profile = config.resolve_network("hardhat")?;
    assert!(!profile.live);

    Ok(())
}
