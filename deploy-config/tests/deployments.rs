//! Tests of the per-network deployments records

use alloy_primitives::Address;
use deploy_config::{
    deployments::{
        deployments_file, read_deployed_address, read_deployments, record_deployment,
    },
    network::NetworkProfile,
    paths::ProjectPaths,
};
use eyre::Result;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_record_and_read_back() -> Result<()> {
    let dir = tempdir()?;
    let paths = ProjectPaths::default();
    let profile = NetworkProfile::live("tenderly");
    let address = Address::from([0x42; 20]);

    let written = record_deployment(dir.path(), &paths, &profile, "staking", address)?;
    assert!(written);

    let read = read_deployed_address(dir.path(), &paths, "tenderly", "staking")?;
    assert_eq!(read, address);

    Ok(())
}

#[test]
fn test_local_network_skips_record() -> Result<()> {
    let dir = tempdir()?;
    let paths = ProjectPaths::default();
    let profile = NetworkProfile::local("hardhat");

    let written =
        record_deployment(dir.path(), &paths, &profile, "staking", Address::ZERO)?;
    assert!(!written);
    assert!(!deployments_file(dir.path(), &paths, "hardhat").exists());

    Ok(())
}

#[test]
fn test_file_shape_on_disk() -> Result<()> {
    let dir = tempdir()?;
    let paths = ProjectPaths::default();
    let profile = NetworkProfile::live("avax_mainnet");

    record_deployment(
        dir.path(),
        &paths,
        &profile,
        "staking",
        Address::from([0x42; 20]),
    )?;

    let path = deployments_file(dir.path(), &paths, "avax_mainnet");
    let raw: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;

    let recorded = raw["deployments"]["staking"]
        .as_str()
        .expect("address should be a string");
    assert!(recorded.starts_with("0x"));
    assert_eq!(recorded.len(), 42);

    Ok(())
}

#[test]
fn test_rewrites_preserve_other_entries() -> Result<()> {
    let dir = tempdir()?;
    let paths = ProjectPaths::default();
    let profile = NetworkProfile::live("tenderly");

    record_deployment(
        dir.path(),
        &paths,
        &profile,
        "staking",
        Address::from([0x11; 20]),
    )?;
    record_deployment(
        dir.path(),
        &paths,
        &profile,
        "token",
        Address::from([0x22; 20]),
    )?;
    record_deployment(
        dir.path(),
        &paths,
        &profile,
        "staking",
        Address::from([0x33; 20]),
    )?;

    let deployments = read_deployments(dir.path(), &paths, "tenderly")?;
    assert_eq!(deployments.len(), 2);
    assert_eq!(deployments["staking"], Address::from([0x33; 20]));
    assert_eq!(deployments["token"], Address::from([0x22; 20]));

    Ok(())
}
