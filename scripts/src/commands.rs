//! Implementations of the configuration subcommands

use std::path::Path;

use deploy_config::{
    config::ProjectConfig,
    constants::STAKER_KEY_ENV_VAR,
    deployments::read_deployments,
    errors::ConfigError,
    network::{NetworkAccounts, NetworkProfile},
};
use tracing::{info, warn};

use crate::{
    cli::{CheckArgs, DeploymentsArgs},
    errors::ScriptError,
};

/// Print the resolved configuration as JSON, with key material redacted
pub fn show(config: &ProjectConfig) -> Result<(), ScriptError> {
    let rendered =
        serde_json::to_string_pretty(config).map_err(|e| ScriptError::Serde(e.to_string()))?;
    println!("{rendered}");

    Ok(())
}

/// Check that the named network, or every live network, is ready to be
/// used as a deployment target
pub fn check(args: CheckArgs, config: &ProjectConfig) -> Result<(), ScriptError> {
    config.validate()?;

    if let Some(name) = args.network {
        let profile = config.resolve_network(&name)?;
        report_ready(profile);
    } else {
        let mut not_ready = 0_usize;
        for profile in config.networks.values().filter(|profile| profile.live) {
            match profile.ensure_ready() {
                Ok(()) => report_ready(profile),
                Err(e) => {
                    warn!("network {} not ready: {}", profile.name, e);
                    not_ready += 1;
                }
            }
        }

        if not_ready > 0 {
            return Err(ScriptError::Config(ConfigError::Validation(format!(
                "{} live network(s) not ready",
                not_ready
            ))));
        }
    }

    if config.secrets.staker.is_none() {
        warn!(
            "{} is unset, staking scripts will not run",
            STAKER_KEY_ENV_VAR
        );
    }

    Ok(())
}

/// List the configured networks
pub fn list_networks(config: &ProjectConfig) -> Result<(), ScriptError> {
    for (name, profile) in &config.networks {
        let marker = if name == &config.default_network {
            "*"
        } else {
            " "
        };
        let kind = if profile.live { "live" } else { "local" };
        let chain = profile
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let tags: Vec<&str> = profile.tags.iter().map(String::as_str).collect();
        let endpoint = if profile.url.is_some() { "set" } else { "unset" };

        println!(
            "{} {:<16} {:<5} chain={:<8} tags={:<24} endpoint={:<5} accounts={}",
            marker,
            name,
            kind,
            chain,
            tags.join(","),
            endpoint,
            describe_accounts(&profile.accounts),
        );
    }

    Ok(())
}

/// List the deployments recorded for a network
pub fn list_deployments(
    args: DeploymentsArgs,
    config: &ProjectConfig,
    root: &Path,
) -> Result<(), ScriptError> {
    // Deployments may be inspected on networks that are not ready to be
    // deployed to, a plain lookup is enough
    let profile = config.network(&args.network)?;
    let deployments = read_deployments(root, &config.paths, &profile.name)?;

    if deployments.is_empty() {
        println!("no deployments recorded for {}", profile.name);
        return Ok(());
    }

    for (contract, address) in deployments {
        println!("{contract}: {address:#x}");
    }

    Ok(())
}

/// Log the readiness details of a network
fn report_ready(profile: &NetworkProfile) {
    let endpoint = if profile.url.is_some() {
        "endpoint set"
    } else {
        "in-process"
    };

    info!(
        "network {} ready: {}, {}",
        profile.name,
        endpoint,
        describe_accounts(&profile.accounts)
    );
}

/// Describe the account source of a network
fn describe_accounts(accounts: &NetworkAccounts) -> String {
    match accounts {
        NetworkAccounts::Mnemonic { .. } => "mnemonic-derived".to_string(),
        NetworkAccounts::Keys(keys) => format!("{} signing key(s)", keys.len()),
    }
}
