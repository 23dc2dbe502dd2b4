//! Definitions of CLI arguments and commands for the configuration scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use deploy_config::config::ProjectConfig;

use crate::{
    commands::{check, list_deployments, list_networks, show},
    errors::ScriptError,
};

/// The command line interface to the project configuration
#[derive(Parser)]
pub struct Cli {
    /// The project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// An explicit configuration file, discovered under the project root
    /// when unset
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The configuration subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved configuration as JSON
    Show,
    /// Check that the networks are ready to be deployed to
    Check(CheckArgs),
    /// List the configured networks
    Networks,
    /// List the deployments recorded for a network
    Deployments(DeploymentsArgs),
}

impl Command {
    /// Run the command against the loaded configuration
    pub fn run(self, config: &ProjectConfig, root: &Path) -> Result<(), ScriptError> {
        match self {
            Command::Show => show(config),
            Command::Check(args) => check(args, config),
            Command::Networks => list_networks(config),
            Command::Deployments(args) => list_deployments(args, config, root),
        }
    }
}

/// Check that a network is ready to be deployed to
#[derive(Args)]
pub struct CheckArgs {
    /// The network to check, every live network when unset
    #[arg(short, long)]
    pub network: Option<String>,
}

/// List the deployments recorded for a network
#[derive(Args)]
pub struct DeploymentsArgs {
    /// The network whose deployments to list
    #[arg(short, long)]
    pub network: String,
}
