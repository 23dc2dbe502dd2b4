use clap::Parser;
use deploy_config::config::ProjectConfig;
use scripts::{cli::Cli, errors::ScriptError};

fn main() -> Result<(), ScriptError> {
    let Cli {
        root,
        manifest,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let config = ProjectConfig::load_with_manifest(&root, manifest.as_deref())?;

    command.run(&config, &root)
}
