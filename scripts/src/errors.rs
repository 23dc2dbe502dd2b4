//! Definitions of errors that can occur during the execution of the configuration scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use deploy_config::errors::ConfigError;

/// Errors that can occur during the execution of the configuration scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error loading or validating the project configuration
    Config(ConfigError),
    /// Error serializing the configuration for display
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Config(e) => write!(f, "configuration error: {}", e),
            ScriptError::Serde(s) => write!(f, "error serializing configuration: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<ConfigError> for ScriptError {
    fn from(e: ConfigError) -> Self {
        ScriptError::Config(e)
    }
}
