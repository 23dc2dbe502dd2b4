//! Definitions of errors that can occur while loading or validating the
//! project configuration

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while loading or validating the project configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Error reading a file from disk
    ReadFile(String),
    /// Error writing a file to disk
    WriteFile(String),
    /// Error parsing the configuration file
    ManifestParsing(String),
    /// Error parsing a compiler version
    InvalidVersion(String),
    /// Error parsing a private key
    InvalidKey(String),
    /// Error validating a mnemonic phrase
    InvalidMnemonic(String),
    /// Error validating an RPC endpoint URL
    InvalidEndpoint(String),
    /// A network name that does not appear in the network table
    UnknownNetwork(String),
    /// A live network selected without an RPC endpoint configured
    MissingEndpoint(String),
    /// A live network selected without a signing key configured
    MissingSigningKey(String),
    /// The assembled configuration failed validation
    Validation(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ConfigError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ConfigError::ManifestParsing(s) => {
                write!(f, "error parsing configuration file: {}", s)
            }
            ConfigError::InvalidVersion(s) => write!(f, "invalid compiler version: {}", s),
            ConfigError::InvalidKey(s) => write!(f, "invalid signing key: {}", s),
            ConfigError::InvalidMnemonic(s) => write!(f, "invalid mnemonic: {}", s),
            ConfigError::InvalidEndpoint(s) => write!(f, "invalid endpoint url: {}", s),
            ConfigError::UnknownNetwork(s) => write!(f, "unknown network: {}", s),
            ConfigError::MissingEndpoint(s) => write!(f, "missing endpoint url: {}", s),
            ConfigError::MissingSigningKey(s) => write!(f, "missing signing key: {}", s),
            ConfigError::Validation(s) => write!(f, "invalid configuration: {}", s),
        }
    }
}

impl Error for ConfigError {}
