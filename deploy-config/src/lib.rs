//! Typed build & deploy configuration for the contracts project.
//!
//! Configuration is resolved in three layers: built-in defaults mirroring
//! the project's standing setup, an optional `deploy.toml` file, and the
//! process environment. Later layers win.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod bindings;
pub mod config;
pub mod constants;
pub mod deployments;
pub mod env;
pub mod errors;
pub mod manifest;
pub mod network;
pub mod paths;
pub mod solc;
