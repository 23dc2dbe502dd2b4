//! Scripts for inspecting and checking the contracts project configuration.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod errors;
