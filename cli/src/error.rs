#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use sillywalk_core::RegistryError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Loading, registering or rendering failed.
    #[display("Registry error: {}", _0)]
    Registry(RegistryError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Output could not be serialized.
    #[display("Serialization error: {}", _0)]
    Serialization(serde_json::Error),
}

impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
