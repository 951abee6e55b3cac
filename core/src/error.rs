//! # Error Handling
//!
//! Provides the `RegistryError` enum shared by every registry operation.

use derive_more::{Display, From};

/// The Registry Error Enum.
///
/// Plain `String` messages default to `General`; the domain variants must be
/// built explicitly.
#[derive(Debug, Display, From)]
pub enum RegistryError {
    /// The registry was used before a route binder was attached.
    #[from(ignore)]
    #[display("Registry not initialized: {_0}")]
    NotInitialized(String),

    /// A declaration is invalid (e.g. an implicit parameter without a default).
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Configuration(String),

    /// A resource document was requested for an unknown resource.
    #[from(ignore)]
    #[display("Resource not found: {_0}")]
    NotFound(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_json::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for RegistryError {}

/// Helper type alias for Result using RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Builds the error raised when no binder is attached yet.
    pub(crate) fn not_initialized() -> Self {
        RegistryError::NotInitialized(
            "attach a route binder to the SwaggerRegistry before registering".into(),
        )
    }
}
