#![deny(missing_docs)]

//! # Sillywalk Web
//!
//! Serves a Swagger registry through actix-web: the index and resource
//! documents plus the application handlers the registry recorded.

/// Route replay onto actix.
pub mod binding;

/// Environment-driven server settings.
pub mod config;

/// HTTP error mapping.
pub mod error;

pub use binding::{
    index_document, mount, resource_document, route_pattern, HandlerSet, RegistryData,
};
pub use config::ServerConfig;
pub use error::ApiError;

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
