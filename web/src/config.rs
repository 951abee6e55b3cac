#![deny(missing_docs)]

//! # Server Configuration
//!
//! Reads the demo server settings from the environment (and `.env`).

use sillywalk_core::RegistryConfig;

/// Address used when `SILLYWALK_BIND` is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Settings of the documented server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Registry settings.
    pub registry: RegistryConfig,
}

impl ServerConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from a variable lookup.
    ///
    /// - `SILLYWALK_BIND`: listen address.
    /// - `SILLYWALK_BASE_URL`: public base URL of the API.
    /// - `SILLYWALK_API_VERSION`: documented API version.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut registry = RegistryConfig::default();
        if let Some(base_url) = lookup("SILLYWALK_BASE_URL") {
            registry.base_url = base_url;
        }
        if let Some(api_version) = lookup("SILLYWALK_API_VERSION") {
            registry.api_version = api_version;
        }

        Self {
            bind_addr: lookup("SILLYWALK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            registry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SILLYWALK_BIND", "0.0.0.0:5000"),
            ("SILLYWALK_BASE_URL", "http://localhost:5000/api/v1"),
            ("SILLYWALK_API_VERSION", "2.0"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.registry.base_url, "http://localhost:5000/api/v1");
        assert_eq!(config.registry.api_version, "2.0");
    }
}
