//! # Registry Configuration
//!
//! Settings a `SwaggerRegistry` is created with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost/";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Registry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    /// Public URL of the API root; its path is the registry's base path.
    pub base_url: String,
    /// Version of the documented API.
    pub api_version: String,
    /// Descriptions shown for resources in the index document.
    pub resource_descriptions: IndexMap<String, String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            resource_descriptions: IndexMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Settings for `base_url` with the default API version.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Adds a resource description.
    pub fn with_description(
        mut self,
        resource: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.resource_descriptions
            .insert(resource.into(), description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.base_url, "http://localhost/");
        assert_eq!(config.api_version, "1.0");
        assert!(config.resource_descriptions.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: RegistryConfig =
            serde_yaml::from_str("baseUrl: http://localhost:5000/api/v1\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000/api/v1");
        assert_eq!(config.api_version, "1.0");
    }
}
