#![deny(missing_docs)]

//! # Document Rendering
//!
//! Builds the served documents from the registry's current state. Nothing is
//! cached: every call reflects registrations made up to that point.

use crate::error::{RegistryError, RegistryResult};
use crate::swagger::models::Operation;
use crate::swagger::registry::SwaggerRegistry;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Swagger specification version of the served documents.
pub const SWAGGER_VERSION: &str = "1.3";

/// Index entry pointing at one resource document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceReference {
    /// `/{resource}.{format}`
    pub path: String,
    /// Configured resource description, or "".
    pub description: String,
}

/// Top-level document listing every resource and model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    /// Version of the documented API.
    pub api_version: String,
    /// Swagger specification version.
    pub swagger_version: String,
    /// Base URL of the API.
    pub base_path: String,
    /// One entry per resource.
    pub apis: Vec<ResourceReference>,
    /// Model documents keyed by id.
    pub models: JsonMap<String, JsonValue>,
}

/// Operations sharing one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDescription {
    /// Resource-relative path with `{name}` placeholders.
    pub path: String,
    /// Always "".
    pub description: String,
    /// Operation documents in registration order.
    pub operations: Vec<JsonMap<String, JsonValue>>,
}

/// Document listing the operations of one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    /// The resource name.
    pub resource_path: String,
    /// Version of the documented API.
    pub api_version: String,
    /// Swagger specification version.
    pub swagger_version: String,
    /// Base URL of the API.
    pub base_path: String,
    /// One entry per path.
    pub apis: Vec<ApiDescription>,
    /// Always empty.
    pub models: Vec<JsonValue>,
}

impl IndexDocument {
    /// Serializes the document to compact JSON.
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ResourceDocument {
    /// Serializes the document to compact JSON.
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl SwaggerRegistry {
    /// Renders the index document.
    pub fn render_index(&self) -> RegistryResult<IndexDocument> {
        let apis = self
            .resources()
            .map(|resource| ResourceReference {
                path: format!("/{}.{{format}}", resource),
                description: self
                    .resource_description(resource)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        let models = self
            .models()
            .map(|model| -> RegistryResult<(String, JsonValue)> {
                Ok((model.id().to_string(), JsonValue::Object(model.document()?)))
            })
            .collect::<RegistryResult<_>>()?;

        Ok(IndexDocument {
            api_version: self.api_version().to_string(),
            swagger_version: SWAGGER_VERSION.to_string(),
            base_path: self.base_url().to_string(),
            apis,
            models,
        })
    }

    /// Renders the document of `resource`.
    ///
    /// Fails with [`RegistryError::NotFound`] if nothing was registered under it.
    pub fn render_resource(&self, resource: &str) -> RegistryResult<ResourceDocument> {
        let operations = self
            .operations(resource)
            .ok_or_else(|| RegistryError::NotFound(resource.to_string()))?;

        let apis = operations
            .iter()
            .map(|(path, ops)| -> RegistryResult<ApiDescription> {
                Ok(ApiDescription {
                    path: path.clone(),
                    description: String::new(),
                    operations: ops
                        .iter()
                        .map(Operation::document)
                        .collect::<RegistryResult<_>>()?,
                })
            })
            .collect::<RegistryResult<_>>()?;

        Ok(ResourceDocument {
            resource_path: resource.trim_end_matches('/').to_string(),
            api_version: self.api_version().to_string(),
            swagger_version: SWAGGER_VERSION.to_string(),
            base_path: self.base_url().to_string(),
            apis,
            models: Vec::new(),
        })
    }
}
