#![deny(missing_docs)]

//! # Declaration Catalogs
//!
//! A catalog declares a registry's configuration, models and endpoints in a
//! YAML or JSON file, so documents can be produced without a running server.
//!
//! ```yaml
//! baseUrl: http://localhost:5000/api/v1
//! models:
//!   - id: Shopkeeper
//!     fields:
//!       - name: name
//!       - name: birthday
//!         default: tomorrow
//! endpoints:
//!   - path: /api/v1/cheese/<cheeseName>
//!     handler: get_cheese
//!     summary: Gets cheese, just like the name says.
//!     parameters:
//!       - name: cheeseName
//!         dataType: str
//!         paramType: path
//!         required: true
//! ```

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::swagger::{
    DataType, EndpointDeclaration, ErrorResponse, Handler, HttpMethod, ModelDescriptor,
    ParamLocation, Parameter, SwaggerRegistry,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// A parameter as written in a catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Whether callers must supply it.
    #[serde(default)]
    pub required: bool,
    /// Value type.
    pub data_type: DataType,
    /// Location.
    pub param_type: ParamLocation,
    /// Whether multiple values are accepted.
    #[serde(default)]
    pub allow_multiple: bool,
    /// Marks an implicit parameter, which needs `defaultValue`.
    #[serde(default)]
    pub implicit: bool,
    /// Default of an implicit parameter.
    #[serde(default)]
    pub default_value: Option<JsonValue>,
}

impl ParameterSpec {
    /// Builds the parameter through its validating constructor.
    pub fn build(&self) -> RegistryResult<Parameter> {
        let param = if self.implicit {
            Parameter::implicit(
                self.name.clone(),
                self.description.clone(),
                self.required,
                self.data_type.clone(),
                self.param_type,
                self.default_value.clone(),
            )?
        } else {
            Parameter::new(
                self.name.clone(),
                self.description.clone(),
                self.required,
                self.data_type.clone(),
                self.param_type,
            )
        };
        Ok(param.allow_multiple(self.allow_multiple))
    }
}

/// An endpoint as written in a catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSpec {
    /// Route path in registration syntax.
    pub path: String,
    /// HTTP method (GET when omitted).
    #[serde(default)]
    pub method: HttpMethod,
    /// Handler name.
    pub handler: String,
    /// Handler description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Nickname.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Error responses.
    #[serde(default)]
    pub error_responses: Vec<ErrorResponse>,
}

impl EndpointSpec {
    /// Builds the handler reference and the declaration.
    pub fn build(&self) -> RegistryResult<(Handler, EndpointDeclaration)> {
        let mut handler = Handler::new(self.handler.clone());
        if let Some(summary) = &self.summary {
            handler = handler.with_description(summary.clone());
        }

        let parameters = self
            .parameters
            .iter()
            .map(ParameterSpec::build)
            .collect::<RegistryResult<Vec<_>>>()?;

        let mut declaration = EndpointDeclaration::new(self.path.clone())
            .method(self.method.clone())
            .parameters(parameters)
            .error_responses(self.error_responses.clone());
        declaration.nickname = self.nickname.clone();
        declaration.notes = self.notes.clone();

        Ok((handler, declaration))
    }
}

/// A declarative set of models and endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    /// Registry settings.
    #[serde(flatten)]
    pub config: RegistryConfig,
    /// Models, registered first.
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
    /// Endpoints, registered in order.
    #[serde(default)]
    pub endpoints: Vec<EndpointSpec>,
}

impl Catalog {
    /// Parses a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> RegistryResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RegistryError::General(format!("Failed to parse catalog YAML: {}", e)))
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a catalog file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> RegistryResult<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Registers the catalog's models, then its endpoints.
    ///
    /// Stops at the first failure; earlier registrations are kept.
    pub fn apply(&self, registry: &mut SwaggerRegistry) -> RegistryResult<()> {
        for model in &self.models {
            registry.register_model(model)?;
        }
        for endpoint in &self.endpoints {
            let (handler, declaration) = endpoint.build()?;
            registry.register(&handler, declaration)?;
        }
        tracing::info!(
            models = self.models.len(),
            endpoints = self.endpoints.len(),
            "catalog applied"
        );
        Ok(())
    }
}
