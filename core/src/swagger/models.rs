#![deny(missing_docs)]

//! # Swagger Value Objects
//!
//! Immutable descriptors for parameters, error responses and operations.
//!
//! Every value object projects itself into an insertion-ordered JSON map via
//! `document()`, so two renders of the same registry state serialize to the
//! same bytes.

use crate::error::{RegistryError, RegistryResult};
use crate::swagger::declarations::{EndpointDeclaration, Handler};
use crate::swagger::schema::Model;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An HTTP verb bound to an operation.
///
/// Parsing is case-sensitive: `"GET"` is [`HttpMethod::Get`] while `"get"`
/// is kept verbatim as an extension method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HttpMethod {
    /// `GET`
    #[default]
    #[serde(rename = "GET")]
    Get,
    /// `POST`
    #[serde(rename = "POST")]
    Post,
    /// `PUT`
    #[serde(rename = "PUT")]
    Put,
    /// `DELETE`
    #[serde(rename = "DELETE")]
    Delete,
    /// `PATCH`
    #[serde(rename = "PATCH")]
    Patch,
    /// `HEAD`
    #[serde(rename = "HEAD")]
    Head,
    /// `OPTIONS`
    #[serde(rename = "OPTIONS")]
    Options,
    /// Any other method token, exactly as supplied.
    #[serde(untagged)]
    Extension(String),
}

impl HttpMethod {
    /// Returns the method token.
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Extension(token) => token,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            other => HttpMethod::Extension(other.to_string()),
        })
    }
}

impl From<&str> for HttpMethod {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(method) => method,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Text.
    #[serde(rename = "str")]
    Str,
    /// Integer.
    #[serde(rename = "int")]
    Int,
    /// Floating point number.
    #[serde(rename = "float")]
    Float,
    /// Boolean.
    #[serde(rename = "bool")]
    Bool,
    /// Calendar date.
    #[serde(rename = "date")]
    Date,
    /// Date with time.
    #[serde(rename = "dateTime")]
    DateTime,
    /// Uploaded file.
    #[serde(rename = "file")]
    File,
    /// Any other type name, typically a registered model id.
    #[serde(untagged)]
    Named(String),
}

/// Where a parameter is read from (`paramType` in Swagger 1.x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Path placeholder.
    Path,
    /// Query string.
    Query,
    /// Request body.
    Body,
    /// Request header.
    Header,
    /// Form field.
    Form,
}

/// A single operation parameter.
///
/// Parameters carrying a `defaultValue` are "implicit": the framework supplies
/// the value when the caller does not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    name: String,
    description: String,
    required: bool,
    data_type: DataType,
    #[serde(rename = "paramType")]
    location: ParamLocation,
    allow_multiple: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<JsonValue>,
}

impl Parameter {
    /// Creates an explicit parameter. `allow_multiple` starts out `false`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        data_type: DataType,
        location: ParamLocation,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            data_type,
            location,
            allow_multiple: false,
            default_value: None,
        }
    }

    /// Creates an implicit parameter.
    ///
    /// Fails with [`RegistryError::Configuration`] when `default_value` is `None`.
    pub fn implicit(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        data_type: DataType,
        location: ParamLocation,
        default_value: Option<JsonValue>,
    ) -> RegistryResult<Self> {
        let name = name.into();
        let Some(default_value) = default_value else {
            return Err(RegistryError::Configuration(format!(
                "implicit parameter '{}' needs a default value",
                name
            )));
        };
        let mut param = Self::new(name, description, required, data_type, location);
        param.default_value = Some(default_value);
        Ok(param)
    }

    /// Sets whether the parameter accepts multiple values.
    pub fn allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether callers must supply the parameter.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Declared value type.
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Where the value is read from.
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// Whether multiple values are accepted.
    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Default value of an implicit parameter.
    pub fn default_value(&self) -> Option<&JsonValue> {
        self.default_value.as_ref()
    }

    /// Whether this is an implicit parameter.
    pub fn is_implicit(&self) -> bool {
        self.default_value.is_some()
    }

    /// Ordered key/value projection of this parameter.
    pub fn document(&self) -> RegistryResult<JsonMap<String, JsonValue>> {
        SwaggerObject::Parameter(self).document()
    }
}

/// A documented error outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Explanation shown to API consumers.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error response.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Ordered key/value projection of this error response.
    pub fn document(&self) -> RegistryResult<JsonMap<String, JsonValue>> {
        SwaggerObject::ErrorResponse(self).document()
    }
}

/// One HTTP-method-bound endpoint declaration.
///
/// Built by the registry; the path is resource-relative and uses `{name}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    http_method: HttpMethod,
    summary: String,
    resource: String,
    path: String,
    parameters: Vec<Parameter>,
    error_responses: Vec<ErrorResponse>,
    nickname: String,
    notes: Option<String>,
}

impl Operation {
    /// Builds an operation from a declaration whose path is already
    /// resource-relative (`relative_path`) and whose resource was derived from it.
    pub(crate) fn from_declaration(
        handler: &Handler,
        relative_path: &str,
        resource: &str,
        declaration: EndpointDeclaration,
    ) -> Self {
        Self {
            http_method: declaration.method,
            summary: handler.description().unwrap_or_default().to_string(),
            resource: resource.to_string(),
            path: crate::swagger::paths::to_brace_placeholders(relative_path),
            parameters: declaration.parameters,
            error_responses: declaration.error_responses,
            nickname: declaration.nickname.unwrap_or_default(),
            notes: declaration.notes,
        }
    }

    /// HTTP method.
    pub fn http_method(&self) -> &HttpMethod {
        &self.http_method
    }

    /// Summary taken from the handler description.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Resource this operation belongs to.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Resource-relative path with `{name}` placeholders.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared parameters, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Declared error responses, in declaration order.
    pub fn error_responses(&self) -> &[ErrorResponse] {
        &self.error_responses
    }

    /// Nickname ("" unless given).
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Free-form notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Ordered key/value projection of this operation.
    pub fn document(&self) -> RegistryResult<JsonMap<String, JsonValue>> {
        SwaggerObject::Operation(self).document()
    }
}

/// The closed set of documentable Swagger objects.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum SwaggerObject<'a> {
    /// An operation parameter.
    Parameter(&'a Parameter),
    /// An error response.
    ErrorResponse(&'a ErrorResponse),
    /// An operation.
    Operation(&'a Operation),
    /// A model schema.
    Model(&'a Model),
}

impl SwaggerObject<'_> {
    /// Projects the object into an insertion-ordered JSON map.
    ///
    /// Fails with [`RegistryError::Serialization`] if serialization fails, or
    /// [`RegistryError::General`] if the object does not serialize to a map.
    pub fn document(&self) -> RegistryResult<JsonMap<String, JsonValue>> {
        match serde_json::to_value(self)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(RegistryError::General(format!(
                "Swagger object did not serialize to a map: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::schema::ModelDescriptor;
    use serde_json::json;

    fn cheese_param() -> Parameter {
        Parameter::new(
            "cheeseName",
            "The name of the cheese to fetch",
            true,
            DataType::Str,
            ParamLocation::Path,
        )
    }

    #[test]
    fn test_parameter_document_keys_in_order() {
        let doc = cheese_param().document().unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "description",
                "required",
                "dataType",
                "paramType",
                "allowMultiple"
            ]
        );
        assert_eq!(doc["paramType"], json!("path"));
        assert_eq!(doc["dataType"], json!("str"));
        assert_eq!(doc["allowMultiple"], json!(false));
    }

    #[test]
    fn test_implicit_parameter_requires_default() {
        let err = Parameter::implicit(
            "limit",
            "Page size",
            false,
            DataType::Int,
            ParamLocation::Query,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::Configuration(_)));
    }

    #[test]
    fn test_implicit_parameter_documents_default() {
        let param = Parameter::implicit(
            "limit",
            "Page size",
            false,
            DataType::Int,
            ParamLocation::Query,
            Some(json!(20)),
        )
        .unwrap()
        .allow_multiple(true);

        assert!(param.is_implicit());
        let doc = param.document().unwrap();
        assert_eq!(doc["defaultValue"], json!(20));
        assert_eq!(doc["allowMultiple"], json!(true));
        assert_eq!(doc.keys().last().map(String::as_str), Some("defaultValue"));
    }

    #[test]
    fn test_error_response_document() {
        let doc = ErrorResponse::new(418, "I'm actually a teapot")
            .document()
            .unwrap();
        assert_eq!(
            JsonValue::Object(doc),
            json!({"code": 418, "message": "I'm actually a teapot"})
        );
    }

    #[test]
    fn test_every_swagger_object_documents_as_map() {
        let param = cheese_param();
        let error = ErrorResponse::new(400, "Out of cheese");
        let op = Operation::from_declaration(
            &Handler::new("get_cheese"),
            "/cheese",
            "cheese",
            EndpointDeclaration::new("/cheese"),
        );
        let model = Model::from_schema(&ModelDescriptor::new("Cheese"), "object");

        for object in [
            SwaggerObject::Parameter(&param),
            SwaggerObject::ErrorResponse(&error),
            SwaggerObject::Operation(&op),
            SwaggerObject::Model(&model),
        ] {
            assert!(!object.document().unwrap().is_empty());
        }
    }

    #[test]
    fn test_http_method_parsing_is_case_sensitive() {
        assert_eq!(HttpMethod::from("PUT"), HttpMethod::Put);
        assert_eq!(
            HttpMethod::from("put"),
            HttpMethod::Extension("put".into())
        );
        assert_eq!(HttpMethod::from("PURGE").to_string(), "PURGE");
    }

    #[test]
    fn test_named_data_type_serializes_verbatim() {
        let value = serde_json::to_value(DataType::Named("Shopkeeper".into())).unwrap();
        assert_eq!(value, json!("Shopkeeper"));
        let parsed: DataType = serde_json::from_value(json!("dateTime")).unwrap();
        assert_eq!(parsed, DataType::DateTime);
    }

    #[test]
    fn test_operation_document() {
        let handler = Handler::new("get_cheese").with_description("Gets cheese.");
        let declaration = EndpointDeclaration::new("/cheese/<cheeseName>")
            .parameter(cheese_param())
            .error_response(ErrorResponse::new(400, "Out of cheese"));
        let op = Operation::from_declaration(
            &handler,
            "/cheese/<cheeseName>",
            "cheese",
            declaration,
        );

        let doc = op.document().unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "httpMethod",
                "summary",
                "resource",
                "path",
                "parameters",
                "errorResponses",
                "nickname",
                "notes"
            ]
        );
        assert_eq!(doc["path"], json!("/cheese/{cheeseName}"));
        assert_eq!(doc["httpMethod"], json!("GET"));
        assert_eq!(doc["summary"], json!("Gets cheese."));
        assert_eq!(doc["nickname"], json!(""));
        assert_eq!(doc["notes"], JsonValue::Null);
        assert_eq!(doc["parameters"][0]["name"], json!("cheeseName"));
        assert_eq!(doc["errorResponses"][0]["code"], json!(400));
    }
}
