#![deny(missing_docs)]

//! # Model Schemas
//!
//! Models are registered through [`ModelSchema`], an explicit description of
//! a type's constructor: its fields in declaration order and which of them
//! carry a default value. Fields without a default become `required`; fields
//! with one are listed under `properties` together with their default.

use crate::error::RegistryResult;
use crate::swagger::models::SwaggerObject;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Model kind used when none is given.
pub const DEFAULT_MODEL_KIND: &str = "object";

/// Identifier of a registered model (its type name).
pub type ModelId = String;

/// One constructor field of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Default value, if the field has one. `Some(Null)` is a `null` default.
    #[serde(
        default,
        deserialize_with = "present_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<JsonValue>,
}

/// A missing `default` key means "required"; any written value, `null`
/// included, is a default.
fn present_default<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

impl FieldSpec {
    /// A field callers must provide.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A field with a default value.
    pub fn with_default(name: impl Into<String>, default: impl Into<JsonValue>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// Capability of every registrable model type.
pub trait ModelSchema {
    /// Model id, normally the type name.
    fn model_id(&self) -> String;

    /// Model description ("" when undocumented).
    fn description(&self) -> String {
        String::new()
    }

    /// Model kind.
    fn kind(&self) -> String {
        DEFAULT_MODEL_KIND.to_string()
    }

    /// Constructor fields in declaration order.
    fn fields(&self) -> Vec<FieldSpec>;
}

/// A model declaration held as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model id.
    pub id: String,
    /// Model description.
    #[serde(default)]
    pub description: String,
    /// Model kind.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Constructor fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

fn default_kind() -> String {
    DEFAULT_MODEL_KIND.to_string()
}

impl ModelDescriptor {
    /// Creates an empty `object` model.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            kind: default_kind(),
            fields: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}

impl ModelSchema for ModelDescriptor {
    fn model_id(&self) -> String {
        self.id.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn kind(&self) -> String {
        self.kind.clone()
    }

    fn fields(&self) -> Vec<FieldSpec> {
        self.fields.clone()
    }
}

/// The `properties` entry of a defaulted field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySchema {
    /// Default value.
    pub default: JsonValue,
}

/// A registered model schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    id: String,
    description: String,
    #[serde(rename = "type")]
    kind: String,
    required: Vec<String>,
    properties: IndexMap<String, PropertySchema>,
}

impl Model {
    /// Partitions the schema's fields into `required` and `properties`.
    pub fn from_schema<M: ModelSchema + ?Sized>(schema: &M, kind: impl Into<String>) -> Self {
        let mut required = Vec::new();
        let mut properties = IndexMap::new();
        for field in schema.fields() {
            match field.default {
                Some(default) => {
                    properties.insert(field.name, PropertySchema { default });
                }
                None => required.push(field.name),
            }
        }

        Self {
            id: schema.model_id(),
            description: schema.description(),
            kind: kind.into(),
            required,
            properties,
        }
    }

    /// Model id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Model description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Model kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Fields without defaults, in declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Fields with defaults.
    pub fn properties(&self) -> &IndexMap<String, PropertySchema> {
        &self.properties
    }

    /// Ordered key/value projection of this model.
    pub fn document(&self) -> RegistryResult<JsonMap<String, JsonValue>> {
        SwaggerObject::Model(self).document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Shopkeeper;

    impl ModelSchema for Shopkeeper {
        fn model_id(&self) -> String {
            "Shopkeeper".into()
        }

        fn fields(&self) -> Vec<FieldSpec> {
            vec![
                FieldSpec::required("name"),
                FieldSpec::required("age"),
                FieldSpec::with_default("birthday", "tomorrow"),
            ]
        }
    }

    #[test]
    fn test_partition_required_and_defaults() {
        let model = Model::from_schema(&Shopkeeper, Shopkeeper.kind());
        assert_eq!(model.required(), ["name", "age"]);
        assert_eq!(model.properties().len(), 1);
        assert_eq!(model.properties()["birthday"].default, json!("tomorrow"));
        assert_eq!(model.kind(), "object");
        assert_eq!(model.description(), "");
    }

    #[test]
    fn test_model_document() {
        let model = Model::from_schema(&Shopkeeper, "object");
        assert_eq!(
            JsonValue::Object(model.document().unwrap()),
            json!({
                "id": "Shopkeeper",
                "description": "",
                "type": "object",
                "required": ["name", "age"],
                "properties": {"birthday": {"default": "tomorrow"}}
            })
        );
    }

    #[test]
    fn test_all_fields_defaulted() {
        let descriptor = ModelDescriptor::new("Settings")
            .field(FieldSpec::with_default("verbose", false))
            .field(FieldSpec::with_default("retries", 3));
        let model = Model::from_schema(&descriptor, descriptor.kind());
        assert!(model.required().is_empty());
        let keys: Vec<&str> = model.properties().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["verbose", "retries"]);
    }

    #[test]
    fn test_descriptor_from_yaml() {
        let yaml = r#"
id: Knight
description: Says ni.
fields:
  - name: name
  - name: quest
    default: grail
"#;
        let descriptor: ModelDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(descriptor.kind, "object");
        let model = Model::from_schema(&descriptor, descriptor.kind());
        assert_eq!(model.required(), ["name"]);
        assert_eq!(model.properties()["quest"].default, json!("grail"));
        assert_eq!(model.description(), "Says ni.");
    }

    #[test]
    fn test_null_default_is_a_property() {
        let yaml = r#"
id: Horse
fields:
  - name: name
  - name: coconuts
    default: null
"#;
        let descriptor: ModelDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(descriptor.fields[0].default, None);
        assert_eq!(descriptor.fields[1].default, Some(JsonValue::Null));

        let model = Model::from_schema(&descriptor, descriptor.kind());
        assert_eq!(model.required(), ["name"]);
        assert_eq!(
            JsonValue::Object(model.document().unwrap())["properties"],
            json!({"coconuts": {"default": null}})
        );
    }

    #[test]
    fn test_null_default_from_code() {
        let descriptor =
            ModelDescriptor::new("Knight").field(FieldSpec::with_default("quest", JsonValue::Null));
        let model = Model::from_schema(&descriptor, "object");
        assert!(model.required().is_empty());
        assert_eq!(model.properties()["quest"].default, JsonValue::Null);
    }
}
