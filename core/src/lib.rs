#![deny(missing_docs)]

//! # Sillywalk Core
//!
//! Registry that accumulates endpoint and model declarations and renders them
//! as Swagger 1.x API documents.

/// Shared error types.
pub mod error;

/// Registry settings.
pub mod config;

/// Swagger value objects, registry and renderer.
pub mod swagger;

/// Declarative YAML/JSON catalogs.
pub mod catalog;

pub use catalog::{Catalog, EndpointSpec, ParameterSpec};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use swagger::{
    read_registry, write_registry, DataType, EndpointDeclaration, ErrorResponse, FieldSpec,
    Handler, HttpMethod, IndexDocument, Model, ModelDescriptor, ModelId, ModelSchema, Operation,
    ParamLocation, Parameter, ResourceDocument, RouteBinder, RouteBinding, RouteLog, RouteTarget,
    SharedRegistry, SwaggerObject, SwaggerRegistry, ViewDescriptor, ViewMember, ViewRoute,
    SWAGGER_VERSION,
};
