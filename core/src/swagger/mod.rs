#![deny(missing_docs)]

//! # Swagger Registry Module
//!
//! - **models**: Value objects (parameters, error responses, operations).
//! - **schema**: Model schemas and the `ModelSchema` capability.
//! - **declarations**: Registration inputs.
//! - **paths**: Base path, resource and placeholder handling.
//! - **binder**: The router seam.
//! - **registry**: The registry itself.
//! - **views**: Class-based view descriptions.
//! - **render**: Index and resource documents.

pub mod binder;
pub mod declarations;
pub mod models;
pub mod paths;
pub mod registry;
pub mod render;
pub mod schema;
pub mod views;

pub use binder::{RouteBinder, RouteBinding, RouteLog, RouteTarget};
pub use declarations::{EndpointDeclaration, Handler};
pub use models::{
    DataType, ErrorResponse, HttpMethod, Operation, ParamLocation, Parameter, SwaggerObject,
};
pub use registry::{read_registry, write_registry, SharedRegistry, SwaggerRegistry};
pub use render::{IndexDocument, ResourceDocument, SWAGGER_VERSION};
pub use schema::{FieldSpec, Model, ModelDescriptor, ModelId, ModelSchema};
pub use views::{ViewDescriptor, ViewMember, ViewRoute};
