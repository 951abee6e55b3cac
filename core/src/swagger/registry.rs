#![deny(missing_docs)]

//! # Swagger Registry
//!
//! Accumulates endpoint and model declarations and groups operations by
//! resource and normalized path.
//!
//! Registration never replaces an operation: declaring the same path and
//! method twice keeps both operations, in registration order. Listing routes
//! are bound once per resource.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::swagger::binder::{RouteBinder, RouteBinding, RouteTarget};
use crate::swagger::declarations::{EndpointDeclaration, Handler};
use crate::swagger::models::{HttpMethod, Operation};
use crate::swagger::paths;
use crate::swagger::schema::{Model, ModelId, ModelSchema};
use crate::swagger::views::ViewDescriptor;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Operations of one resource, keyed by normalized path.
pub type PathOperations = IndexMap<String, Vec<Operation>>;

/// A registry shared between the registering code and request handlers.
///
/// Registration holds the write lock for the whole call; rendering holds the read lock.
pub type SharedRegistry = Arc<RwLock<SwaggerRegistry>>;

/// Registry of API resources, operations and models.
pub struct SwaggerRegistry {
    base_url: String,
    base_path: String,
    api_version: String,
    resource_descriptions: IndexMap<String, String>,
    resources: IndexMap<String, PathOperations>,
    models: IndexMap<ModelId, Model>,
    registered_routes: IndexSet<String>,
    binder: Option<Box<dyn RouteBinder>>,
}

impl fmt::Debug for SwaggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwaggerRegistry")
            .field("base_url", &self.base_url)
            .field("base_path", &self.base_path)
            .field("api_version", &self.api_version)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .field("initialized", &self.binder.is_some())
            .finish_non_exhaustive()
    }
}

impl SwaggerRegistry {
    /// Creates a registry without a binder.
    ///
    /// Fails with [`RegistryError::Configuration`] if the base URL cannot be parsed.
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        let base_path = paths::base_path_of(&config.base_url)?;
        Ok(Self {
            base_url: config.base_url,
            base_path,
            api_version: config.api_version,
            resource_descriptions: config.resource_descriptions,
            resources: IndexMap::new(),
            models: IndexMap::new(),
            registered_routes: IndexSet::new(),
            binder: None,
        })
    }

    /// Creates a registry and attaches `binder` to it.
    pub fn with_binder(
        config: RegistryConfig,
        binder: impl RouteBinder + 'static,
    ) -> RegistryResult<Self> {
        let mut registry = Self::new(config)?;
        registry.attach(binder)?;
        Ok(registry)
    }

    /// Attaches the router and binds the index route(s) onto it.
    pub fn attach(&mut self, binder: impl RouteBinder + 'static) -> RegistryResult<()> {
        let mut binder: Box<dyn RouteBinder> = Box::new(binder);
        for fmt in paths::SUPPORTED_FORMATS {
            let route = paths::index_route(&self.base_path, fmt);
            binder.bind_route(RouteBinding {
                path: route.clone(),
                endpoint: "resources".to_string(),
                methods: vec![HttpMethod::Get],
                target: RouteTarget::Index,
            })?;
            self.registered_routes.insert(route);
        }
        self.binder = Some(binder);
        tracing::debug!(base_url = %self.base_url, "swagger registry attached");
        Ok(())
    }

    /// Whether a binder is attached.
    pub fn is_initialized(&self) -> bool {
        self.binder.is_some()
    }

    /// Moves the registry behind a lock for sharing with request handlers.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Registers an endpoint and binds its handler route.
    ///
    /// The path may include the base path; it is stripped before the resource
    /// is derived. The first endpoint of a resource also binds the resource's
    /// listing route.
    pub fn register(
        &mut self,
        handler: &Handler,
        declaration: EndpointDeclaration,
    ) -> RegistryResult<()> {
        if self.binder.is_none() {
            return Err(RegistryError::not_initialized());
        }

        let relative = paths::relative_path(&self.base_path, &declaration.path);
        let resource = paths::resource_name(&relative)?.to_string();

        let binding = RouteBinding {
            path: paths::qualified_path(&self.base_path, &relative),
            endpoint: handler.name().to_string(),
            methods: vec![declaration.method.clone()],
            target: RouteTarget::Handler(handler.name().to_string()),
        };
        self.bind(binding)?;

        let operation = Operation::from_declaration(handler, &relative, &resource, declaration);
        self.catalog(operation)
    }

    /// Catalogs every member of a class-based view without binding member routes.
    ///
    /// Returns the number of operations added.
    pub fn register_view<V: ViewDescriptor + ?Sized>(&mut self, view: &V) -> RegistryResult<usize> {
        if self.binder.is_none() {
            return Err(RegistryError::not_initialized());
        }

        let mut added = 0;
        for member in view.members() {
            for (path, method) in member.endpoints(view.route_base()) {
                let relative = paths::relative_path(&self.base_path, &path);
                let resource = paths::resource_name(&relative)?.to_string();
                let declaration = EndpointDeclaration::new(path)
                    .method(method)
                    .parameters(member.parameters.clone())
                    .error_responses(member.error_responses.clone());
                let operation =
                    Operation::from_declaration(&member.handler, &relative, &resource, declaration);
                self.catalog(operation)?;
                added += 1;
            }
        }
        Ok(added)
    }

    /// Registers a model with the kind it declares.
    pub fn register_model<M: ModelSchema + ?Sized>(&mut self, model: &M) -> RegistryResult<ModelId> {
        let kind = model.kind();
        self.register_model_as(model, kind)
    }

    /// Registers a model under an explicit kind, replacing any model with the same id.
    pub fn register_model_as<M: ModelSchema + ?Sized>(
        &mut self,
        model: &M,
        kind: impl Into<String>,
    ) -> RegistryResult<ModelId> {
        if self.binder.is_none() {
            return Err(RegistryError::not_initialized());
        }

        let model = Model::from_schema(model, kind);
        let id = model.id().to_string();
        tracing::debug!(model = %id, required = model.required().len(), "registered model");
        self.models.insert(id.clone(), model);
        Ok(id)
    }

    /// Full base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path component of the base URL.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Version of the documented API.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Description of a resource, if configured.
    pub fn resource_description(&self, resource: &str) -> Option<&str> {
        self.resource_descriptions.get(resource).map(String::as_str)
    }

    /// Known resources, in discovery order.
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Operations of a resource keyed by path.
    pub fn operations(&self, resource: &str) -> Option<&PathOperations> {
        self.resources.get(resource)
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// A registered model.
    pub fn model(&self, id: &str) -> Option<&Model> {
        self.models.get(id)
    }

    /// Routes bound for documents (index and listing routes).
    pub fn registered_routes(&self) -> impl Iterator<Item = &str> {
        self.registered_routes.iter().map(String::as_str)
    }

    fn bind(&mut self, binding: RouteBinding) -> RegistryResult<()> {
        let binder = self.binder.as_mut().ok_or_else(RegistryError::not_initialized)?;
        binder.bind_route(binding)
    }

    fn catalog(&mut self, operation: Operation) -> RegistryResult<()> {
        self.bind_listing(operation.resource())?;

        tracing::debug!(
            resource = %operation.resource(),
            path = %operation.path(),
            method = %operation.http_method(),
            "registered operation"
        );
        self.resources
            .entry(operation.resource().to_string())
            .or_default()
            .entry(operation.path().to_string())
            .or_default()
            .push(operation);
        Ok(())
    }

    fn bind_listing(&mut self, resource: &str) -> RegistryResult<()> {
        for fmt in paths::SUPPORTED_FORMATS {
            let route = paths::listing_route(&self.base_path, resource, fmt);
            if self.registered_routes.contains(&route) {
                continue;
            }
            self.bind(RouteBinding {
                path: route.clone(),
                endpoint: resource.to_string(),
                methods: vec![HttpMethod::Get],
                target: RouteTarget::ResourceListing(resource.to_string()),
            })?;
            self.registered_routes.insert(route);
        }
        Ok(())
    }
}

/// Takes the read lock of a shared registry.
pub fn read_registry(
    shared: &RwLock<SwaggerRegistry>,
) -> RegistryResult<RwLockReadGuard<'_, SwaggerRegistry>> {
    shared
        .read()
        .map_err(|e| RegistryError::General(format!("Registry lock poisoned: {}", e)))
}

/// Takes the write lock of a shared registry.
pub fn write_registry(
    shared: &RwLock<SwaggerRegistry>,
) -> RegistryResult<RwLockWriteGuard<'_, SwaggerRegistry>> {
    shared
        .write()
        .map_err(|e| RegistryError::General(format!("Registry lock poisoned: {}", e)))
}
