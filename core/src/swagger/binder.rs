#![deny(missing_docs)]

//! # Route Binding
//!
//! The seam between the registry and the host router. The registry reports
//! every route it needs as a [`RouteBinding`]; the router decides how to serve it.

use crate::error::{RegistryError, RegistryResult};
use crate::swagger::models::HttpMethod;
use std::sync::{Arc, Mutex};

/// What a bound route serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// The index document.
    Index,
    /// The document of one resource.
    ResourceListing(String),
    /// An application handler, by name.
    Handler(String),
}

/// One route the registry asks the router to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    /// Fully qualified path, in registration syntax for handler routes.
    pub path: String,
    /// Endpoint name (handler name, resource name or `resources`).
    pub endpoint: String,
    /// Methods accepted on the route.
    pub methods: Vec<HttpMethod>,
    /// What the route serves.
    pub target: RouteTarget,
}

/// A router the registry can bind routes onto.
pub trait RouteBinder: Send + Sync {
    /// Registers a concrete route.
    fn bind_route(&mut self, binding: RouteBinding) -> RegistryResult<()>;
}

/// A binder that records bindings for a router to replay.
///
/// Clones share the same record, so one clone can be attached to the registry
/// while another is handed to the router.
#[derive(Debug, Clone, Default)]
pub struct RouteLog {
    bindings: Arc<Mutex<Vec<RouteBinding>>>,
}

impl RouteLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the bindings, in binding order.
    pub fn bindings(&self) -> RegistryResult<Vec<RouteBinding>> {
        let guard = self
            .bindings
            .lock()
            .map_err(|e| RegistryError::General(format!("Route log poisoned: {}", e)))?;
        Ok(guard.clone())
    }
}

impl RouteBinder for RouteLog {
    fn bind_route(&mut self, binding: RouteBinding) -> RegistryResult<()> {
        tracing::debug!(
            path = %binding.path,
            endpoint = %binding.endpoint,
            "binding route"
        );
        let mut guard = self
            .bindings
            .lock()
            .map_err(|e| RegistryError::General(format!("Route log poisoned: {}", e)))?;
        guard.push(binding);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_log_clones_share_bindings() {
        let log = RouteLog::new();
        let mut attached = log.clone();
        attached
            .bind_route(RouteBinding {
                path: "/api/v1/cheese.json".into(),
                endpoint: "cheese".into(),
                methods: vec![HttpMethod::Get],
                target: RouteTarget::ResourceListing("cheese".into()),
            })
            .unwrap();

        let bindings = log.bindings().unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].endpoint, "cheese");
    }
}
