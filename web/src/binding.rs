#![deny(missing_docs)]

//! # actix-web Binding
//!
//! Replays the routes recorded by a [`RouteLog`](sillywalk_core::RouteLog)
//! onto an actix `ServiceConfig`:
//! - the index and resource routes serve documents from the shared registry,
//! - handler routes are built from a [`HandlerSet`] and grouped per path so
//!   several methods can share one resource.

use crate::error::ApiError;
use actix_web::http::Method;
use actix_web::{web, HttpResponse, Route};
use sillywalk_core::swagger::paths::map_placeholders;
use sillywalk_core::{read_registry, RouteBinding, RouteTarget, SwaggerRegistry};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry state as stored in actix application data.
pub type RegistryData = web::Data<RwLock<SwaggerRegistry>>;

type RouteFactory = Arc<dyn Fn() -> Route + Send + Sync>;

/// Application handlers by name.
///
/// Each worker builds its own `Route`s, so handlers are stored as factories.
#[derive(Clone, Default)]
pub struct HandlerSet {
    factories: HashMap<String, RouteFactory>,
}

impl HandlerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler, e.g. `handlers.insert("get_cheese", || web::to(get_cheese))`.
    pub fn insert<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Route + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Whether a handler is known.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    fn route(&self, name: &str) -> Option<Route> {
        self.factories.get(name).map(|factory| factory())
    }
}

/// Serves the index document.
pub async fn index_document(registry: RegistryData) -> Result<HttpResponse, ApiError> {
    let registry = read_registry(&registry)?;
    Ok(HttpResponse::Ok().json(registry.render_index()?))
}

/// Serves the document of `resource`.
pub async fn resource_document(
    registry: RegistryData,
    resource: String,
) -> Result<HttpResponse, ApiError> {
    let registry = read_registry(&registry)?;
    let document = registry.render_resource(&resource)?;
    Ok(HttpResponse::Ok().json(document))
}

/// Converts a registration path into an actix resource pattern.
///
/// Converters become segment regexes: `<path:rest>` is `{rest:.*}` and
/// `<int:id>` is `{id:\d+}`. Anything else is a plain `{name}`.
pub fn route_pattern(path: &str) -> String {
    map_placeholders(path, |converter, name| {
        let regex = match converter {
            "path" => Some(r".*"),
            "int" => Some(r"\d+"),
            "float" => Some(r"\d+\.\d+"),
            "uuid" => Some(r"[0-9a-fA-F-]+"),
            _ => None,
        };
        match regex {
            Some(regex) => format!("{{{}:{}}}", name, regex),
            None => format!("{{{}}}", name),
        }
    })
}

/// Mounts every recorded binding onto `cfg`.
///
/// Handler paths are mounted with [`route_pattern`]. Handler bindings without a matching entry in `handlers`, or with a method
/// actix cannot represent, are skipped with a warning.
pub fn mount(cfg: &mut web::ServiceConfig, bindings: &[RouteBinding], handlers: &HandlerSet) {
    let mut handler_routes: Vec<(String, Vec<Route>)> = Vec::new();

    for binding in bindings {
        match &binding.target {
            RouteTarget::Index => {
                cfg.route(&binding.path, web::get().to(index_document));
            }
            RouteTarget::ResourceListing(resource) => {
                let resource = resource.clone();
                cfg.route(
                    &binding.path,
                    web::get().to(move |registry: RegistryData| {
                        resource_document(registry, resource.clone())
                    }),
                );
            }
            RouteTarget::Handler(name) => {
                let path = route_pattern(&binding.path);
                for method in &binding.methods {
                    let Ok(method) = Method::from_bytes(method.as_str().as_bytes()) else {
                        tracing::warn!(%method, path = %path, "skipping route with invalid method");
                        continue;
                    };
                    let Some(route) = handlers.route(name) else {
                        tracing::warn!(handler = %name, path = %path, "no handler registered");
                        continue;
                    };
                    let route = route.method(method);
                    match handler_routes.iter_mut().find(|(p, _)| *p == path) {
                        Some((_, routes)) => routes.push(route),
                        None => handler_routes.push((path.clone(), vec![route])),
                    }
                }
            }
        }
    }

    for (path, routes) in handler_routes {
        tracing::debug!(path = %path, routes = routes.len(), "mounting handler resource");
        let mut resource = web::resource(path);
        for route in routes {
            resource = resource.route(route);
        }
        cfg.service(resource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App, HttpResponse};
    use sillywalk_core::{EndpointDeclaration, Handler, RegistryConfig, RouteLog};

    async fn get_cheese(path: web::Path<String>) -> HttpResponse {
        HttpResponse::Ok().body(format!("Cheese {}", path.into_inner()))
    }

    async fn put_cheese() -> HttpResponse {
        HttpResponse::Created().finish()
    }

    fn setup() -> (RegistryData, Vec<RouteBinding>, HandlerSet) {
        let log = RouteLog::new();
        let mut registry = SwaggerRegistry::with_binder(
            RegistryConfig::new("http://localhost/api/v1"),
            log.clone(),
        )
        .unwrap();
        registry
            .register(
                &Handler::new("get_cheese"),
                EndpointDeclaration::new("/api/v1/cheese/<name>"),
            )
            .unwrap();
        registry
            .register(
                &Handler::new("put_cheese"),
                EndpointDeclaration::new("/api/v1/cheese/<name>").method("PUT"),
            )
            .unwrap();
        registry
            .register(&Handler::new("missing"), EndpointDeclaration::new("/spam"))
            .unwrap();

        let mut handlers = HandlerSet::new();
        handlers
            .insert("get_cheese", || web::to(get_cheese))
            .insert("put_cheese", || web::to(put_cheese));

        let data = web::Data::from(registry.into_shared());
        (data, log.bindings().unwrap(), handlers)
    }

    #[actix_web::test]
    async fn test_methods_share_one_resource() {
        let (data, bindings, handlers) = setup();
        let app = test::init_service(
            App::new()
                .app_data(data)
                .configure(|cfg| mount(cfg, &bindings, &handlers)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/cheese/gouda").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"Cheese gouda"));

        let req = test::TestRequest::put().uri("/api/v1/cheese/gouda").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_missing_handler_is_skipped_but_documented() {
        let (data, bindings, handlers) = setup();
        assert!(!handlers.contains("missing"));
        let app = test::init_service(
            App::new()
                .app_data(data)
                .configure(|cfg| mount(cfg, &bindings, &handlers)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/spam").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/v1/spam.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    async fn get_file(path: web::Path<String>) -> HttpResponse {
        HttpResponse::Ok().body(path.into_inner())
    }

    async fn get_item(path: web::Path<u32>) -> HttpResponse {
        HttpResponse::Ok().body(format!("item {}", path.into_inner()))
    }

    #[::std::prelude::rust_2021::test]
    fn test_route_pattern() {
        assert_eq!(route_pattern("/api/cheese/<name>"), "/api/cheese/{name}");
        assert_eq!(route_pattern("/api/files/<path:rest>"), "/api/files/{rest:.*}");
        assert_eq!(route_pattern("/api/items/<int:id>"), r"/api/items/{id:\d+}");
        assert_eq!(route_pattern("/api/w/<float:x>"), r"/api/w/{x:\d+\.\d+}");
        assert_eq!(route_pattern("/api/s/<string:s>"), "/api/s/{s}");
    }

    #[actix_web::test]
    async fn test_converters_shape_mounted_routes() {
        let log = RouteLog::new();
        let mut registry =
            SwaggerRegistry::with_binder(RegistryConfig::new("http://localhost/api"), log.clone())
                .unwrap();
        registry
            .register(
                &Handler::new("get_file"),
                EndpointDeclaration::new("/api/files/<path:rest>"),
            )
            .unwrap();
        registry
            .register(
                &Handler::new("get_item"),
                EndpointDeclaration::new("/api/items/<int:id>"),
            )
            .unwrap();

        let doc = registry.render_resource("files").unwrap();
        assert_eq!(doc.apis[0].path, "/files/{rest}");

        let mut handlers = HandlerSet::new();
        handlers
            .insert("get_file", || web::to(get_file))
            .insert("get_item", || web::to(get_item));
        let bindings = log.bindings().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(registry.into_shared()))
                .configure(|cfg| mount(cfg, &bindings, &handlers)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/files/a/b.txt").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"a/b.txt"));

        let req = test::TestRequest::get().uri("/api/items/42").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"item 42"));

        let req = test::TestRequest::get().uri("/api/items/spam").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_resource_document_not_found() {
        let (data, _, _) = setup();
        let resp = resource_document(data, "nonexistent".into()).await.unwrap_err();
        assert!(matches!(
            resp.inner(),
            sillywalk_core::RegistryError::NotFound(_)
        ));
    }
}
