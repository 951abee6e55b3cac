#![deny(missing_docs)]

//! # Class-Based Views
//!
//! A class-based view groups several handlers under one route base and mounts
//! them itself. The registry only catalogs its members.

use crate::swagger::declarations::Handler;
use crate::swagger::models::{ErrorResponse, HttpMethod, Parameter};

/// An explicit route of a view member, relative to the view's route base.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRoute {
    /// Sub-path appended to the route base (e.g. `/<id>`).
    pub path: String,
    /// Methods served on the sub-path.
    pub methods: Vec<HttpMethod>,
}

/// One handler of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewMember {
    /// The handler.
    pub handler: Handler,
    /// Method used when the member has no explicit routes.
    pub method: HttpMethod,
    /// Explicit routes; empty means "the route base with `method`".
    pub routes: Vec<ViewRoute>,
    /// Documented parameters.
    pub parameters: Vec<Parameter>,
    /// Documented error responses.
    pub error_responses: Vec<ErrorResponse>,
}

impl ViewMember {
    /// A member served at the route base.
    pub fn new(handler: Handler, method: impl Into<HttpMethod>) -> Self {
        Self {
            handler,
            method: method.into(),
            routes: Vec::new(),
            parameters: Vec::new(),
            error_responses: Vec::new(),
        }
    }

    /// Adds an explicit route.
    pub fn route(mut self, path: impl Into<String>, methods: Vec<HttpMethod>) -> Self {
        self.routes.push(ViewRoute {
            path: path.into(),
            methods,
        });
        self
    }

    /// Sets the documented parameters and error responses.
    pub fn docs(mut self, parameters: Vec<Parameter>, error_responses: Vec<ErrorResponse>) -> Self {
        self.parameters = parameters;
        self.error_responses = error_responses;
        self
    }

    /// Expands the member into `(path, method)` pairs under `route_base`.
    pub(crate) fn endpoints(&self, route_base: &str) -> Vec<(String, HttpMethod)> {
        if self.routes.is_empty() {
            return vec![(route_base.to_string(), self.method.clone())];
        }
        let base = route_base.trim_end_matches('/');
        self.routes
            .iter()
            .flat_map(|route| {
                route
                    .methods
                    .iter()
                    .map(move |method| (format!("{}{}", base, route.path), method.clone()))
            })
            .collect()
    }
}

/// Description of a class-based view.
pub trait ViewDescriptor {
    /// Path every member is mounted under.
    fn route_base(&self) -> &str;

    /// The view's handlers.
    fn members(&self) -> Vec<ViewMember>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_without_routes_uses_route_base() {
        let member = ViewMember::new(Handler::new("index"), HttpMethod::Get);
        assert_eq!(
            member.endpoints("/knights/"),
            vec![("/knights/".to_string(), HttpMethod::Get)]
        );
    }

    #[test]
    fn test_member_routes_expand_per_method() {
        let member = ViewMember::new(Handler::new("knight"), HttpMethod::Get).route(
            "/<name>",
            vec![HttpMethod::Get, HttpMethod::Delete],
        );
        assert_eq!(
            member.endpoints("/knights/"),
            vec![
                ("/knights/<name>".to_string(), HttpMethod::Get),
                ("/knights/<name>".to_string(), HttpMethod::Delete),
            ]
        );
    }
}
