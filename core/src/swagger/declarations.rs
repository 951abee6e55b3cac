#![deny(missing_docs)]

//! # Endpoint Declarations
//!
//! Inputs to `SwaggerRegistry::register`: the handler being documented and
//! what is declared about its endpoint.

use crate::swagger::models::{ErrorResponse, HttpMethod, Parameter};

/// The handler an endpoint dispatches to.
///
/// Only its name and description are needed; the registry never calls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    name: String,
    description: Option<String>,
}

impl Handler {
    /// Creates a handler reference by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attaches the handler's doc text, used as the operation summary.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Handler (endpoint) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handler doc text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Everything declared about one endpoint at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDeclaration {
    /// Route path in registration syntax (`/api/v1/cheese/<cheeseName>`).
    pub path: String,
    /// HTTP method, `GET` by default.
    pub method: HttpMethod,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Error responses in declaration order.
    pub error_responses: Vec<ErrorResponse>,
    /// Optional nickname.
    pub nickname: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
}

impl EndpointDeclaration {
    /// Declares a `GET` endpoint at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            parameters: Vec::new(),
            error_responses: Vec::new(),
            nickname: None,
            notes: None,
        }
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: impl Into<HttpMethod>) -> Self {
        self.method = method.into();
        self
    }

    /// Appends a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Replaces the parameter list.
    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Appends an error response.
    pub fn error_response(mut self, response: ErrorResponse) -> Self {
        self.error_responses.push(response);
        self
    }

    /// Replaces the error response list.
    pub fn error_responses(mut self, responses: Vec<ErrorResponse>) -> Self {
        self.error_responses = responses;
        self
    }

    /// Sets the nickname.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Sets the notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
