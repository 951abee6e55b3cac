#![deny(missing_docs)]

//! # HTTP Errors
//!
//! Maps registry errors onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::{Display, From};
use sillywalk_core::RegistryError;

/// Error returned by the document routes.
#[derive(Debug, Display, From)]
pub struct ApiError(RegistryError);

impl std::error::Error for ApiError {}

impl ApiError {
    /// The underlying registry error.
    pub fn inner(&self) -> &RegistryError {
        &self.0
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
