//! Error types for the cafe gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that reject a `/cafe` request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `city` is missing or not in the catalog
    #[error("unknown city")]
    UnknownCity,

    /// `count` is not a non-negative integer
    #[error("incorrect count")]
    InvalidCount,
}

impl QueryError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::UnknownCity | QueryError::InvalidCount => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Errors raised while building the city catalog at startup
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains an empty city name")]
    EmptyCity,

    #[error("city name {0:?} must be lowercase")]
    UppercaseCity(String),

    #[error("cafe {cafe:?} in city {city:?} contains a comma")]
    CommaInName { city: String, cafe: String },
}
