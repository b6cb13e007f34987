//! Web layer error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] tursa_common::CatalogError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong rendering this page.").into_response()
    }
}
