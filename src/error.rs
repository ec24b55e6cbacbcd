//! Relay error taxonomy.
//!
//! Handlers return `Result<T, RelayError>`; the [`IntoResponse`] impl turns
//! each variant into a `{ error, details? }` JSON body with its status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or malformed `topic`/`type`.
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider key is not present in process configuration.
    #[error("API key not configured")]
    Configuration,

    /// The provider call failed, timed out or answered with an unusable body.
    #[error("Failed to generate content")]
    Upstream { details: String },

    /// The provider answered but carried no candidate text.
    #[error("No content generated")]
    EmptyGeneration,
}

/// Wire shape of every relay failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration
            | RelayError::Upstream { .. }
            | RelayError::EmptyGeneration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let details = match self {
            RelayError::Upstream { details } => Some(details.clone()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        let details = if e.is_timeout() {
            format!("provider request timed out: {e}")
        } else {
            e.to_string()
        };
        RelayError::Upstream { details }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::InvalidRequest(m) => warn!(reason = %m, "rejected generation request"),
            RelayError::Upstream { details } => error!(details = %details, "provider call failed"),
            other => error!(error = %other, "generation failed"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}
