//! Documentation proxy errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Missing slug parameter")]
    MissingSlug,

    /// Query string that does not deserialize (e.g. a repeated `slug`).
    #[error("Invalid query string")]
    InvalidQuery,

    /// The wiki answered with a non-success status.
    #[error("Failed to fetch documentation: {reason}")]
    Upstream { status: StatusCode, reason: String },

    /// Connection, timeout or body read failure. The source is logged only.
    #[error("Failed to fetch documentation")]
    Transport(#[source] reqwest::Error),
}

impl DocsError {
    /// Uses the canonical reason for `status`; a custom upstream phrase is not kept.
    pub fn upstream(status: StatusCode) -> Self {
        DocsError::Upstream {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            DocsError::MissingSlug | DocsError::InvalidQuery => StatusCode::BAD_REQUEST,
            DocsError::Upstream { status, .. } => *status,
            DocsError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for logs and analytics.
    pub fn kind(&self) -> &'static str {
        match self {
            DocsError::MissingSlug => "missing_slug",
            DocsError::InvalidQuery => "invalid_query",
            DocsError::Upstream { .. } => "upstream",
            DocsError::Transport(_) => "transport",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(DocsError::MissingSlug.to_string(), "Missing slug parameter");
        assert_eq!(
            DocsError::upstream(StatusCode::NOT_FOUND).to_string(),
            "Failed to fetch documentation: Not Found"
        );
    }

    #[test]
    fn statuses() {
        assert_eq!(DocsError::MissingSlug.status(), StatusCode::BAD_REQUEST);
        assert_eq!(DocsError::InvalidQuery.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            DocsError::upstream(StatusCode::BAD_GATEWAY).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn unknown_status_has_fallback_reason() {
        let status = StatusCode::from_u16(599).expect("valid code");
        assert_eq!(
            DocsError::upstream(status).to_string(),
            "Failed to fetch documentation: Unknown Status"
        );
    }
}
