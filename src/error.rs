//! Request-level error taxonomy.
//!
//! # Mapping
//! ```text
//! InvalidTitle  → 404, empty body
//! NotFound      → handled by View (redirect) and Edit (empty page); 404 if it escapes
//! Io            → 500, raw error text
//! Render        → 500, error text
//! ```
//!
//! # Design Decisions
//! - Every failure terminates only the request that produced it
//! - Error text is exposed verbatim (single-operator tool)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors produced while serving a page request.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Request path did not match the page route pattern.
    #[error("invalid page path: {0}")]
    InvalidTitle(String),

    /// Page file could not be read.
    #[error("page {title} not found: {source}")]
    NotFound {
        title: String,
        #[source]
        source: std::io::Error,
    },

    /// Page file could not be written.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Template lookup or substitution failed.
    #[error("{0}")]
    Render(String),
}

impl WikiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            WikiError::InvalidTitle(_) | WikiError::NotFound { .. } => StatusCode::NOT_FOUND,
            WikiError::Io(_) | WikiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            WikiError::InvalidTitle(path) => {
                tracing::warn!(path = %path, "Rejected page path");
                status.into_response()
            }
            WikiError::NotFound { ref title, .. } => {
                tracing::debug!(title = %title, "Page not found");
                status.into_response()
            }
            err @ (WikiError::Io(_) | WikiError::Render(_)) => {
                tracing::error!(error = %err, "Request failed");
                (status, err.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WikiError::InvalidTitle("/view/../x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WikiError::Io(io::Error::other("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WikiError::Render("no template".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_message_is_verbatim() {
        let err = WikiError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn test_invalid_title_response_has_no_body() {
        let response = WikiError::InvalidTitle("/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }
}
