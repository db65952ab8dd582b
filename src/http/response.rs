//! Response construction.
//!
//! # Responsibilities
//! - Wrap rendered templates as `text/html` responses
//! - Build 302 redirects between page actions
//! - Record per-request metrics once the final status is known
//!
//! # Design Decisions
//! - Redirects are plain `302 Found` + `Location`, no body
//! - Errors become responses through `WikiError`'s `IntoResponse`

use std::time::Instant;

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::error::WikiError;
use crate::observability::metrics;
use crate::routing::Action;

/// `200 OK` with an HTML body.
pub fn html(body: String) -> Response {
    Html(body).into_response()
}

/// `302 Found` pointing at `location`.
pub fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Turn a handler result into the final response and record it.
pub fn finish(action: Action, start: Instant, result: Result<Response, WikiError>) -> Response {
    let response = result.unwrap_or_else(IntoResponse::into_response);
    metrics::record_request(action.as_str(), response.status().as_u16(), start);
    response
}
