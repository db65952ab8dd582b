//! Page lifecycle handlers.
//!
//! # Per-request Flow
//! ```text
//! view:  validate → load → found: render "view"  | absent: 302 /edit/<title>
//! edit:  validate → load → found: render "edit"  | absent: render "edit" with empty body
//! save:  validate → read body field → save → ok: 302 /view/<title> | I/O error: 500
//! ```
//!
//! The save body is read only after the title is accepted, so the body size limit
//! and form parsing never run for an invalid path. The `body` field is taken from a
//! urlencoded or multipart form; a request without a content type saves an empty page.
//!
//! Each request stands alone: nothing is cached, retried or shared between requests.

use std::time::Instant;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::error::WikiError;
use crate::http::response::{finish, found, html};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Action;
use crate::storage::Page;

/// Form field carrying the page body.
pub const BODY_FIELD: &str = "body";

/// Form submitted by the edit page.
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    /// Missing field saves an empty page.
    #[serde(default)]
    pub body: String,
}

/// GET /view/{title}
pub async fn view_page(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    finish(Action::View, start, view(&state, uri.path()).await)
}

/// GET /edit/{title}
pub async fn edit_page(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    finish(Action::Edit, start, edit(&state, uri.path()).await)
}

/// POST /save/{title}
pub async fn save_page(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    finish(Action::Save, start, save(&state, request).await)
}

/// Wrong method on a page prefix: 404 for a bad path, otherwise 405.
pub async fn method_not_allowed(State(state): State<AppState>, uri: Uri) -> Response {
    match state.validator.match_path(uri.path()) {
        Ok(_) => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Any path outside the page prefixes.
pub async fn not_found(uri: Uri) -> Response {
    WikiError::InvalidTitle(uri.path().to_string()).into_response()
}

async fn view(state: &AppState, path: &str) -> Result<Response, WikiError> {
    let title = state.validator.title_for(Action::View, path)?;
    match state.store.load(&title).await {
        Ok(page) => Ok(html(state.templates.render("view", &page)?)),
        Err(WikiError::NotFound { .. }) => {
            tracing::info!(title = %title, "Page absent, redirecting to editor");
            Ok(found(Action::Edit.path_for(&title)))
        }
        Err(e) => Err(e),
    }
}

async fn edit(state: &AppState, path: &str) -> Result<Response, WikiError> {
    let title = state.validator.title_for(Action::Edit, path)?;
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(WikiError::NotFound { .. }) => {
            tracing::debug!(title = %title, "Editing new page");
            Page::empty(title)
        }
        Err(e) => return Err(e),
    };
    Ok(html(state.templates.render("edit", &page)?))
}

async fn save(state: &AppState, request: Request) -> Result<Response, WikiError> {
    // Path first: a bad title is a 404 whatever the body looks like.
    let title = state.validator.title_for(Action::Save, request.uri().path())?;
    let body = match read_body(request).await {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(title = %title, status = %rejection.status(), "Rejected save body");
            return Ok(rejection);
        }
    };

    let page = Page::new(title, body);
    state.store.save(&page).await?;
    metrics::record_save();
    tracing::info!(title = %page.title, bytes = page.body.len(), "Page saved");

    Ok(found(Action::View.path_for(&page.title)))
}

/// Media type of the request, without parameters.
fn media_type(request: &Request) -> Option<String> {
    let value = request.headers().get(header::CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next().unwrap_or_default().trim();
    Some(essence.to_ascii_lowercase())
}

/// Read the `body` field from the submitted form.
///
/// The first `body` field wins. A missing field, or a request with no content type at all, is an empty body.
/// Extractor rejections come back as ready responses, e.g. 413 past the size limit.
async fn read_body(request: Request) -> Result<Vec<u8>, Response> {
    match media_type(&request).as_deref() {
        None => Ok(Vec::new()),
        Some("multipart/form-data") => {
            let mut multipart = Multipart::from_request(request, &())
                .await
                .map_err(IntoResponse::into_response)?;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(IntoResponse::into_response)?
            {
                if field.name() == Some(BODY_FIELD) {
                    let bytes = field.bytes().await.map_err(IntoResponse::into_response)?;
                    return Ok(bytes.to_vec());
                }
            }
            Ok(Vec::new())
        }
        Some(_) => {
            let Form(form) = Form::<SaveForm>::from_request(request, &())
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(form.body.into_bytes())
        }
    }
}
