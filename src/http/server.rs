//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the page handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, security headers)
//! - Serve on a listener until shutdown
//!
//! # Design Decisions
//! - Validator, templates and store are built once and injected as shared, read-only state
//! - Handlers share no mutable state, so nothing needs a lock

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::WikiConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::lifecycle::{shutdown, signals};
use crate::render::TemplateSet;
use crate::routing::TitleValidator;
use crate::security::{headers, limits};
use crate::storage::PageStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<TitleValidator>,
    pub templates: Arc<TemplateSet>,
    pub store: Arc<PageStore>,
}

impl AppState {
    pub fn new(validator: TitleValidator, templates: TemplateSet, store: PageStore) -> Self {
        Self {
            validator: Arc::new(validator),
            templates: Arc::new(templates),
            store: Arc::new(store),
        }
    }
}

/// HTTP server for the wiki.
pub struct WikiServer {
    router: Router,
    config: WikiConfig,
}

impl WikiServer {
    /// Create a server from configuration and a parsed template set.
    pub fn new(config: WikiConfig, templates: TemplateSet) -> Self {
        let state = AppState::new(
            TitleValidator::new(),
            templates,
            PageStore::new(config.storage.data_dir.clone()),
        );
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &WikiConfig, state: AppState) -> Router {
        let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id_of(request),
            )
        });

        let mut router = Router::new()
            .route(
                "/view/{*rest}",
                get(handlers::view_page).fallback(handlers::method_not_allowed),
            )
            .route(
                "/edit/{*rest}",
                get(handlers::edit_page).fallback(handlers::method_not_allowed),
            )
            .route(
                "/save/{*rest}",
                post(handlers::save_page).fallback(handlers::method_not_allowed),
            )
            .fallback(handlers::not_found)
            .with_state(state);

        if config.security.enable_headers {
            router = router.layer(
                ServiceBuilder::new()
                    .layer(headers::csp_layer())
                    .layer(headers::content_type_options_layer())
                    .layer(headers::frame_options_layer()),
            );
        }

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer)
                .layer(propagate_request_id_layer())
                .layer(limits::body_limit_layer(&config.security))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
    }

    /// Router with all layers, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            data_dir = %self.config.storage.data_dir.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown::wait(shutdown) => tracing::info!("Shutdown requested"),
                    _ = signals::shutdown_signal() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &WikiConfig {
        &self.config
    }
}
