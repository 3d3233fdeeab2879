//! LogScope Web API Server
//!
//! Serves the server list, per-date log views, raw log downloads and
//! positional comparisons between two servers' logs.

mod error;
mod handlers;

pub use error::{ApiError, ErrorBody};
pub use handlers::{CompareResponse, DiffView, LogsResponse, ServerView};

use axum::{
    http::{header::HeaderValue, Method},
    routing::get,
    Router,
};
use logscope_core::ServerRegistry;
use logscope_logs::LogStore;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ServerRegistry>,
    store: Arc<LogStore>,
}

impl AppState {
    pub fn new(registry: ServerRegistry, store: LogStore) -> Self {
        Self {
            registry: Arc::new(registry),
            store: Arc::new(store),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, None)
}

/// Create the API router with a restricted CORS origin
pub fn create_router_with_cors(state: AppState, cors_origin: Option<String>) -> Router {
    let origin = match cors_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/servers", get(handlers::list_servers))
        .route("/logs/:server", get(handlers::get_logs))
        .route("/download/:server", get(handlers::download_log))
        .route("/compare", get(handlers::compare_logs))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server with a restricted CORS origin
pub async fn start_server_with_cors(
    bind_addr: &str,
    state: AppState,
    cors_origin: Option<String>,
) -> std::io::Result<()> {
    info!(
        "Serving {} servers from {} ({} policy)",
        state.registry.len(),
        state.store.root().display(),
        state.store.policy()
    );
    let app = create_router_with_cors(state, cors_origin);

    info!("Starting LogScope on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
