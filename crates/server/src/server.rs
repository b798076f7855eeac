//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (auth, logging, compression, etc.)
//! - Tracing subscriber setup
//! - Graceful shutdown handling

use crate::config::{ServerConfig, DEMO_API_KEY};
use crate::middleware::{api_key_auth, log_requests, request_id, translate_timeout};
use crate::routes::{health, method_not_allowed, not_found, pages, products};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Build the Axum router with all routes and middleware
///
/// Routes are divided into:
/// - Public routes: `/`, `/health`, `/products` and every `GET` under
///   `/api/products`
/// - Protected routes: `POST`, `PUT` and `DELETE` under `/api/products`
///   (`x-api-key` required)
///
/// The key check is a route layer on the protected routes, so it runs
/// before the handler parses the body; validation happens first thing in
/// the handler, before the store is touched.
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Public routes (no auth required). `/api/products/stats` is a static
    // segment and wins over `{id}`.
    let public_routes = Router::new()
        .route("/", get(pages::root))
        .route("/health", get(health::health_check))
        .route("/products", get(pages::products_page))
        .route("/api/products", get(products::list_products))
        .route("/api/products/stats", get(products::product_stats))
        .route("/api/products/{id}", get(products::get_product));

    // Protected routes (require API key)
    let protected_routes = Router::new()
        .route("/api/products", post(products::create_product))
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route_layer(from_fn_with_state(state.clone(), api_key_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        // The timeout layer answers with a bare status; give it the error body
        .layer(from_fn(translate_timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true);

    let result = if config.log_format == "pretty" {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };

    if let Err(err) = result {
        eprintln!("tracing subscriber already installed: {err}");
    }
}

/// Start the catalog HTTP server
///
/// Initializes logging, builds the product store (seeded unless disabled),
/// binds to the configured address and serves until SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    if config.uses_demo_key() {
        tracing::warn!("No API key configured, using demo key '{DEMO_API_KEY}'");
    }

    let state = Arc::new(ServerState::new(config.clone()));
    let product_count = state.store.len();

    let app = build_router(state);
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting catalog server on {} with {} products", addr, product_count);
    tracing::info!(
        "Timeout: {}s, Max body: {}MB",
        config.timeout_secs,
        config.max_body_size_mb
    );
    tracing::info!("CORS: {}", config.enable_cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
