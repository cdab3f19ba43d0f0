//! HRBoard Backend
//!
//! REST backend for the HRBoard HR dashboard: an in-memory employee record
//! store populated once per session from a public demo user feed, with
//! client-driven filtering, bookmarks, promotions, and analytics views.

mod analytics;
mod api;
mod config;
mod enrich;
mod errors;
mod filter;
mod models;
mod store;
mod upstream;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::EmployeeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EmployeeStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HRBoard Backend");
    tracing::info!("Upstream feed: {}", config.upstream_url);
    tracing::info!("Bind address: {}", config.bind_addr);
    if let Some(seed) = config.enrich_seed {
        tracing::info!("Enrichment seed fixed at {} (reproducible data)", seed);
    }

    // Create application state
    let state = AppState {
        store: Arc::new(EmployeeStore::new()),
        config: Arc::new(config.clone()),
    };

    // Kick off the one-time load of the employee collection
    let load_state = state.clone();
    tokio::spawn(async move {
        let mut rng = match load_state.config.enrich_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        upstream::load_employees(&load_state.store, &load_state.config, &mut rng).await;
    });

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Employees
        .route("/employees", get(api::list_employees))
        .route("/employees/{id}", get(api::get_employee))
        .route("/employees/{id}/bookmark", post(api::toggle_bookmark))
        .route("/employees/{id}/promote", post(api::promote_employee))
        .route("/bookmarks", get(api::list_bookmarks))
        .route("/departments", get(api::list_departments))
        // Session + criteria
        .route("/session", get(api::get_session))
        .route("/criteria/search", put(api::set_search_term))
        .route("/criteria/departments", put(api::set_selected_departments))
        .route("/criteria/ratings", put(api::set_selected_ratings))
        // Analytics
        .route("/analytics/departments", get(api::get_department_stats))
        .route("/analytics/ratings", get(api::get_rating_histogram));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
