//! Blog posts REST service.
//!
//! - List, create, read, update and delete posts over JSON
//! - Pluggable document store behind `PostStore`
//! - Input validation at the request boundary
//! - Structured logging and request tracing

pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod fixtures;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

pub use config::Config;
pub use states::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::get,
};
use tower::{ServiceBuilder, limit::ConcurrencyLimitLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the router with its middleware stack.
pub fn app(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health_check))
        .route("/posts", get(routes::get_posts).post(routes::create_post))
        .route(
            "/posts/{id}",
            get(routes::get_post)
                .put(routes::update_post)
                .delete(routes::delete_post),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                ))
                .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests)),
        )
}
