pub mod chat;
pub mod health;
pub mod messages;

use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, middleware::logging, state::AppState};

pub fn build_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        // Page
        .route("/", get(chat::index).post(chat::ask))
        // JSON API
        .route("/api/messages", get(messages::list_messages).post(messages::send_message))
        // Health
        .route("/health", get(health::health_check));

    Router::new()
        .merge(routes)
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if !config.cors.enabled {
        return CorsLayer::new();
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors.origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let parsed_origins: Vec<axum::http::HeaderValue> = config
            .cors
            .origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();

        cors.allow_origin(parsed_origins)
    }
}
