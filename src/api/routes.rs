use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::movies::movie_routes;
use super::users::user_routes;
use super::AppState;
use crate::middleware::{cors_layer, security_headers_layer};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", user_routes())
        .nest("/api/movies", movie_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(security_headers_layer())
        .with_state(state)
}
