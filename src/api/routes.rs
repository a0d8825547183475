//! Route table for the gateway

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::AppState;

/// Build the gateway router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route("/posts/:post_id", get(handlers::get_post))
        .route("/users", get(handlers::list_users))
        .route("/comments/:post_id", get(handlers::list_comments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
