//! Request handlers for the relayed endpoints

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::upstream::resource::{NewPost, ResourcePath, CREATE_POST_ACTION};
use crate::AppState;

/// Fetch one resource upstream and relay its body
async fn relay(state: &AppState, resource: ResourcePath) -> Result<Json<Value>> {
    debug!(resource = %resource, "Relaying upstream resource");

    state
        .upstream
        .fetch(resource)
        .await
        .map(Json)
        .map_err(|e| AppError::upstream(resource.fetch_action(), e))
}

/// GET / - static description of the available routes
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Axum + JSONPlaceholder",
        "endpoints": {
            "posts": "/posts",
            "users": "/users",
            "comments": "/comments/{post_id}"
        }
    }))
}

/// GET /posts
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    relay(&state, ResourcePath::Posts).await
}

/// GET /posts/:post_id
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    post_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(post_id) = post_id?;
    relay(&state, ResourcePath::Post(post_id)).await
}

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    relay(&state, ResourcePath::Users).await
}

/// GET /comments/:post_id - comments of one post
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    post_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(post_id) = post_id?;
    relay(&state, ResourcePath::PostComments(post_id)).await
}

/// POST /posts?title=..&body=..[&userId=..]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<NewPost>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(post) = params?;
    debug!(user_id = post.user_id, "Creating post upstream");

    state
        .upstream
        .create_post(&post)
        .await
        .map(Json)
        .map_err(|e| AppError::upstream(CREATE_POST_ACTION, e))
}
