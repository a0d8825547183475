//! Upstream resource paths and payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level JSON shape an upstream resource is expected to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl Shape {
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => f.write_str("a JSON array"),
            Shape::Object => f.write_str("a JSON object"),
        }
    }
}

/// One of the fixed upstream paths the gateway relays to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath {
    Posts,
    Post(i64),
    Users,
    PostComments(i64),
}

impl ResourcePath {
    /// Path relative to the upstream base address
    pub fn path(&self) -> String {
        match self {
            ResourcePath::Posts => "/posts".to_string(),
            ResourcePath::Post(id) => format!("/posts/{}", id),
            ResourcePath::Users => "/users".to_string(),
            ResourcePath::PostComments(id) => format!("/posts/{}/comments", id),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            ResourcePath::Posts | ResourcePath::Users | ResourcePath::PostComments(_) => Shape::Array,
            ResourcePath::Post(_) => Shape::Object,
        }
    }

    /// Phrase prefixed to the error detail when fetching this resource fails
    pub fn fetch_action(&self) -> &'static str {
        match self {
            ResourcePath::Posts => "Failed to fetch posts",
            ResourcePath::Post(_) => "Failed to fetch post",
            ResourcePath::Users => "Failed to fetch users",
            ResourcePath::PostComments(_) => "Failed to fetch comments",
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub const CREATE_POST_ACTION: &str = "Failed to create post";

/// Body sent upstream when creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: i64,
}

fn default_user_id() -> i64 {
    1
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id: default_user_id(),
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }
}
