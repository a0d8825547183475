//! Unit tests for upstream resource paths

use placeholder_gateway::upstream::{NewPost, ResourcePath, Shape};
use serde_json::json;

#[test]
fn test_collection_paths_expect_arrays() {
    for resource in [ResourcePath::Posts, ResourcePath::Users, ResourcePath::PostComments(1)] {
        assert_eq!(resource.shape(), Shape::Array, "{}", resource);
    }
    assert_eq!(ResourcePath::Post(1).shape(), Shape::Object);
}

#[test]
fn test_action_phrases() {
    assert_eq!(ResourcePath::Posts.fetch_action(), "Failed to fetch posts");
    assert_eq!(ResourcePath::Post(3).fetch_action(), "Failed to fetch post");
    assert_eq!(ResourcePath::Users.fetch_action(), "Failed to fetch users");
    assert_eq!(ResourcePath::PostComments(3).fetch_action(), "Failed to fetch comments");
}

#[test]
fn test_negative_ids_pass_through() {
    assert_eq!(ResourcePath::Post(-1).to_string(), "/posts/-1");
}

#[test]
fn test_new_post_payload() {
    let post = NewPost::new("t", "b").with_user_id(5);
    assert_eq!(
        serde_json::to_value(&post).unwrap(),
        json!({"title": "t", "body": "b", "userId": 5})
    );
}
