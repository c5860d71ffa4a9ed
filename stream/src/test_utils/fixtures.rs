//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid entity that can be customized.

use uuid::Uuid;

use crate::domain::entities::{
    Author, Comment, CommentAuthor, ContentType, ObjectId, Post, Visibility,
};

/// Create a test author with default values
pub fn test_author() -> Author {
    Author {
        uuid: ObjectId::from(Uuid::new_v4()),
        display_name: "test-author".to_string(),
        host: "http://localhost:8000/".to_string(),
        id: None,
        github: None,
        profile_image: None,
    }
}

/// Create a plain-text test post with default values
pub fn test_post() -> Post {
    let uuid = ObjectId::from(Uuid::new_v4());
    Post {
        comments: format!("http://localhost:8000/api/posts/{}/comments", uuid),
        uuid,
        id: None,
        author: test_author(),
        title: "Test post".to_string(),
        description: "A post for tests".to_string(),
        categories: vec!["test".to_string()],
        visibility: Visibility::Public,
        unlisted: false,
        published: "2024-01-01T00:00:00Z"
            .parse()
            .expect("fixture timestamp is valid"),
        content_type: ContentType::Plain,
        content: "Hello from a test".to_string(),
        count: 0,
        source: None,
        origin: None,
    }
}

/// Create a test post with a specific id and publish timestamp
pub fn test_post_at(id: &str, published: &str) -> Post {
    let mut post = test_post();
    post.uuid = ObjectId::from(id);
    post.published = published.parse().expect("fixture timestamp is valid");
    post
}

/// Create a comment by `author` with the given body and timestamp
pub fn test_comment(author: &str, body: &str, published: &str) -> Comment {
    Comment {
        author: CommentAuthor {
            uuid: None,
            id: None,
            display_name: author.to_string(),
        },
        comment: body.to_string(),
        content_type: ContentType::Plain,
        published: published.parse().expect("fixture timestamp is valid"),
        id: None,
    }
}
