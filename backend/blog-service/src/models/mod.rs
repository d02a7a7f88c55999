/// Data models for blog-service
///
/// - `Post` / `NewPost`: stored post rows and the `{title, content, author}` body
/// - `Comment` / `NewComment`: stored comment rows and the `{content, author}` body
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored post. `id` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl Post {
    pub fn from_new(id: i64, input: NewPost) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            content: input.content,
        }
    }

    /// Full replacement: every editable field is overwritten together.
    pub fn overwrite(&mut self, input: NewPost) {
        self.title = input.title;
        self.author = input.author;
        self.content = input.content;
    }
}

/// Request body for creating or replacing a post. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// A stored comment, always owned by exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
}

impl Comment {
    pub fn from_new(id: i64, post_id: i64, input: NewComment) -> Self {
        Self {
            id,
            post_id,
            author: input.author,
            content: input.content,
        }
    }
}

/// Request body for creating a comment. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub author: String,
}
