/// Blog Service Library
///
/// CRUD over posts and the comments attached to them, backed by PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: Post and comment rows plus request bodies
/// - `db`: Repositories and storage error classification
/// - `error`: Mapping of failures to HTTP responses
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};

use db::{CommentRepository, CommentStore, PostRepository, PostStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared handler state: the stores, each wrapping the one pool built at startup.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self { posts, comments }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            posts: Arc::new(PostRepository::new(pool.clone())),
            comments: Arc::new(CommentRepository::new(pool)),
        }
    }
}
