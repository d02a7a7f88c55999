//! Shared fixtures for the HTTP tests: an in-memory store that behaves like the
//! PostgreSQL schema (monotonic ids, enforced post foreign key) and an app
//! builder wired with the binary's middleware and routes.
#![allow(dead_code)]

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test, web, App,
};
use async_trait::async_trait;
use blog_service::{
    db::{CommentStore, PostStore, RepositoryError, RepositoryResult},
    error::json_error_handlers,
    handlers,
    models::{Comment, NewComment, NewPost, Post},
    AppState,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    posts: BTreeMap<i64, Post>,
    comments: Vec<Comment>,
    last_post_id: i64,
    last_comment_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail the way an unreachable database does
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn post_count(&self) -> usize {
        self.tables.lock().unwrap().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }

    fn check_backend(&self) -> RepositoryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, post: &NewPost) -> RepositoryResult<i64> {
        self.check_backend()?;
        let mut tables = self.tables.lock().unwrap();
        tables.last_post_id += 1;
        let id = tables.last_post_id;
        tables.posts.insert(id, Post::from_new(id, post.clone()));
        Ok(id)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Post> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }
        self.check_backend()?;
        self.tables
            .lock()
            .unwrap()
            .posts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Post>> {
        self.check_backend()?;
        Ok(self.tables.lock().unwrap().posts.values().cloned().collect())
    }

    async fn update(&self, post: &NewPost, id: i64) -> RepositoryResult<()> {
        self.check_backend()?;
        let mut tables = self.tables.lock().unwrap();
        let existing = tables.posts.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        existing.overwrite(post.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.check_backend()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.posts.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        tables.posts.remove(&id);
        // ON DELETE CASCADE
        tables.comments.retain(|c| c.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert(&self, comment: &NewComment, post_id: i64) -> RepositoryResult<i64> {
        self.check_backend()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.posts.contains_key(&post_id) {
            return Err(RepositoryError::ForeignKey);
        }
        tables.last_comment_id += 1;
        let id = tables.last_comment_id;
        tables
            .comments
            .push(Comment::from_new(id, post_id, comment.clone()));
        Ok(id)
    }

    async fn get_by_post(&self, post_id: i64) -> RepositoryResult<Vec<Comment>> {
        self.check_backend()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub fn state_for(store: &Arc<MemoryStore>) -> AppState {
    AppState::new(store.clone(), store.clone())
}

pub async fn init_app(
    store: &Arc<MemoryStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(store)))
            .wrap(json_error_handlers())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure),
    )
    .await
}

pub fn post_body(title: &str, author: &str, content: &str) -> serde_json::Value {
    serde_json::json!({ "title": title, "author": author, "content": content })
}

pub fn comment_body(author: &str, content: &str) -> serde_json::Value {
    serde_json::json!({ "author": author, "content": content })
}
