use super::{RepositoryError, RepositoryResult};
use crate::models::{NewPost, Post};
use async_trait::async_trait;
use sqlx::PgPool;

/// CRUD operations over posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and return its assigned id
    async fn insert(&self, post: &NewPost) -> RepositoryResult<i64>;

    /// Fetch a single post. Ids below 1 are `NotFound` without touching storage.
    async fn get(&self, id: i64) -> RepositoryResult<Post>;

    /// Fetch every post in ascending id order
    async fn get_all(&self) -> RepositoryResult<Vec<Post>>;

    /// Replace title, author and content of an existing post
    async fn update(&self, post: &NewPost, id: i64) -> RepositoryResult<()>;

    /// Remove a post; `NotFound` when nothing was deleted
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn insert(&self, post: &NewPost) -> RepositoryResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, author, content)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Post> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, author, content
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, author, content
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn update(&self, post: &NewPost, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $1, author = $2, content = $3
            WHERE id = $4
            "#,
        )
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.content)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // The row can vanish between the caller's lookup and this write
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
