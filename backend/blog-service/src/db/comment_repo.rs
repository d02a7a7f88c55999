use super::{RepositoryError, RepositoryResult, StorageErrorExt};
use crate::models::{Comment, NewComment};
use async_trait::async_trait;
use sqlx::PgPool;

/// Create/list operations over comments
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a comment under `post_id`.
    ///
    /// Fails with `ForeignKey` when the post does not exist. The check is the
    /// constraint on the insert itself, never a separate lookup.
    async fn insert(&self, comment: &NewComment, post_id: i64) -> RepositoryResult<i64>;

    /// All comments belonging to `post_id`, in ascending id order
    async fn get_by_post(&self, post_id: i64) -> RepositoryResult<Vec<Comment>>;
}

/// PostgreSQL-backed comment repository
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn insert(&self, comment: &NewComment, post_id: i64) -> RepositoryResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (post_id, author, content)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(post_id)
        .bind(&comment.author)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                RepositoryError::ForeignKey
            } else {
                RepositoryError::Storage(e)
            }
        })
    }

    async fn get_by_post(&self, post_id: i64) -> RepositoryResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author, content
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
