/// Database access layer
///
/// Repositories are stateless `Clone` values wrapping the shared `PgPool`.
/// Handlers reach them through the `PostStore` / `CommentStore` traits so a
/// different backend can stand in for PostgreSQL.
pub mod comment_repo;
pub mod post_repo;

pub use comment_repo::{CommentRepository, CommentStore};
pub use post_repo::{PostRepository, PostStore};

use thiserror::Error;

/// SQLSTATE raised by PostgreSQL for a foreign key violation
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors surfaced by the repositories
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    /// A comment referenced a post that does not exist
    #[error("the post with the given id does not exist")]
    ForeignKey,

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Backend capability check for referential-integrity failures.
pub trait StorageErrorExt {
    fn is_foreign_key_violation(&self) -> bool;
}

impl StorageErrorExt for sqlx::Error {
    fn is_foreign_key_violation(&self) -> bool {
        match self {
            sqlx::Error::Database(db_err) => {
                matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
                    || db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
            }
            _ => false,
        }
    }
}
