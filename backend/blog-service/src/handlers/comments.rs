/// Comment handlers - HTTP endpoints for comments scoped under a post
use super::{decode_body, parse_post_id, write_collection, write_created};
use crate::error::Result;
use crate::models::{Comment, NewComment};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub id: i64,
    pub location: String,
    pub comment: Comment,
}

/// List the comments of a post
/// GET /posts/{post_id}/comments
pub async fn get_post_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let comments = state.comments.get_by_post(post_id).await?;
    write_collection(&comments)
}

/// Create a comment under a post. A missing post is a 404, not a server fault.
/// POST /posts/{post_id}/comments
pub async fn create_post_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let input: NewComment = decode_body(&body)?;

    let id = state.comments.insert(&input, post_id).await?;
    tracing::info!(post_id, comment_id = id, "comment created");

    let location = format!("/posts/{}/comments", post_id);
    write_created(
        &location,
        &CreateCommentResponse {
            id,
            location: location.clone(),
            comment: Comment::from_new(id, post_id, input),
        },
    )
}
