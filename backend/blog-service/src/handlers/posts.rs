/// Post handlers - HTTP endpoints for post operations
use super::{decode_body, parse_post_id, write_collection, write_created, write_json};
use crate::error::Result;
use crate::models::{NewPost, Post};
use crate::AppState;
use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub id: i64,
    pub location: String,
    pub post: Post,
}

pub fn post_location(id: i64) -> String {
    format!("/posts/{}", id)
}

/// List every post
/// GET /posts
pub async fn get_all_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.posts.get_all().await?;
    write_collection(&posts)
}

/// Get a post by ID
/// GET /posts/{post_id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let post = state.posts.get(post_id).await?;
    write_json(StatusCode::OK, &post)
}

/// Create a new post
/// POST /posts
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let input: NewPost = decode_body(&body)?;

    let id = state.posts.insert(&input).await?;
    tracing::info!(post_id = id, "post created");

    let location = post_location(id);
    write_created(
        &location,
        &CreatePostResponse {
            id,
            location: location.clone(),
            post: Post::from_new(id, input),
        },
    )
}

/// Replace every field of an existing post
/// PUT /posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let input: NewPost = decode_body(&body)?;

    let mut post = state.posts.get(post_id).await?;
    state.posts.update(&input, post_id).await?;
    post.overwrite(input);

    write_json(StatusCode::OK, &post)
}

/// Delete a post
/// DELETE /posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    state.posts.delete(post_id).await?;
    tracing::info!(post_id, "post deleted");

    write_json(
        StatusCode::OK,
        &serde_json::json!({ "message": "successfully deleted" }),
    )
}
