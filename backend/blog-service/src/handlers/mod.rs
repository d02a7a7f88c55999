/// HTTP handlers for blog endpoints
///
/// Each handler follows the same sequence: parse the path identifier, decode
/// the body, call the store, then serialize. Any failure short-circuits through
/// `AppError`, which owns the status code and client message.
pub mod comments;
pub mod posts;

pub use comments::{create_post_comment, get_post_comments};
pub use posts::{create_post, delete_post, get_all_posts, get_post, update_post};

use crate::error::{AppError, Result, ROUTE_NOT_FOUND_MESSAGE};
use actix_web::{
    http::{header, StatusCode},
    web, HttpResponse, HttpResponseBuilder,
};
use serde::{de::DeserializeOwned, Serialize};

pub const INVALID_POST_ID: &str = "unable to process postID";
pub const INVALID_JSON_BODY: &str = "unable to process JSON body";
pub const NO_RECORDS_FOUND: &str = "no records found";

/// Largest accepted request body; bigger payloads are rejected with 413
pub const MAX_BODY_BYTES: usize = 128 * 1024;

/// Register the post and comment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .default_service(web::to(route_not_found));

    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(get_all_posts))
                    .route(web::post().to(create_post)),
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(get_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            )
            .service(
                web::resource("/{post_id}/comments")
                    .route(web::get().to(get_post_comments))
                    .route(web::post().to(create_post_comment)),
            ),
    );
}

async fn route_not_found() -> Result<HttpResponse> {
    Err(AppError::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string()))
}

/// Parse a path-embedded post identifier
pub fn parse_post_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(INVALID_POST_ID.to_string()))
}

/// Decode a JSON request body, reporting any failure as a client error
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        AppError::BadRequest(INVALID_JSON_BODY.to_string())
    })
}

/// Serialize `data` as an indented JSON response.
///
/// Serialization failures come back as `AppError::Internal` instead of a
/// half-written body.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, data: &T) -> Result<HttpResponse> {
    write_json_with(HttpResponse::build(status), data)
}

/// 201 response pointing at the new resource through the `Location` header
pub fn write_created<T: Serialize + ?Sized>(location: &str, data: &T) -> Result<HttpResponse> {
    let mut builder = HttpResponse::Created();
    builder.insert_header((header::LOCATION, location.to_string()));
    write_json_with(builder, data)
}

fn write_json_with<T: Serialize + ?Sized>(
    mut builder: HttpResponseBuilder,
    data: &T,
) -> Result<HttpResponse> {
    let mut body = serde_json::to_vec_pretty(data)?;
    body.push(b'\n');

    Ok(builder.content_type("application/json").body(body))
}

/// Serialize a collection, substituting the sentinel body when it is empty
pub fn write_collection<T: Serialize>(items: &[T]) -> Result<HttpResponse> {
    if items.is_empty() {
        return write_json(
            StatusCode::OK,
            &serde_json::json!({ "": NO_RECORDS_FOUND }),
        );
    }

    write_json(StatusCode::OK, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPost;
    use actix_web::body::to_bytes;

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("42").unwrap(), 42);
        assert_eq!(parse_post_id("-3").unwrap(), -3);

        for raw in ["abc", "", "1.5", "12abc", "99999999999999999999"] {
            let err = parse_post_id(raw).unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(ref msg) if msg == INVALID_POST_ID),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_body_rejects_malformed_json() {
        let bodies: [&[u8]; 5] = [b"", b"{", b"[]", b"{\"title\":\"A\"}", b"not json"];
        for body in bodies {
            let err = decode_body::<NewPost>(body).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref msg) if msg == INVALID_JSON_BODY));
        }

        let post: NewPost =
            decode_body(br#"{"title":"A","author":"B","content":"C"}"#).unwrap();
        assert_eq!(post.author, "B");
    }

    #[actix_web::test]
    async fn test_empty_collection_uses_sentinel() {
        let resp = write_collection::<NewPost>(&[]).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"": "no records found"}));
    }

    #[actix_web::test]
    async fn test_write_json_sets_content_type() {
        let resp = write_json(StatusCode::CREATED, &serde_json::json!({"id": 1})).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        assert!(bytes.ends_with(b"\n"));
    }

    #[test]
    fn test_write_created_sets_location() {
        let resp = write_created("/posts/7", &serde_json::json!({"id": 7})).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/posts/7");
    }
}
