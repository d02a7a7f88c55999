/// Error types for Blog Service
///
/// `AppError` is the only place HTTP status codes and client-visible messages
/// are decided. Repository failures are classified into it via `From`.
use crate::db::RepositoryError;
use actix_web::{
    dev::ServiceResponse,
    error::ResponseError,
    http::{header, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpResponse,
};
use thiserror::Error;

/// Message returned to clients for any unclassified failure
pub const SERVER_ERROR_MESSAGE: &str = "server encountered a problem";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "request body too large";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "resource not found";

/// Result type for blog-service handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Unusable identifier or body
    #[error("{0}")]
    BadRequest(String),

    /// Missing entity, or a missing parent for a new comment
    #[error("{0}")]
    NotFound(String),

    /// Storage or serialization failure; the detail never reaches the client
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Text placed in the `{"error": ...}` envelope
    pub fn client_message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg,
            AppError::Internal(_) => SERVER_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            // Emitted inside the request span, which carries method and uri
            tracing::error!(error = %detail, "request failed with server error");
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.client_message(),
        }))
    }
}

/// Error responses produced by actix itself (extractor limits, unmatched methods)
/// carry plain-text or empty bodies. This rewrites them into the JSON envelope;
/// responses that are already JSON pass through untouched.
pub fn json_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(envelope_error_response)
}

fn envelope_error_response<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false);

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let message = match status {
        StatusCode::PAYLOAD_TOO_LARGE => PAYLOAD_TOO_LARGE_MESSAGE,
        StatusCode::METHOD_NOT_ALLOWED => METHOD_NOT_ALLOWED_MESSAGE,
        StatusCode::NOT_FOUND => ROUTE_NOT_FOUND_MESSAGE,
        s if s.is_server_error() => SERVER_ERROR_MESSAGE,
        s => s.canonical_reason().unwrap_or("bad request"),
    };

    let (req, _) = res.into_parts();
    let resp = HttpResponse::build(status).json(serde_json::json!({ "error": message }));

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, resp).map_into_right_body(),
    ))
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound | RepositoryError::ForeignKey => {
                AppError::NotFound(err.to_string())
            }
            RepositoryError::Storage(e) => AppError::Internal(format!("Database error: {}", e)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Serialization error: {}", err))
    }
}
