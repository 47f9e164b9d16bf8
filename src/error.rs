/*
error.rs
*/

use axum::{
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{
    json,
};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    ValidationError(String),
}

/*
Axum uses the IntoResponse trait to turn values into HTTP responses.
By implementing this trait for ApiError, we can now return these errors
from our handlers.
*/
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                msg
            ),
            ApiError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                msg
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
