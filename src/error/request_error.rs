use crate::response::api_response::ApiErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::error_code;

/// 请求体无法解析时的错误，此时不会进入 controller
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

impl RequestError {
    fn get_code(&self) -> u32 {
        match self {
            RequestError::JsonRejection(_) => error_code::JSON_REJECTION,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            RequestError::JsonRejection(_) => {
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, self.get_code(), self.to_string())
                    .into_response()
            }
        }
    }
}
