use crate::controller::protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};
use crate::error::request_error::RequestError;
use crate::response::api_response::{ApiErrorResponse, ApiSuccessResponse};
use crate::state::signup_state::SignUpState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_macros::debug_handler;
use serde::Serialize;
use serde_json::Value;

/// controller 的结果转成 http 响应
pub fn adapt_response<T: Serialize>(http_response: HttpResponse<T>) -> Response {
    let status = StatusCode::from_u16(http_response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match http_response.body {
        ResponseBody::Data(data) => ApiSuccessResponse::new(status, data).into_response(),
        ResponseBody::Error(error) => {
            ApiErrorResponse::new(status, error.get_code(), error.to_string()).into_response()
        }
    }
}

// 注册
#[debug_handler]
pub async fn signup(
    State(state): State<SignUpState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, RequestError> {
    let Json(body) = payload?;
    let http_response = state
        .signup_controller
        .handle(HttpRequest::new(body))
        .await;
    Ok(adapt_response(http_response))
}
