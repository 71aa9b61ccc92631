use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const SUCCESS_CODE: u32 = 0;
pub const SUCCESS_MSG: &str = "success";

/// 成功响应：{ code, msg, data }
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiSuccessResponse<T> {
    code: u32,
    msg: &'static str,
    data: T,
    #[serde(skip)]
    status: StatusCode,
}

/// 失败响应：{ code, msg }，http 状态码不进 body
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    code: u32,
    msg: String,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiSuccessResponse<T> {
    pub(crate) fn new(status: StatusCode, data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG,
            data,
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccessResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl ApiErrorResponse {
    pub(crate) fn new(status: StatusCode, code: u32, msg: String) -> Self {
        Self { code, msg, status }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
