//! controller 层与外部协作者之间的约定
//!
use crate::error::controller_error::ControllerError;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody<T> {
    Data(T),
    Error(ControllerError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub body: ResponseBody<T>,
}

#[async_trait]
pub trait Controller: Send + Sync {
    type Output;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Output>;
}

/// 请求体校验，返回 None 表示通过
#[cfg_attr(test, mockall::automock)]
pub trait Validation: Send + Sync {
    fn validate(&self, input: &Value) -> Option<ControllerError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}
