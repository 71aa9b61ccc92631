use crate::error::error_code;
use thiserror::Error;

/// 服务内部错误，只对外暴露通用信息
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("Internal server error")]
pub struct ServerError {
    pub stack: Option<String>,
}

impl ServerError {
    pub fn new(stack: Option<String>) -> Self {
        Self { stack }
    }
}

/// controller 返回给调用方的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Missing param: {0}")]
    MissingParam(String),
    #[error("Invalid param: {0}")]
    InvalidParam(String),
    #[error(transparent)]
    Server(#[from] ServerError),
}

impl ControllerError {
    pub fn missing_param(field: &str) -> Self {
        ControllerError::MissingParam(field.to_string())
    }

    pub fn invalid_param(field: &str) -> Self {
        ControllerError::InvalidParam(field.to_string())
    }

    pub fn get_code(&self) -> u32 {
        match self {
            ControllerError::MissingParam(_) => error_code::MISSING_PARAM,
            ControllerError::InvalidParam(_) => error_code::INVALID_PARAM,
            ControllerError::Server(_) => error_code::SERVER_ERROR,
        }
    }
}
