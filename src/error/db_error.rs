use crate::error::error_code;
use thiserror::Error;

/// 账号持久化、密码加密等数据层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("{0}")]
    SomethingWentWrong(String),
    #[error("Duplicate entry exists: {0}")]
    UniqueConstraintViolation(String),
}

impl DbError {
    pub fn get_code(&self) -> u32 {
        match self {
            DbError::SomethingWentWrong(_) => error_code::SOMETHING_WENT_WRONG,
            DbError::UniqueConstraintViolation(_) => error_code::UNIQUE_CONSTRAINT_VIOLATION,
        }
    }
}
