use crate::error::db_error::DbError;

/// 密码加密
#[cfg_attr(test, mockall::automock)]
pub trait Hasher: Send + Sync {
    fn hash(&self, value: &str) -> Result<String, DbError>;
}

pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Hasher for BcryptAdapter {
    fn hash(&self, value: &str) -> Result<String, DbError> {
        bcrypt::hash(value, self.cost).map_err(|err| {
            tracing::error!("bcrypt hash error :{}", err.to_string());
            DbError::SomethingWentWrong(err.to_string())
        })
    }
}
