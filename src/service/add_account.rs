use crate::error::db_error::DbError;
use crate::model::account::{AccountModel, AddAccountModel};
use async_trait::async_trait;

/// 创建账号的用例
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, DbError>;
}
