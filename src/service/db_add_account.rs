use crate::error::db_error::DbError;
use crate::model::account::{AccountModel, AddAccountModel};
use crate::repository::account_repository::AddAccountRepository;
use crate::service::add_account::AddAccount;
use crate::utils::encrypt::Hasher;
use async_trait::async_trait;
use std::sync::Arc;

/// 先加密密码，再写入仓库
pub struct DbAddAccount<H, R> {
    hasher: Arc<H>,
    account_repo: Arc<R>,
}

impl<H, R> DbAddAccount<H, R>
where
    H: Hasher,
    R: AddAccountRepository,
{
    pub fn new(hasher: &Arc<H>, account_repo: &Arc<R>) -> Self {
        Self {
            hasher: Arc::clone(hasher),
            account_repo: Arc::clone(account_repo),
        }
    }
}

#[async_trait]
impl<H, R> AddAccount for DbAddAccount<H, R>
where
    H: Hasher,
    R: AddAccountRepository,
{
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, DbError> {
        let hashed_password = self.hasher.hash(&account.password)?;
        self.account_repo
            .add(AddAccountModel {
                password: hashed_password,
                ..account
            })
            .await
    }
}
