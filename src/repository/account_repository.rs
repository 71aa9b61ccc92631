use crate::error::db_error::DbError;
use crate::model::account::{AccountModel, AddAccountModel};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// 写入账号，返回带 id 的账号
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, DbError>;
}

/// 内存账号仓库，以 email 为唯一键
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, AccountModel>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn find_by_email(&self, email: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(email).cloned()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, DbError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            tracing::debug!("account already exists, email: {}", account.email);
            return Err(DbError::UniqueConstraintViolation(account.email));
        }

        let created = AccountModel {
            id: Uuid::new_v4().to_string(),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(created.email.clone(), created.clone());
        tracing::debug!("account stored, id: {}", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_account_data(email: &str) -> AddAccountModel {
        AddAccountModel {
            name: "any_name".to_string(),
            email: email.to_string(),
            password: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn add_assigns_id_and_keeps_fields() {
        let repo = InMemoryAccountRepository::new();
        let account = repo.add(make_account_data("any_email@mail.com")).await.unwrap();

        assert!(Uuid::parse_str(&account.id).is_ok());
        assert_eq!(account.name, "any_name");
        assert_eq!(account.email, "any_email@mail.com");
        assert_eq!(account.password, "hashed_password");
        assert_eq!(
            repo.find_by_email("any_email@mail.com").await,
            Some(account)
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.add(make_account_data("any_email@mail.com")).await.unwrap();

        let res = repo.add(make_account_data("any_email@mail.com")).await;
        assert_eq!(
            res,
            Err(DbError::UniqueConstraintViolation(
                "any_email@mail.com".to_string()
            ))
        );
    }
}
