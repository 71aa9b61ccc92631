use crate::controller::protocols::{Controller, HttpRequest, HttpResponse, Validation};
use crate::error::controller_error::ServerError;
use crate::model::account::{AccountModel, AddAccountModel};
use crate::response::http_helpers::{bad_request, ok, server_error};
use crate::service::add_account::AddAccount;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SignUpController {
    add_account: Arc<dyn AddAccount>,
    validation: Arc<dyn Validation>,
}

impl SignUpController {
    pub fn new(add_account: Arc<dyn AddAccount>, validation: Arc<dyn Validation>) -> Self {
        Self {
            add_account,
            validation,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Output = AccountModel;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<AccountModel> {
        if let Some(error) = self.validation.validate(&request.body) {
            tracing::warn!("signup validation failed: {}", error);
            return bad_request(error);
        }

        // 校验通过后 name/email/password 都应是字符串
        let account_data = match serde_json::from_value::<AddAccountModel>(request.body) {
            Ok(account_data) => account_data,
            Err(err) => {
                tracing::error!("signup body decode error: {}", err.to_string());
                return server_error(ServerError::new(None));
            }
        };
        match self.add_account.add(account_data).await {
            Ok(account) => {
                tracing::info!("account created, id: {}", account.id);
                ok(account)
            }
            Err(err) => {
                tracing::error!(
                    "add account error, code: {}, error: {}",
                    err.get_code(),
                    err.to_string()
                );
                server_error(ServerError::new(None))
            }
        }
    }
}
