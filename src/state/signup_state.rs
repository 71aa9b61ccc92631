use crate::controller::signup_controller::SignUpController;
use crate::repository::account_repository::InMemoryAccountRepository;
use crate::service::db_add_account::DbAddAccount;
use crate::utils::email_validator::EmailValidatorAdapter;
use crate::utils::encrypt::BcryptAdapter;
use crate::validation::make_signup_validation;
use std::sync::Arc;

#[derive(Clone)]
pub struct SignUpState {
    pub signup_controller: Arc<SignUpController>,
}

impl SignUpState {
    pub fn new(account_repo: &Arc<InMemoryAccountRepository>, bcrypt_cost: u32) -> Self {
        let hasher = Arc::new(BcryptAdapter::new(bcrypt_cost));
        let add_account = DbAddAccount::new(&hasher, account_repo);
        let validation = make_signup_validation(Arc::new(EmailValidatorAdapter));
        Self {
            signup_controller: Arc::new(SignUpController::new(
                Arc::new(add_account),
                Arc::new(validation),
            )),
        }
    }

    #[cfg(test)]
    pub fn from_controller(signup_controller: SignUpController) -> Self {
        Self {
            signup_controller: Arc::new(signup_controller),
        }
    }
}
