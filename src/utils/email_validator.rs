use crate::controller::protocols::EmailValidator;
use validator::ValidateEmail;

/// 基于 validator 的邮箱校验
#[derive(Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_email() {
        assert!(EmailValidatorAdapter.is_valid("valid_email@mail.com"));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(!EmailValidatorAdapter.is_valid("invalid_email"));
        assert!(!EmailValidatorAdapter.is_valid(""));
    }
}
