use crate::controller::protocols::{EmailValidator, Validation};
use crate::validation::{
    CompareFieldsValidation, EmailValidation, RequiredFieldValidation, ValidationComposite,
};
use std::sync::Arc;

pub const SIGNUP_REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// 注册请求的校验链：必填 -> 两次密码一致 -> 邮箱格式
pub fn make_signup_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = SIGNUP_REQUIRED_FIELDS
        .iter()
        .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
        .collect();
    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));
    validations.push(Box::new(EmailValidation::new("email", email_validator)));
    ValidationComposite::new(validations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::protocols::MockEmailValidator;
    use crate::error::controller_error::ControllerError;
    use serde_json::{json, Value};

    fn make_email_validator(valid: bool) -> Arc<dyn EmailValidator> {
        let mut email_validator = MockEmailValidator::new();
        email_validator.expect_is_valid().return_const(valid);
        Arc::new(email_validator)
    }

    fn make_body() -> Value {
        json!({
            "name": "any_name",
            "email": "any_email@mail.com",
            "password": "any_password",
            "passwordConfirmation": "any_password"
        })
    }

    #[test]
    fn each_missing_field_is_named() {
        let sut = make_signup_validation(make_email_validator(true));
        for field in SIGNUP_REQUIRED_FIELDS {
            let mut body = make_body();
            body.as_object_mut().unwrap().remove(field);
            assert_eq!(
                sut.validate(&body),
                Some(ControllerError::missing_param(field)),
                "field: {}",
                field
            );
        }
    }

    #[test]
    fn numeric_password_pair_is_invalid() {
        let sut = make_signup_validation(make_email_validator(true));
        let mut body = make_body();
        body["password"] = json!(42);
        body["passwordConfirmation"] = json!(42);
        assert_eq!(
            sut.validate(&body),
            Some(ControllerError::invalid_param("password"))
        );
    }

    #[test]
    fn mismatched_confirmation_is_invalid() {
        let sut = make_signup_validation(make_email_validator(true));
        let mut body = make_body();
        body["passwordConfirmation"] = json!("other_password");
        assert_eq!(
            sut.validate(&body),
            Some(ControllerError::invalid_param("passwordConfirmation"))
        );
    }

    #[test]
    fn invalid_email_is_reported() {
        let sut = make_signup_validation(make_email_validator(false));
        assert_eq!(
            sut.validate(&make_body()),
            Some(ControllerError::invalid_param("email"))
        );
    }

    #[test]
    fn valid_body_passes() {
        let sut = make_signup_validation(make_email_validator(true));
        assert_eq!(sut.validate(&make_body()), None);
    }
}
