use crate::controller::protocols::{EmailValidator, Validation};
use crate::error::controller_error::ControllerError;
use serde_json::Value;
use std::sync::Arc;

pub struct EmailValidation {
    field_name: String,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field_name: &str, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field_name: field_name.to_string(),
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &Value) -> Option<ControllerError> {
        let is_valid = input
            .get(&self.field_name)
            .and_then(Value::as_str)
            .is_some_and(|email| self.email_validator.is_valid(email));
        if !is_valid {
            return Some(ControllerError::invalid_param(&self.field_name));
        }
        None
    }
}
