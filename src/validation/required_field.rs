use crate::controller::protocols::Validation;
use crate::error::controller_error::ControllerError;
use serde_json::Value;

/// 字段缺失、为 null 或空字符串时报 MissingParam，非字符串报 InvalidParam
pub struct RequiredFieldValidation {
    field_name: String,
}

impl RequiredFieldValidation {
    pub fn new(field_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> Option<ControllerError> {
        match input.get(&self.field_name) {
            None | Some(Value::Null) => Some(ControllerError::missing_param(&self.field_name)),
            Some(Value::String(value)) if value.is_empty() => {
                Some(ControllerError::missing_param(&self.field_name))
            }
            Some(Value::String(_)) => None,
            Some(_) => Some(ControllerError::invalid_param(&self.field_name)),
        }
    }
}
