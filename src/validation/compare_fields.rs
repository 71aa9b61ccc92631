use crate::controller::protocols::Validation;
use crate::error::controller_error::ControllerError;
use serde_json::Value;

/// 两个字段的值不一致时，报 field_to_compare 无效
pub struct CompareFieldsValidation {
    field_name: String,
    field_to_compare_name: String,
}

impl CompareFieldsValidation {
    pub fn new(field_name: &str, field_to_compare_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            field_to_compare_name: field_to_compare_name.to_string(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> Option<ControllerError> {
        if input.get(&self.field_name) != input.get(&self.field_to_compare_name) {
            return Some(ControllerError::invalid_param(&self.field_to_compare_name));
        }
        None
    }
}
