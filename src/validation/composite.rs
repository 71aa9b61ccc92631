use crate::controller::protocols::Validation;
use crate::error::controller_error::ControllerError;
use serde_json::Value;

/// 按顺序执行，返回第一个错误
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Value) -> Option<ControllerError> {
        self.validations
            .iter()
            .find_map(|validation| validation.validate(input))
    }
}
