//! 请求体校验器，组合后注入 controller
//!
pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod required_field;
pub mod signup_validation;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use required_field::RequiredFieldValidation;
pub use signup_validation::make_signup_validation;
