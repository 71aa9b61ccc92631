pub mod email_validator;
pub mod encrypt;
