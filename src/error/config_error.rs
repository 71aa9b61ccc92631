use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config -- env var `{0}` is not defined")]
    Missing(String),
    #[error("config -- env var `{name}` is invalid: {reason}")]
    Invalid { name: String, reason: String },
}
