pub mod config_error;
pub mod controller_error;
pub mod db_error;
pub mod error_code;
pub mod request_error;
