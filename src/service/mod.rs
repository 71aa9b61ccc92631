pub mod add_account;
pub mod db_add_account;
