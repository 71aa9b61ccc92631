//! 账号相关的数据模型
//!
use serde::{Deserialize, Serialize};

/// 已创建的账号，password 为加密后的值
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 创建账号所需的数据
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}
