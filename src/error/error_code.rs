// 参数错误
// 10xxx
pub const MISSING_PARAM: u32 = 10001;
pub const INVALID_PARAM: u32 = 10002;

// 服务错误
// 13xxx
pub const SERVER_ERROR: u32 = 13000;
pub const SOMETHING_WENT_WRONG: u32 = 13001;
pub const UNIQUE_CONSTRAINT_VIOLATION: u32 = 13002;

// request错误
// 20xxx
pub const JSON_REJECTION: u32 = 20002;
