use crate::error::config_error::ConfigError;
use once_cell::sync::OnceCell;

pub static CONFIG: OnceCell<Config> = OnceCell::new();

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bcrypt_cost: u32,
    pub log_dir: String,
}

pub fn init() -> Result<&'static Config, ConfigError> {
    // 没有 .env 文件时只用环境变量
    dotenv::dotenv().ok();
    // 给日志库设置环境变量
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info")
    }

    CONFIG.get_or_try_init(load)
}

fn load() -> Result<Config, ConfigError> {
    Ok(Config {
        port: get_parsed_or("PORT", DEFAULT_PORT)?,
        bcrypt_cost: get_parsed_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
        log_dir: get_or("LOG_DIR", "log"),
    })
}

pub fn get(parameter: &str) -> Result<String, ConfigError> {
    std::env::var(parameter).map_err(|_| ConfigError::Missing(parameter.to_string()))
}

pub fn get_or(parameter: &str, default: &str) -> String {
    get(parameter).unwrap_or_else(|_| default.to_string())
}

/// 未设置时取默认值，设置了但无法解析时报错
pub fn get_parsed_or<T>(parameter: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(parameter) {
        Ok(value) => parse(parameter, &value),
        Err(_) => Ok(default),
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|err| ConfigError::Invalid {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_an_error() {
        assert!(matches!(
            get("SIGNUP_SERVER_SURELY_UNSET"),
            Err(ConfigError::Missing(_))
        ));
        assert_eq!(get_or("SIGNUP_SERVER_SURELY_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn typed_default_is_used_when_unset() {
        assert_eq!(
            get_parsed_or("SIGNUP_SERVER_SURELY_UNSET_PORT", DEFAULT_PORT).unwrap(),
            3000
        );
    }

    #[test]
    fn set_but_invalid_value_is_an_error() {
        std::env::set_var("SIGNUP_SERVER_TEST_BAD_COST", "twelve");
        let res = get_parsed_or("SIGNUP_SERVER_TEST_BAD_COST", DEFAULT_BCRYPT_COST);
        assert!(
            matches!(res, Err(ConfigError::Invalid { ref name, .. }) if name == "SIGNUP_SERVER_TEST_BAD_COST")
        );
    }

    #[test]
    fn parse_reports_the_variable() {
        let res = parse::<u16>("PORT", "not_a_port");
        assert!(matches!(res, Err(ConfigError::Invalid { ref name, .. }) if name == "PORT"));
        assert_eq!(parse::<u16>("PORT", "8080").unwrap(), 8080);
    }
}
