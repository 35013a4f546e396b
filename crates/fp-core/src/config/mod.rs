//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//! 配置数据结构与 TOML → DTO 映射。
//!
//! No validation and no default value calculation here: an empty string or
//! a zero is a fact, and wiring decides what to do with it.
//! 此处不做校验、不计算默认值：空字符串与 0 都是事实，由装配层决定如何处理。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted profile (may be empty)
    /// 保存用户资料的目录（可能为空）
    pub data_dir: PathBuf,

    /// Profile file name inside `data_dir`
    pub profile_file: String,

    /// Code issued by the simulated OTP service
    /// 模拟验证码服务发出的验证码
    pub otp_demo_code: String,

    pub otp_delay_ms: u64,

    pub payment_delay_ms: u64,

    pub chat_reply_delay_ms: u64,

    pub chat_reply_text: String,

    /// Directory for rolling log files; empty means stderr only
    /// 滚动日志目录；为空表示仅输出到 stderr
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty strings or zero. Negative integers are
    /// read as zero.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(str_at(toml_value, "storage", "data_dir")),
            profile_file: str_at(toml_value, "storage", "profile_file").to_string(),
            otp_demo_code: str_at(toml_value, "otp", "demo_code").to_string(),
            otp_delay_ms: millis_at(toml_value, "otp", "delay_ms"),
            payment_delay_ms: millis_at(toml_value, "payment", "delay_ms"),
            chat_reply_delay_ms: millis_at(toml_value, "chat", "reply_delay_ms"),
            chat_reply_text: str_at(toml_value, "chat", "reply_text").to_string(),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    /// 创建空的 AppConfig（所有字段为空/零）
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            profile_file: String::new(),
            otp_demo_code: String::new(),
            otp_delay_ms: 0,
            payment_delay_ms: 0,
            chat_reply_delay_ms: 0,
            chat_reply_text: String::new(),
            log_dir: PathBuf::new(),
        }
    }
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn millis_at(value: &toml::Value, section: &str, key: &str) -> u64 {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_every_section() {
        let toml_str = r#"
            [storage]
            data_dir = "/tmp/formpilot"
            profile_file = "userData.json"

            [otp]
            demo_code = "654321"
            delay_ms = 250

            [payment]
            delay_ms = 500

            [chat]
            reply_delay_ms = 1000
            reply_text = "On it."

            [logging]
            log_dir = "/tmp/formpilot/logs"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/formpilot"));
        assert_eq!(config.profile_file, "userData.json");
        assert_eq!(config.otp_demo_code, "654321");
        assert_eq!(config.otp_delay_ms, 250);
        assert_eq!(config.payment_delay_ms, 500);
        assert_eq!(config.chat_reply_delay_ms, 1000);
        assert_eq!(config.chat_reply_text, "On it.");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/formpilot/logs"));
    }

    #[test]
    fn test_from_toml_returns_empty_facts_when_missing() {
        let toml_value: Value = toml::from_str("[otp]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_reads_negative_delay_as_zero() {
        let toml_value: Value = toml::from_str("[chat]\nreply_delay_ms = -5\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.chat_reply_delay_ms, 0);
    }
}
