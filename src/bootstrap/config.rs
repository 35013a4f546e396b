//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate the TOML configuration file / 定位 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Defaults belong to `wiring.rs`.
//! 默认值由 `wiring.rs` 负责。

use std::path::PathBuf;

use anyhow::Context;
use fp_core::config::AppConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FORMPILOT_CONFIG";

/// Pick the config path: the environment variable wins over the first
/// command-line argument.
/// 选择配置路径：环境变量优先于第一个命令行参数。
pub fn resolve_config_path(
    env_value: Option<String>,
    mut args: impl Iterator<Item = String>,
) -> Option<PathBuf> {
    env_value
        .filter(|value| !value.trim().is_empty())
        .or_else(|| args.next())
        .map(PathBuf::from)
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and zero delays are facts.
/// **不执行任何验证**：空字符串与零延迟都是事实。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
/// 文件无法读取或不是有效 TOML 时返回错误。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the config at `config_path`, or an empty config when no path was
/// given or the file does not exist.
/// 未给出路径或文件不存在时返回空配置。
pub fn load_config_or_empty(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(AppConfig::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [storage]
            data_dir = "/path/to/data"
            profile_file = "profile.json"

            [payment]
            delay_ms = 200

            [logging]
            log_dir = "/path/to/logs"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/path/to/data"));
        assert_eq!(config.profile_file, "profile.json");
        assert_eq!(config.payment_delay_ms, 200);
        assert_eq!(config.otp_demo_code, "");
        assert_eq!(config.log_dir, PathBuf::from("/path/to/logs"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[storage\ndata_dir = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/formpilot.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_or_empty_without_file() {
        assert_eq!(load_config_or_empty(None).unwrap(), AppConfig::empty());
        assert_eq!(
            load_config_or_empty(Some(PathBuf::from("/nonexistent/formpilot.toml"))).unwrap(),
            AppConfig::empty()
        );
    }

    #[test]
    fn test_resolve_config_path_prefers_env() {
        let args = vec!["from-args.toml".to_string()].into_iter();
        assert_eq!(
            resolve_config_path(Some("from-env.toml".to_string()), args),
            Some(PathBuf::from("from-env.toml"))
        );

        let args = vec!["from-args.toml".to_string()].into_iter();
        assert_eq!(
            resolve_config_path(Some("  ".to_string()), args),
            Some(PathBuf::from("from-args.toml"))
        );

        assert_eq!(resolve_config_path(None, std::iter::empty()), None);
    }
}
