//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Apply defaults to the loaded config / 为已加载的配置补全默认值
//! - ✅ Create the infra adapters / 创建 infra 层具体实现
//! - ✅ Inject them into App / 将所有依赖注入到 App
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on fp-infra + fp-app simultaneously.**
//! > **这是唯一允许同时依赖 fp-infra 和 fp-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use fp_app::{App, AppDeps};
use fp_core::chat::DEFAULT_REPLY;
use fp_core::config::AppConfig;
use fp_core::registration::DEMO_OTP_CODE;
use fp_infra::profile::DEFAULT_PROFILE_FILE;
use fp_infra::{
    FileProfileRepository, ScriptedChatResponder, SimulatedOtpService, SimulatedPaymentGateway,
};
use tracing::info;

pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 500;
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data directory resolution failed: {0}")]
    DataDir(String),
}

/// Config with every default applied.
/// 已补全默认值的配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub profile_path: PathBuf,
    pub otp_code: String,
    pub otp_delay: Duration,
    pub payment_delay: Duration,
    pub chat_reply_delay: Duration,
    pub chat_reply_text: String,
}

/// Fill empty config facts with defaults.
///
/// `default_data_dir` is only called when `data_dir` is empty.
pub fn resolve_settings(
    config: &AppConfig,
    default_data_dir: impl FnOnce() -> anyhow::Result<PathBuf>,
) -> WiringResult<ResolvedSettings> {
    let data_dir = if config.data_dir.as_os_str().is_empty() {
        default_data_dir().map_err(|e| WiringError::DataDir(format!("{e:#}")))?
    } else {
        config.data_dir.clone()
    };
    let profile_file = non_empty_or(&config.profile_file, DEFAULT_PROFILE_FILE);

    Ok(ResolvedSettings {
        profile_path: data_dir.join(profile_file),
        otp_code: non_empty_or(&config.otp_demo_code, DEMO_OTP_CODE),
        otp_delay: Duration::from_millis(config.otp_delay_ms),
        payment_delay: Duration::from_millis(non_zero_or(
            config.payment_delay_ms,
            DEFAULT_PAYMENT_DELAY_MS,
        )),
        chat_reply_delay: Duration::from_millis(non_zero_or(
            config.chat_reply_delay_ms,
            DEFAULT_CHAT_REPLY_DELAY_MS,
        )),
        chat_reply_text: non_empty_or(&config.chat_reply_text, DEFAULT_REPLY),
    })
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn non_zero_or(value: u64, default: u64) -> u64 {
    if value == 0 {
        default
    } else {
        value
    }
}

/// Build the adapter set for `settings`.
/// 根据配置创建依赖。
pub fn wire_dependencies(settings: &ResolvedSettings) -> AppDeps {
    AppDeps {
        profile_repo: Arc::new(FileProfileRepository::new(settings.profile_path.clone())),
        otp: Arc::new(SimulatedOtpService::new(
            settings.otp_code.clone(),
            settings.otp_delay,
        )),
        payment_gateway: Arc::new(SimulatedPaymentGateway::new(settings.payment_delay)),
        chat_responder: Arc::new(ScriptedChatResponder::new(
            settings.chat_reply_text.clone(),
            settings.chat_reply_delay,
        )),
    }
}

/// Resolve defaults, wire adapters and build the App.
pub fn build_app(config: &AppConfig) -> WiringResult<App> {
    let settings = resolve_settings(config, fp_infra::fs::app_data_dir)?;
    info!(
        profile_path = %settings.profile_path.display(),
        payment_delay_ms = settings.payment_delay.as_millis() as u64,
        chat_reply_delay_ms = settings.chat_reply_delay.as_millis() as u64,
        "wiring dependencies"
    );
    Ok(App::new(wire_dependencies(&settings)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_dir() -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from("/default/data"))
    }

    #[test]
    fn test_resolve_settings_applies_defaults_to_empty_config() {
        let settings = resolve_settings(&AppConfig::empty(), fixed_dir).unwrap();

        assert_eq!(
            settings.profile_path,
            PathBuf::from("/default/data").join(DEFAULT_PROFILE_FILE)
        );
        assert_eq!(settings.otp_code, DEMO_OTP_CODE);
        assert_eq!(settings.otp_delay, Duration::ZERO);
        assert_eq!(settings.payment_delay, Duration::from_millis(500));
        assert_eq!(settings.chat_reply_delay, Duration::from_millis(1000));
        assert_eq!(settings.chat_reply_text, DEFAULT_REPLY);
    }

    #[test]
    fn test_resolve_settings_keeps_configured_values() {
        let mut config = AppConfig::empty();
        config.data_dir = PathBuf::from("/custom");
        config.profile_file = "me.json".to_string();
        config.otp_demo_code = "999999".to_string();
        config.payment_delay_ms = 50;
        config.chat_reply_text = "Noted.".to_string();

        let settings =
            resolve_settings(&config, || Err(anyhow::anyhow!("default dir must not be read"))).unwrap();

        assert_eq!(settings.profile_path, PathBuf::from("/custom/me.json"));
        assert_eq!(settings.otp_code, "999999");
        assert_eq!(settings.payment_delay, Duration::from_millis(50));
        assert_eq!(settings.chat_reply_text, "Noted.");
    }

    #[test]
    fn test_resolve_settings_reports_data_dir_failure() {
        let err = resolve_settings(&AppConfig::empty(), || Err(anyhow::anyhow!("no home"))).unwrap_err();
        assert!(matches!(err, WiringError::DataDir(msg) if msg.contains("no home")));
    }
}
