use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "formpilot";

/// Get the FormPilot data root directory.
///
/// 获取 FormPilot 数据根目录。
///
/// - Linux: `$XDG_DATA_HOME/formpilot` or `~/.local/share/formpilot`
/// - macOS: `~/Library/Application Support/formpilot`
/// - Windows: `%LOCALAPPDATA%\formpilot`
///
/// The directory is not created here.
/// 此函数不自动创建目录。
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_local_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}
