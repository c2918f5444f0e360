//! 配置加载
//!
//! 查找顺序：`--config` 指定的文件 → `<config_dir>/retaliation/config.toml` → 内置默认配置。

use anyhow::{Context, Result};
use retaliation_driver::LauncherConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 内置默认配置
const DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

/// 默认配置文件路径
fn default_config_file() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("retaliation");
    path.push("config.toml");
    Some(path)
}

/// 加载配置
pub fn load(explicit: Option<&Path>) -> Result<LauncherConfig> {
    let config = match explicit {
        Some(path) => LauncherConfig::load_from_file(path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
        None => match default_config_file() {
            Some(path) if path.exists() => LauncherConfig::load_from_file(&path)
                .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
            _ => {
                debug!("No config file found, using built-in command sets");
                LauncherConfig::from_toml_str(DEFAULT_CONFIG).context("解析内置配置失败")?
            },
        },
    };

    for (set, index, name) in config.command_sets.unknown_commands() {
        warn!("Command set '{}' step {}: unknown command '{}'", set, index, name);
    }

    Ok(config)
}
