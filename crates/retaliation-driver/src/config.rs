//! 命令集配置
//!
//! TOML 格式：
//!
//! ```toml
//! [timing]
//! reload_ms = 4500
//!
//! [command_sets]
//! tom = [
//!     { command = "zero" },
//!     { command = "right", value = 4400 },
//!     { command = "up", value = 200 },
//!     { command = "fire", value = 4 },
//!     { command = "zero" },
//! ]
//! ```
//!
//! 命令名在配置中保持字符串形式，执行时才翻译：未知命令在回放时报告并跳过，
//! 不会导致整个配置文件加载失败。

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::RawCommand;
use crate::error::ConfigError;
use crate::timing::InterpreterConfig;

/// 命名命令集
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandSets(BTreeMap<String, Vec<RawCommand>>);

impl CommandSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或替换命令集
    pub fn insert(&mut self, name: impl Into<String>, steps: Vec<RawCommand>) {
        self.0.insert(name.into(), steps);
    }

    pub fn get(&self, name: &str) -> Option<&[RawCommand]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// 命令集名称（字典序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawCommand])> {
        self.0.iter().map(|(name, steps)| (name.as_str(), steps.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 列出所有无法翻译的命令：(命令集, 位置, 命令名)
    pub fn unknown_commands(&self) -> Vec<(&str, usize, &str)> {
        self.iter()
            .flat_map(|(name, steps)| {
                steps.iter().enumerate().filter_map(move |(index, raw)| {
                    raw.parse()
                        .is_err()
                        .then_some((name, index, raw.command.as_str()))
                })
            })
            .collect()
    }
}

/// 发射器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// 时序参数
    pub timing: InterpreterConfig,
    /// 命名命令集
    pub command_sets: CommandSets,
}

impl LauncherConfig {
    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[timing]
reload_ms = 4000

[command_sets]
tom = [
    { command = "zero" },
    { command = "right", value = 4400 },
    { command = "up", value = 200 },
    { command = "fire", value = 4 },
    { command = "zero" },
]
chris = [
    { command = "zero", value = 0 },
    { command = "spin", value = 1 },
    { command = "pause", value = 5000 },
]
"#;

    #[test]
    fn test_parse_sample() {
        let config = LauncherConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.timing.reload_ms, 4000);
        assert_eq!(config.timing.zero_down_ms, 2000);
        assert_eq!(config.command_sets.len(), 2);

        let tom = config.command_sets.get("tom").unwrap();
        assert_eq!(tom.len(), 5);
        assert_eq!(tom[0], RawCommand::new("zero", 0));
        assert_eq!(tom[1], RawCommand::new("right", 4400));
    }

    #[test]
    fn test_names_sorted() {
        let config = LauncherConfig::from_toml_str(SAMPLE).unwrap();
        let names: Vec<_> = config.command_sets.names().collect();
        assert_eq!(names, vec!["chris", "tom"]);
        assert!(config.command_sets.contains("tom"));
        assert!(!config.command_sets.contains("will"));
    }

    #[test]
    fn test_unknown_commands_reported_not_rejected() {
        let config = LauncherConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.command_sets.unknown_commands(), vec![("chris", 1, "spin")]);
    }

    #[test]
    fn test_empty_config() {
        let config = LauncherConfig::from_toml_str("").unwrap();
        assert_eq!(config, LauncherConfig::default());
        assert!(config.command_sets.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let err = LauncherConfig::from_toml_str("[command_sets]\ntom = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LauncherConfig::load_from_file("/nonexistent/retaliation.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert!(path.ends_with("retaliation.toml"));
            },
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_insert() {
        let mut sets = CommandSets::new();
        sets.insert("solo", vec![RawCommand::new("fire", 1)]);
        assert_eq!(sets.get("solo").unwrap().len(), 1);
        assert!(sets.get("missing").is_none());
    }
}
