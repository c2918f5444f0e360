//! 驱动层错误类型定义

use crate::command::Command;
use retaliation_protocol::ProtocolError;
use retaliation_usb::UsbError;
use std::path::PathBuf;
use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 执行某条命令时控制传输失败（致命）
    #[error("Transport error while executing {command}: {source}")]
    Transport {
        command: Command,
        #[source]
        source: UsbError,
    },

    /// 序列在第 `index` 步中止（致命，剩余命令未执行）
    #[error("Sequence aborted at step {index}: {source}")]
    SequenceAborted {
        index: usize,
        #[source]
        source: Box<DriverError>,
    },

    /// 未知命令名（非致命，序列继续）
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// 未配置的命令集
    #[error("Unknown command set: '{name}'")]
    UnknownCommandSet { name: String },

    /// 协议错误（如变体未知）
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl DriverError {
    /// 是否可以跳过当前命令继续执行
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DriverError::UnknownCommand { .. })
    }
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
