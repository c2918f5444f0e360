//! 驱动层模块
//!
//! 本模块提供导弹发射器的命令执行功能，包括：
//! - 命令词汇（`Command`）及配置边界的名称翻译
//! - 单条命令解释执行（定时移动、归零、暂停、多发射击、LED）
//! - 命令序列回放（命名命令集 / 临时瞄准序列）
//! - 命令集配置（TOML）
//!
//! # 执行模型
//!
//! 单线程、同步、阻塞：每次移动、暂停和装填间隔都是对调用线程的挂起，
//! 命令之间没有重叠，也没有取消机制。

pub mod command;
pub mod config;
mod error;
pub mod interpreter;
pub mod sequencer;
pub mod timing;

pub use command::{Command, FireCount, RawCommand};
pub use config::{CommandSets, LauncherConfig};
pub use error::{ConfigError, DriverError};
pub use interpreter::{Interpreter, Outcome};
pub use sequencer::{SequenceReport, Sequencer, SkippedCommand, targeting_sequence};
pub use timing::{InterpreterConfig, Sleeper, ThreadSleeper};

// 重新导出下层常用类型
pub use retaliation_protocol::DeviceVariant;
pub use retaliation_usb::{LauncherTransport, UsbError, UsbLauncher};
