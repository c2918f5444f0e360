//! 命令类型定义模块
//!
//! 闭合的命令词汇表，以及从配置/命令行的 `(名称, 数值)` 到 `Command` 的翻译。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// 单次射击数量
///
/// 取值范围 [1, 4]。超出范围的值（包括 0 和负数）一律收敛为 1，不报错：
/// 这是有意保留的宽松策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FireCount(u8);

impl FireCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// 宽松收敛：范围内原样保留，范围外变为 1
    pub fn clamped(value: i64) -> Self {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            FireCount(value as u8)
        } else {
            FireCount(Self::MIN)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for FireCount {
    fn default() -> Self {
        FireCount(Self::MIN)
    }
}

/// 原语命令
///
/// 移动和暂停携带毫秒数，射击携带发数，LED 携带开关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up(u64),
    Down(u64),
    Left(u64),
    Right(u64),
    Fire(FireCount),
    /// 归零：移动到左下角机械极限（忽略数值）
    Zero,
    Pause(u64),
    Led(bool),
}

/// 负时长按 0 处理
fn duration_ms(value: i64) -> u64 {
    value.max(0) as u64
}

impl Command {
    /// 按名称翻译（大小写不敏感）
    ///
    /// 别名：`park`/`reset` → `zero`，`sleep` → `pause`，`shoot` → `fire`。
    ///
    /// # 错误
    /// 名称不在词汇表中时返回 `DriverError::UnknownCommand`（可恢复）。
    pub fn parse(name: &str, value: i64) -> Result<Self, DriverError> {
        let command = match name.trim().to_ascii_lowercase().as_str() {
            "up" => Command::Up(duration_ms(value)),
            "down" => Command::Down(duration_ms(value)),
            "left" => Command::Left(duration_ms(value)),
            "right" => Command::Right(duration_ms(value)),
            "zero" | "park" | "reset" => Command::Zero,
            "pause" | "sleep" => Command::Pause(duration_ms(value)),
            "fire" | "shoot" => Command::Fire(FireCount::clamped(value)),
            "led" => Command::Led(value != 0),
            _ => {
                return Err(DriverError::UnknownCommand {
                    name: name.to_string(),
                });
            },
        };
        Ok(command)
    }

    /// 便捷构造：射击（带收敛）
    pub fn fire(count: i64) -> Self {
        Command::Fire(FireCount::clamped(count))
    }

    /// 规范名称
    pub fn name(&self) -> &'static str {
        match self {
            Command::Up(_) => "up",
            Command::Down(_) => "down",
            Command::Left(_) => "left",
            Command::Right(_) => "right",
            Command::Fire(_) => "fire",
            Command::Zero => "zero",
            Command::Pause(_) => "pause",
            Command::Led(_) => "led",
        }
    }

    /// 数值（与 `parse` 互逆）
    pub fn value(&self) -> i64 {
        match *self {
            Command::Up(ms)
            | Command::Down(ms)
            | Command::Left(ms)
            | Command::Right(ms)
            | Command::Pause(ms) => ms as i64,
            Command::Fire(count) => count.get() as i64,
            Command::Zero => 0,
            Command::Led(on) => on as i64,
        }
    }

    /// 转换回配置形式
    pub fn to_raw(&self) -> RawCommand {
        RawCommand::new(self.name(), self.value())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Zero => write!(f, "zero"),
            _ => write!(f, "{}({})", self.name(), self.value()),
        }
    }
}

/// 未翻译的命令（配置文件/命令行中的形式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommand {
    pub command: String,
    #[serde(default)]
    pub value: i64,
}

impl RawCommand {
    pub fn new(command: impl Into<String>, value: i64) -> Self {
        Self {
            command: command.into(),
            value,
        }
    }

    /// 翻译为 `Command`
    pub fn parse(&self) -> Result<Command, DriverError> {
        Command::parse(&self.command, self.value)
    }
}

impl fmt::Display for RawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.command, self.value)
    }
}
