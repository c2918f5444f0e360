//! exec 命令
//!
//! 执行单条原语命令（up/down/left/right/fire/zero/pause/led 及别名）。

use anyhow::Result;
use clap::Args;
use retaliation_driver::{Command, LauncherConfig, Outcome};

use crate::session;

/// 单条命令参数
#[derive(Args, Debug)]
pub struct ExecCommand {
    /// 命令名：up, down, left, right（毫秒）, fire（1-4 发）, zero, pause（毫秒）, led（1/0）
    pub command: String,

    /// 命令数值
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub value: i64,
}

impl ExecCommand {
    pub fn execute(&self, config: &LauncherConfig) -> Result<()> {
        // 先翻译：未知命令不需要打开设备
        let command = Command::parse(&self.command, self.value)?;
        println!("▶ {}", command);

        let mut interpreter = session::open_interpreter(config)?;
        match interpreter.execute(&command)? {
            Outcome::Completed => println!("  ✅ 完成"),
            Outcome::LedUnsupported { variant } => {
                println!("  ⚠️  {} 设备没有 LED", variant)
            },
        }
        Ok(())
    }
}
