//! sets 命令
//!
//! 列出已配置的命令集（不需要设备）。

use anyhow::Result;
use clap::Args;
use retaliation_driver::LauncherConfig;

/// 列表参数
#[derive(Args, Debug)]
pub struct SetsCommand {
    /// 只输出名称
    #[arg(short, long)]
    pub names_only: bool,
}

impl SetsCommand {
    pub fn execute(&self, config: &LauncherConfig) -> Result<()> {
        if config.command_sets.is_empty() {
            println!("(未配置命令集)");
            return Ok(());
        }

        for (name, steps) in config.command_sets.iter() {
            if self.names_only {
                println!("{}", name);
                continue;
            }
            let steps: Vec<String> = steps.iter().map(ToString::to_string).collect();
            println!("{}: {}", name, steps.join(", "));
        }
        Ok(())
    }
}
