//! aim 命令
//!
//! 从零位出发瞄准 (yaw, pitch)，发射一发后归零。

use anyhow::Result;
use clap::Args;
use retaliation_driver::{LauncherConfig, targeting_sequence};

use crate::session;

/// 瞄准命令参数
#[derive(Args, Debug)]
pub struct AimCommand {
    /// 水平偏移（毫秒，相对零位向右）
    #[arg(allow_negative_numbers = true)]
    pub yaw: i64,

    /// 垂直偏移（毫秒，相对零位向上）
    #[arg(allow_negative_numbers = true)]
    pub pitch: i64,
}

impl AimCommand {
    pub fn execute(&self, config: &LauncherConfig) -> Result<()> {
        println!("🎯 瞄准: yaw = {} ms, pitch = {} ms", self.yaw, self.pitch);
        println!("    {}", self.plan(config));

        let mut sequencer = session::open(config)?;
        let report = sequencer.aim_and_fire(self.yaw, self.pitch)?;
        session::print_report(&report);
        Ok(())
    }

    /// 将要执行的命令序列（一行）
    fn plan(&self, config: &LauncherConfig) -> String {
        targeting_sequence(self.yaw, self.pitch, config.timing.settle_overshoot_ms)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_uses_configured_overshoot() {
        let cmd = AimCommand {
            yaw: 3000,
            pitch: 400,
        };
        assert_eq!(
            cmd.plan(&LauncherConfig::default()),
            "zero → right(3100) → left(100) → up(500) → down(100) → fire(1) → zero"
        );

        let mut config = LauncherConfig::default();
        config.timing.settle_overshoot_ms = 250;
        assert_eq!(
            cmd.plan(&config),
            "zero → right(3250) → left(250) → up(650) → down(250) → fire(1) → zero"
        );
    }

    #[test]
    fn test_plan_negative_offsets_saturate() {
        let cmd = AimCommand {
            yaw: -500,
            pitch: -150,
        };
        assert_eq!(
            cmd.plan(&LauncherConfig::default()),
            "zero → right(0) → left(100) → up(0) → down(100) → fire(1) → zero"
        );
    }
}
