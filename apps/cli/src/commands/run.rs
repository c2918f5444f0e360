//! run 命令
//!
//! 按名称回放配置中的命令集。

use anyhow::Result;
use clap::Args;
use retaliation_driver::{DriverError, LauncherConfig};

use crate::session;

/// 命令集回放参数
#[derive(Args, Debug)]
pub struct RunCommand {
    /// 命令集名称
    pub name: String,
}

impl RunCommand {
    pub fn execute(&self, config: &LauncherConfig) -> Result<()> {
        let Some(steps) = config.command_sets.get(&self.name) else {
            return Err(DriverError::UnknownCommandSet {
                name: self.name.clone(),
            }
            .into());
        };

        println!("📜 命令集: {}", self.name);
        println!("    {} 个命令", steps.len());

        let mut sequencer = session::open(config)?;
        let report = sequencer.run_set(&self.name)?;
        session::print_report(&report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_set_fails_before_discovery() {
        let cmd = RunCommand {
            name: "nobody".to_string(),
        };
        let err = cmd.execute(&LauncherConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown command set"));
    }
}
