//! # Retaliation CLI
//!
//! 导弹发射器命令行工具。
//!
//! ```bash
//! # 瞄准 (yaw, pitch) 并发射一发，结束后归零
//! retaliation 3000 400
//! retaliation aim 3000 400
//!
//! # 执行单条原语命令
//! retaliation exec right 500
//! retaliation exec fire 2
//!
//! # 回放命名命令集
//! retaliation run chris
//!
//! # 列出已配置的命令集（不需要设备）
//! retaliation sets
//! ```

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;

use commands::{AimCommand, ExecCommand, RunCommand, SetsCommand};

/// Retaliation - USB 导弹发射器命令行工具
#[derive(Parser, Debug)]
#[command(name = "retaliation")]
#[command(about = "Aim and fire a Dream Cheeky USB missile launcher", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// 配置文件路径（默认 <config_dir>/retaliation/config.toml）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志（设置 RUST_LOG 时以 RUST_LOG 为准）
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 水平偏移（毫秒），与 pitch 一起等同于 `aim <YAW> <PITCH>`
    #[arg(requires = "pitch", allow_negative_numbers = true)]
    yaw: Option<i64>,

    /// 垂直偏移（毫秒）
    #[arg(allow_negative_numbers = true)]
    pitch: Option<i64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 瞄准 (yaw, pitch) 并发射一发
    Aim {
        #[command(flatten)]
        args: AimCommand,
    },

    /// 执行单条原语命令
    Exec {
        #[command(flatten)]
        args: ExecCommand,
    },

    /// 回放命名命令集
    Run {
        #[command(flatten)]
        args: RunCommand,
    },

    /// 列出已配置的命令集
    Sets {
        #[command(flatten)]
        args: SetsCommand,
    },
}

impl Cli {
    /// 解析出要执行的命令；两个裸数字等同于 `aim`
    fn into_command(self) -> Option<Commands> {
        match (self.command, self.yaw, self.pitch) {
            (Some(command), _, _) => Some(command),
            (None, Some(yaw), Some(pitch)) => Some(Commands::Aim {
                args: AimCommand { yaw, pitch },
            }),
            _ => None,
        }
    }
}

/// 默认日志过滤器（仅在未设置 RUST_LOG 时使用）
fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    ["retaliation", "retaliation_driver", "retaliation_usb"]
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone();
    let Some(command) = cli.into_command() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "expected <YAW> <PITCH> or a subcommand",
            )
            .exit();
    };

    let config = config::load(config_path.as_deref())?;

    let result = match command {
        Commands::Aim { args } => args.execute(&config),
        Commands::Exec { args } => args.execute(&config),
        Commands::Run { args } => args.execute(&config),
        Commands::Sets { args } => args.execute(&config),
    };

    if let Err(e) = &result
        && let Some(hint) = session::device_hint(e)
    {
        eprintln!("💡 {}", hint);
    }
    result
}
