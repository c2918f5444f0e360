//! 设备会话
//!
//! One-shot 流程：发现设备 -> 构造序列器 -> 执行 -> 进程退出时释放设备。

use anyhow::{Context, Result};
use retaliation_driver::{
    Interpreter, LauncherConfig, SequenceReport, Sequencer, ThreadSleeper, UsbLauncher,
};
use retaliation_usb::{UsbError, rusb};
use tracing::info;

/// 打开设备并构造解释器
pub fn open_interpreter(config: &LauncherConfig) -> Result<Interpreter<UsbLauncher>> {
    let launcher = UsbLauncher::discover().context("无法打开导弹发射器")?;
    let interpreter = Interpreter::with_sleeper(launcher, ThreadSleeper, config.timing)?;
    info!("Launcher ready ({})", interpreter.variant());
    Ok(interpreter)
}

/// 打开设备并构造序列器
pub fn open(config: &LauncherConfig) -> Result<Sequencer<UsbLauncher>> {
    let interpreter = open_interpreter(config)?;
    Ok(Sequencer::new(interpreter).with_command_sets(config.command_sets.clone()))
}

/// 设备级致命错误的处理建议
///
/// 沿错误链查找 `UsbError`；非致命错误（STALL、短写等）没有建议。
pub fn device_hint(err: &anyhow::Error) -> Option<&'static str> {
    let usb = err.chain().find_map(|e| e.downcast_ref::<UsbError>())?;
    if !usb.is_fatal() {
        return None;
    }
    Some(match usb {
        UsbError::DeviceNotFound { .. } => "请确认发射器已插入（lsusb 应列出 2123:1010 或 0a81:0701）",
        UsbError::Usb(rusb::Error::Access) | UsbError::Transfer(rusb::Error::Access) => {
            "没有访问 USB 设备的权限，请配置 udev 规则或使用 root 运行"
        },
        _ => "发射器已断开连接，请重新插入后再试",
    })
}

/// 打印序列执行结果
pub fn print_report(report: &SequenceReport) {
    println!("📊 执行结果:");
    println!("  已执行: {}", report.executed.len());
    if !report.notices.is_empty() {
        println!("  提示: {}", report.notices.len());
        for (index, outcome) in &report.notices {
            println!("    命令 {}: {:?}", index + 1, outcome);
        }
    }
    if !report.skipped.is_empty() {
        println!("  ❌ 跳过的未知命令: {}", report.skipped.len());
        for skipped in &report.skipped {
            println!(
                "    命令 {}: {}({})",
                skipped.index + 1,
                skipped.name,
                skipped.value
            );
        }
    }
}
