//! 命令解释器
//!
//! 执行单条原语命令：定时移动、归零、暂停、多发射击、LED。
//! 任何传输错误都会立即返回，调用方（序列器）据此中止整个序列。

use std::time::Duration;

use retaliation_protocol::{Action, CommandProtocol, DeviceVariant, Report};
use retaliation_usb::LauncherTransport;
use tracing::{debug, info, trace};

use crate::command::Command;
use crate::error::DriverError;
use crate::timing::{InterpreterConfig, Sleeper, ThreadSleeper};

/// 单条命令的执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 正常完成
    Completed,
    /// 设备没有 LED，命令未发送任何传输
    LedUnsupported { variant: DeviceVariant },
}

/// 命令解释器
///
/// 持有设备会话（传输 + 绑定变体的协议），独占写入设备。
pub struct Interpreter<T: LauncherTransport, S: Sleeper = ThreadSleeper> {
    transport: T,
    protocol: CommandProtocol,
    sleeper: S,
    config: InterpreterConfig,
}

impl<T: LauncherTransport> Interpreter<T> {
    /// 使用默认时序和真实挂起
    ///
    /// # 错误
    /// 传输层绑定的变体为 `Unknown` 时返回 `DriverError::Protocol`。
    pub fn new(transport: T) -> Result<Self, DriverError> {
        Self::with_sleeper(transport, ThreadSleeper, InterpreterConfig::default())
    }
}

impl<T: LauncherTransport, S: Sleeper> Interpreter<T, S> {
    /// 自定义挂起实现和时序参数
    pub fn with_sleeper(
        transport: T,
        sleeper: S,
        config: InterpreterConfig,
    ) -> Result<Self, DriverError> {
        let protocol = CommandProtocol::new(transport.variant())?;
        Ok(Self {
            transport,
            protocol,
            sleeper,
            config,
        })
    }

    pub fn variant(&self) -> DeviceVariant {
        self.protocol.variant()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 按名称执行（配置/命令行入口）
    ///
    /// # 错误
    /// - `DriverError::UnknownCommand`: 名称不在词汇表中（未执行任何 I/O）
    /// - `DriverError::Transport`: 控制传输失败
    pub fn execute_named(&mut self, name: &str, value: i64) -> Result<Outcome, DriverError> {
        let command = Command::parse(name, value)?;
        self.execute(&command)
    }

    /// 执行一条命令
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, DriverError> {
        debug!("Executing {}", command);

        match *command {
            Command::Up(ms) => self.send_move(command, Action::Up, ms)?,
            Command::Down(ms) => self.send_move(command, Action::Down, ms)?,
            Command::Left(ms) => self.send_move(command, Action::Left, ms)?,
            Command::Right(ms) => self.send_move(command, Action::Right, ms)?,

            Command::Zero => {
                // 超过两轴全行程，保证停在左下角极限位置
                let (down_ms, left_ms) = (self.config.zero_down_ms, self.config.zero_left_ms);
                self.send_move(command, Action::Down, down_ms)?;
                self.send_move(command, Action::Left, left_ms)?;
            },

            Command::Pause(ms) => self.suspend(ms),

            Command::Fire(count) => {
                self.suspend(self.config.fire_settle_ms);
                for shot in 1..=count.get() {
                    trace!("Firing shot {}/{}", shot, count.get());
                    self.send_action(command, Action::Fire)?;
                    self.suspend(self.config.reload_ms);
                }
            },

            Command::Led(on) => match self.protocol.encode_led(on) {
                Some(report) => self.send(command, &report)?,
                None => {
                    info!("There is no LED on this device ({})", self.variant());
                    return Ok(Outcome::LedUnsupported {
                        variant: self.variant(),
                    });
                },
            },
        }

        Ok(Outcome::Completed)
    }

    /// 动作 -> 挂起 -> 停止
    fn send_move(&mut self, command: &Command, action: Action, ms: u64) -> Result<(), DriverError> {
        self.send_action(command, action)?;
        self.suspend(ms);
        self.send_action(command, Action::Stop)
    }

    fn send_action(&mut self, command: &Command, action: Action) -> Result<(), DriverError> {
        let report = self.protocol.encode_action(action);
        self.send(command, &report)
    }

    fn send(&mut self, command: &Command, report: &Report) -> Result<(), DriverError> {
        self.transport
            .send_raw(report)
            .map_err(|source| DriverError::Transport {
                command: *command,
                source,
            })
    }

    fn suspend(&mut self, ms: u64) {
        trace!("Suspending {} ms", ms);
        self.sleeper.sleep(Duration::from_millis(ms));
    }
}
