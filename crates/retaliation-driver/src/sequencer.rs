//! 序列器
//!
//! 严格按输入顺序同步执行命令序列，不重排、不合并、不并行：
//! 顺序本身有语义（换向前必须先停止，射击前必须先稳定）。
//!
//! 两种序列来源：
//! 1. 配置中的命名命令集，按名称查找后原样回放
//! 2. 由 (yaw, pitch) 临时合成的瞄准序列

use tracing::{debug, info, warn};

use retaliation_usb::LauncherTransport;

use crate::command::{Command, RawCommand};
use crate::config::CommandSets;
use crate::error::DriverError;
use crate::interpreter::{Interpreter, Outcome};
use crate::timing::{Sleeper, ThreadSleeper};

/// 被跳过的未知命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCommand {
    /// 序列中的位置
    pub index: usize,
    pub name: String,
    pub value: i64,
}

/// 序列执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceReport {
    /// 已执行的命令（按顺序）
    pub executed: Vec<Command>,
    /// 跳过的未知命令
    pub skipped: Vec<SkippedCommand>,
    /// 非 `Completed` 的执行结果（如无 LED）
    pub notices: Vec<(usize, Outcome)>,
}

impl SequenceReport {
    /// 序列是否完全按预期执行（无跳过）
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// 合成瞄准序列
///
/// 从零位出发：右移 `yaw + overshoot` 再左移 `overshoot`，上移 `pitch + overshoot`
/// 再下移 `overshoot`（过冲回摆吸收齿轮间隙），射击一发，最后归零。
pub fn targeting_sequence(yaw: i64, pitch: i64, overshoot_ms: u64) -> Vec<Command> {
    let overshoot = overshoot_ms as i64;
    let duration = |ms: i64| ms.max(0) as u64;
    vec![
        Command::Zero,
        Command::Right(duration(yaw.saturating_add(overshoot))),
        Command::Left(overshoot_ms),
        Command::Up(duration(pitch.saturating_add(overshoot))),
        Command::Down(overshoot_ms),
        Command::fire(1),
        Command::Zero,
    ]
}

/// 序列器
pub struct Sequencer<T: LauncherTransport, S: Sleeper = ThreadSleeper> {
    interpreter: Interpreter<T, S>,
    command_sets: CommandSets,
}

impl<T: LauncherTransport, S: Sleeper> Sequencer<T, S> {
    pub fn new(interpreter: Interpreter<T, S>) -> Self {
        Self {
            interpreter,
            command_sets: CommandSets::default(),
        }
    }

    /// 设置命名命令集
    pub fn with_command_sets(mut self, command_sets: CommandSets) -> Self {
        self.command_sets = command_sets;
        self
    }

    pub fn command_sets(&self) -> &CommandSets {
        &self.command_sets
    }

    pub fn interpreter(&self) -> &Interpreter<T, S> {
        &self.interpreter
    }

    /// 执行已翻译的命令序列
    ///
    /// # 错误
    /// 任一命令传输失败时立即返回 `DriverError::SequenceAborted`，剩余命令不再执行。
    pub fn run(&mut self, commands: &[Command]) -> Result<SequenceReport, DriverError> {
        let mut report = SequenceReport::default();
        for (index, command) in commands.iter().enumerate() {
            Self::step(&mut self.interpreter, &mut report, index, command)?;
        }
        Ok(report)
    }

    /// 执行未翻译的命令序列（配置中的形式）
    ///
    /// 未知命令名记录到报告中并跳过，其余命令继续执行。
    pub fn run_raw(&mut self, steps: &[RawCommand]) -> Result<SequenceReport, DriverError> {
        Self::replay(&mut self.interpreter, steps)
    }

    /// 按名称回放命令集
    ///
    /// # 错误
    /// - `DriverError::UnknownCommandSet`: 名称未配置（不执行任何命令）
    /// - `DriverError::SequenceAborted`: 执行中传输失败
    pub fn run_set(&mut self, name: &str) -> Result<SequenceReport, DriverError> {
        let steps = self
            .command_sets
            .get(name)
            .ok_or_else(|| DriverError::UnknownCommandSet {
                name: name.to_string(),
            })?;
        info!("Running command set '{}' ({} steps)", name, steps.len());
        Self::replay(&mut self.interpreter, steps)
    }

    /// 瞄准 (yaw, pitch) 并射击一发，结束后归零
    pub fn aim_and_fire(&mut self, yaw: i64, pitch: i64) -> Result<SequenceReport, DriverError> {
        let overshoot = self.interpreter.config().settle_overshoot_ms;
        let commands = targeting_sequence(yaw, pitch, overshoot);
        info!("Targeting yaw={} pitch={}", yaw, pitch);
        self.run(&commands)
    }

    fn replay(
        interpreter: &mut Interpreter<T, S>,
        steps: &[RawCommand],
    ) -> Result<SequenceReport, DriverError> {
        let mut report = SequenceReport::default();
        for (index, raw) in steps.iter().enumerate() {
            match raw.parse() {
                Ok(command) => Self::step(interpreter, &mut report, index, &command)?,
                Err(e) if e.is_recoverable() => {
                    warn!("Error: {} (step {}), skipping", e, index);
                    report.skipped.push(SkippedCommand {
                        index,
                        name: raw.command.clone(),
                        value: raw.value,
                    });
                },
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    fn step(
        interpreter: &mut Interpreter<T, S>,
        report: &mut SequenceReport,
        index: usize,
        command: &Command,
    ) -> Result<(), DriverError> {
        debug!("Step {}: {}", index, command);
        match interpreter.execute(command) {
            Ok(Outcome::Completed) => {},
            Ok(outcome) => report.notices.push((index, outcome)),
            Err(e) => {
                return Err(DriverError::SequenceAborted {
                    index,
                    source: Box::new(e),
                });
            },
        }
        report.executed.push(*command);
        Ok(())
    }
}
