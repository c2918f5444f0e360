//! 集成测试共享工具
//!
//! 基于 `MockLauncher` 的事件日志，把传输与挂起还原为可比较的高层事件。

#![allow(dead_code)]

use std::time::Duration;

use retaliation_driver::{Interpreter, InterpreterConfig, Sequencer};
use retaliation_usb::mock::{MockEvent, MockLauncher};

/// 高层事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Send(Vec<u8>),
    Sleep(u64),
}

pub fn thunder(action: u8) -> Step {
    Step::Send(vec![0x02, action, 0, 0, 0, 0, 0, 0])
}

pub fn original(action: u8) -> Step {
    Step::Send(vec![action])
}

pub const DOWN: u8 = 0x01;
pub const UP: u8 = 0x02;
pub const LEFT: u8 = 0x04;
pub const RIGHT: u8 = 0x08;
pub const FIRE: u8 = 0x10;
pub const STOP: u8 = 0x20;

/// 构造使用录制挂起的序列器
pub fn sequencer(launcher: MockLauncher) -> Sequencer<MockLauncher, impl FnMut(Duration) + use<>> {
    let sleeper = launcher.sleep_recorder();
    let interpreter = Interpreter::with_sleeper(launcher, sleeper, InterpreterConfig::default())
        .expect("mock launcher has a known variant");
    Sequencer::new(interpreter)
}

/// 读取序列器的高层事件
pub fn steps<S>(sequencer: &Sequencer<MockLauncher, S>) -> Vec<Step>
where
    S: retaliation_driver::Sleeper,
{
    sequencer
        .interpreter()
        .transport()
        .events()
        .into_iter()
        .map(|event| match event {
            MockEvent::Transfer { payload, .. } => Step::Send(payload),
            MockEvent::Sleep(duration) => Step::Sleep(duration.as_millis() as u64),
        })
        .collect()
}

/// Thunder 的定时移动事件
pub fn thunder_move(action: u8, ms: u64) -> Vec<Step> {
    vec![thunder(action), Step::Sleep(ms), thunder(STOP)]
}

/// Thunder 的归零事件
pub fn thunder_zero() -> Vec<Step> {
    let mut steps = thunder_move(DOWN, 2000);
    steps.extend(thunder_move(LEFT, 8000));
    steps
}

/// Thunder 的 n 发射击事件
pub fn thunder_fire(shots: usize) -> Vec<Step> {
    let mut steps = vec![Step::Sleep(500)];
    for _ in 0..shots {
        steps.push(thunder(FIRE));
        steps.push(Step::Sleep(4500));
    }
    steps
}
