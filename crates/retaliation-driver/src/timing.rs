//! 定时模型
//!
//! 所有时序都是对调用线程的同步挂起。`Sleeper` 是唯一的注入点，
//! 测试用它录制挂起而不真正等待。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 线程挂起
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// 默认实现：`spin_sleep`（原生 sleep + 末段自旋，精度优于 `std::thread::sleep`）
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        spin_sleep::sleep(duration);
    }
}

impl<F: FnMut(Duration)> Sleeper for F {
    fn sleep(&mut self, duration: Duration) {
        self(duration)
    }
}

/// 解释器时序参数（毫秒）
///
/// 默认值针对 Thunder 的机械行程标定：归零时长必须超过两个轴的全行程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// 归零时向下移动时长
    pub zero_down_ms: u64,
    /// 归零时向左移动时长
    pub zero_left_ms: u64,
    /// 射击前等待平台稳定
    pub fire_settle_ms: u64,
    /// 每发之后的装填时间（包括最后一发）
    pub reload_ms: u64,
    /// 瞄准序列的过冲补偿（吸收齿轮间隙）
    pub settle_overshoot_ms: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            zero_down_ms: 2000,
            zero_left_ms: 8000,
            fire_settle_ms: 500,
            reload_ms: 4500,
            settle_overshoot_ms: 100,
        }
    }
}
