//! # Retaliation Protocol
//!
//! 导弹发射器 USB 控制传输协议定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `constants`: 动作码、USB 标识符、控制请求参数
//! - `variant`: 硬件协议变体（Thunder / Original）
//! - `report`: 报文编码
//!
//! ## 报文格式
//!
//! ```text
//! Thunder : bmRequestType=0x21 bRequest=0x09 wValue=0x0000 wIndex=0
//!           [0x02, action, 0, 0, 0, 0, 0, 0]   动作（移动/发射/停止）
//!           [0x03, state,  0, 0, 0, 0, 0, 0]   LED
//! Original: bmRequestType=0x21 bRequest=0x09 wValue=0x0200 wIndex=0
//!           [action]                           无 LED
//! ```

pub mod constants;
pub mod report;
pub mod variant;

pub use constants::*;
pub use report::{CommandProtocol, Report};
pub use variant::{ControlRequest, DeviceVariant};

use thiserror::Error;

/// 协议编码错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// 变体未绑定（未知设备无法编码任何报文）
    #[error("Unsupported device variant: {variant}")]
    UnsupportedVariant { variant: DeviceVariant },
}
