//! 协议常量定义

use num_enum::{IntoPrimitive, TryFromPrimitive};

// ============================================================================
// USB Identifiers
// ============================================================================

/// Dream Cheeky Thunder（优先探测）
pub const THUNDER_VENDOR_ID: u16 = 0x2123;
pub const THUNDER_PRODUCT_ID: u16 = 0x1010;

/// 初代 USB 导弹发射器（备用探测）
pub const ORIGINAL_VENDOR_ID: u16 = 0x0A81;
pub const ORIGINAL_PRODUCT_ID: u16 = 0x0701;

// ============================================================================
// Control Request
// ============================================================================

/// Host-to-device | Class | Interface
pub const REQUEST_TYPE_CLASS_OUT: u8 = 0x21;
/// HID SET_REPORT
pub const REQUEST_SET_REPORT: u8 = 0x09;
/// Thunder 使用 wValue = 0
pub const THUNDER_REQUEST_VALUE: u16 = 0x0000;
/// Original 使用 wValue = 0x0200（Output report）
pub const ORIGINAL_REQUEST_VALUE: u16 = 0x0200;

// ============================================================================
// Report Layout
// ============================================================================

/// Thunder 报文长度
pub const THUNDER_REPORT_LEN: usize = 8;
/// Original 报文长度
pub const ORIGINAL_REPORT_LEN: usize = 1;

/// Thunder 报文类型前缀：移动/发射/停止
pub const THUNDER_PREFIX_ACTION: u8 = 0x02;
/// Thunder 报文类型前缀：LED
pub const THUNDER_PREFIX_LED: u8 = 0x03;

/// LED 状态
pub const LED_OFF: u8 = 0x00;
pub const LED_ON: u8 = 0x01;

// ============================================================================
// Action Codes
// ============================================================================

/// 动作码
///
/// 每个动作占一个独立的 bit，本实现每次只发送一个，从不组合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Action {
    Down = 0x01,
    Up = 0x02,
    Left = 0x04,
    Right = 0x08,
    Fire = 0x10,
    Stop = 0x20,
}

impl Action {
    /// 协议字节
    #[inline]
    pub fn code(self) -> u8 {
        self.into()
    }
}
