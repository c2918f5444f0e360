//! 报文编码
//!
//! 纯编码层：给定绑定的变体，把逻辑动作编码为控制传输的数据阶段字节。

use crate::constants::*;
use crate::variant::DeviceVariant;
use crate::ProtocolError;

/// 控制传输数据阶段（最长 8 字节，栈上固定数组）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    data: [u8; THUNDER_REPORT_LEN],
    len: u8,
}

impl Report {
    fn new(data: &[u8]) -> Self {
        let mut fixed = [0u8; THUNDER_REPORT_LEN];
        let len = data.len().min(THUNDER_REPORT_LEN);
        fixed[..len].copy_from_slice(&data[..len]);
        Self {
            data: fixed,
            len: len as u8,
        }
    }

    /// 有效字节
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// 有效长度
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// 命令协议（无状态，仅依赖绑定的变体）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandProtocol {
    variant: DeviceVariant,
}

impl CommandProtocol {
    /// 绑定变体
    ///
    /// `Unknown` 无法编码任何报文，直接拒绝。
    pub fn new(variant: DeviceVariant) -> Result<Self, ProtocolError> {
        match variant {
            DeviceVariant::Unknown => Err(ProtocolError::UnsupportedVariant { variant }),
            _ => Ok(Self { variant }),
        }
    }

    pub fn variant(&self) -> DeviceVariant {
        self.variant
    }

    /// 编码移动/发射/停止动作
    pub fn encode_action(&self, action: Action) -> Report {
        match self.variant {
            DeviceVariant::Thunder => {
                Report::new(&[THUNDER_PREFIX_ACTION, action.code(), 0, 0, 0, 0, 0, 0])
            },
            // new() 保证不会出现 Unknown
            _ => Report::new(&[action.code()]),
        }
    }

    /// 编码 LED 开关
    ///
    /// Original 没有 LED，返回 `None`，由调用方负责告知用户。
    pub fn encode_led(&self, on: bool) -> Option<Report> {
        if !self.variant.has_led() {
            return None;
        }
        let state = if on { LED_ON } else { LED_OFF };
        Some(Report::new(&[THUNDER_PREFIX_LED, state, 0, 0, 0, 0, 0, 0]))
    }
}
