//! USB 传输层错误类型

use retaliation_protocol::ProtocolError;
use thiserror::Error;

/// USB 传输层错误类型
#[derive(Error, Debug)]
pub enum UsbError {
    /// 所有已知 VID/PID 均未匹配
    #[error("Missile launcher not found (tried {tried})")]
    DeviceNotFound { tried: String },

    /// USB 错误（枚举/打开/配置阶段，来自 rusb）
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    /// 控制传输失败（拔出、权限、STALL）
    #[error("Control transfer failed: {0}")]
    Transfer(rusb::Error),

    /// 设备接收的字节数少于报文长度
    #[error("Short control write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    /// 协议层错误
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl UsbError {
    /// 检查是否为设备级致命错误（设备不存在或无权限）
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            UsbError::DeviceNotFound { .. }
                | UsbError::Usb(rusb::Error::NoDevice)
                | UsbError::Usb(rusb::Error::Access)
                | UsbError::Transfer(rusb::Error::NoDevice)
                | UsbError::Transfer(rusb::Error::Access)
        )
    }
}
