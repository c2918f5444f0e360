//! # Retaliation USB Transport
//!
//! USB 传输层：发现并打开导弹发射器，识别协议变体，执行阻塞式控制传输。
//!
//! 上层通过 [`LauncherTransport`] trait 使用统一接口；测试使用 `mock` feature
//! 提供的 [`mock::MockLauncher`] 录制传输序列。

pub mod device;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use device::{LauncherInfo, UsbLauncher, select_launcher};
pub use error::UsbError;

// 重新导出 rusb（错误类型出现在公共 API 中）
pub use rusb;

// 重新导出协议层常用类型
pub use retaliation_protocol::{ControlRequest, DeviceVariant, Report};

/// 发射器传输抽象
///
/// 一个实例对应一个已打开、已绑定变体的设备。`send_raw` 是阻塞调用，
/// 失败时直接返回错误：物理动作不可安全重试（重试可能导致重复移动或重复发射）。
pub trait LauncherTransport {
    /// 发现阶段绑定的变体（不可变）
    fn variant(&self) -> DeviceVariant;

    /// 发送一个报文到控制端点
    fn send_raw(&mut self, report: &Report) -> Result<(), UsbError>;
}

impl<T: LauncherTransport + ?Sized> LauncherTransport for &mut T {
    fn variant(&self) -> DeviceVariant {
        (**self).variant()
    }

    fn send_raw(&mut self, report: &Report) -> Result<(), UsbError> {
        (**self).send_raw(report)
    }
}

impl<T: LauncherTransport + ?Sized> LauncherTransport for Box<T> {
    fn variant(&self) -> DeviceVariant {
        (**self).variant()
    }

    fn send_raw(&mut self, report: &Report) -> Result<(), UsbError> {
        (**self).send_raw(report)
    }
}
