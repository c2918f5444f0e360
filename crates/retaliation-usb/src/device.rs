//! 发射器设备操作
//!
//! 提供 USB 设备扫描、变体识别、配置和控制传输。

use rusb::{Device, DeviceHandle, GlobalContext};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::LauncherTransport;
use crate::error::UsbError;
use retaliation_protocol::{ControlRequest, DeviceVariant, ProtocolError, Report};

/// 控制传输超时
const CONTROL_TIMEOUT: Duration = Duration::from_millis(1000);

/// 发射器唯一的 HID 接口
const INTERFACE_NUMBER: u8 = 0;

/// 扫描得到的设备信息（不占用设备句柄）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherInfo {
    pub bus_number: u8,
    pub address: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub variant: DeviceVariant,
}

/// 按探测优先级选择设备
///
/// 先在所有设备中查找 Thunder 标识符，找不到再查找 Original 标识符；
/// 同一标识符有多个设备时取第一个。
pub fn select_launcher(infos: &[LauncherInfo]) -> Option<&LauncherInfo> {
    DeviceVariant::PROBE_ORDER.iter().find_map(|(vid, pid, _)| {
        infos
            .iter()
            .find(|info| info.vendor_id == *vid && info.product_id == *pid)
    })
}

/// 已尝试的标识符（用于错误信息）
fn tried_ids() -> String {
    DeviceVariant::PROBE_ORDER
        .iter()
        .map(|(vid, pid, _)| format!("{:04x}:{:04x}", vid, pid))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 发射器设备句柄
///
/// 在进程生命周期内独占设备；从不显式关闭，由 Drop 释放。
pub struct UsbLauncher {
    handle: DeviceHandle<GlobalContext>,
    variant: DeviceVariant,
    request: ControlRequest,
}

impl UsbLauncher {
    /// 扫描所有已知的发射器（只读取描述符，不打开设备）
    fn scan() -> Result<Vec<(Device<GlobalContext>, LauncherInfo)>, UsbError> {
        let mut found = Vec::new();

        for device in rusb::devices()?.iter() {
            let desc = match device.device_descriptor() {
                Ok(desc) => desc,
                Err(_) => continue,
            };

            let variant = DeviceVariant::from_ids(desc.vendor_id(), desc.product_id());
            if variant == DeviceVariant::Unknown {
                continue;
            }

            let info = LauncherInfo {
                bus_number: device.bus_number(),
                address: device.address(),
                vendor_id: desc.vendor_id(),
                product_id: desc.product_id(),
                variant,
            };
            trace!("Found launcher candidate: {:?}", info);
            found.push((device, info));
        }

        Ok(found)
    }

    /// 发现并打开发射器
    ///
    /// 1. 先找 Thunder (0x2123:0x1010)，再找 Original (0x0a81:0x0701)
    /// 2. Linux 上尝试卸载内核 HID 驱动（失败忽略，可能已卸载）
    /// 3. 激活设备唯一的配置
    ///
    /// # 错误
    /// - `UsbError::DeviceNotFound`: 两个标识符都未匹配
    /// - `UsbError::Usb`: 打开或配置设备失败（如权限不足）
    pub fn discover() -> Result<Self, UsbError> {
        let candidates = Self::scan()?;
        let infos: Vec<LauncherInfo> = candidates.iter().map(|(_, info)| *info).collect();

        let selected = select_launcher(&infos).copied().ok_or_else(|| UsbError::DeviceNotFound {
            tried: tried_ids(),
        })?;

        if infos.len() > 1 {
            warn!(
                "{} launchers attached, using {:04x}:{:04x} on bus {} address {}",
                infos.len(),
                selected.vendor_id,
                selected.product_id,
                selected.bus_number,
                selected.address
            );
        }

        let device = candidates
            .into_iter()
            .map(|(device, _)| device)
            .find(|device| {
                device.bus_number() == selected.bus_number && device.address() == selected.address
            })
            .ok_or_else(|| UsbError::DeviceNotFound {
                tried: tried_ids(),
            })?;

        let handle = device.open()?;
        Self::claim(&handle);

        let config = device.config_descriptor(0)?;
        debug!("Activating configuration {}", config.number());
        handle.set_active_configuration(config.number())?;

        let launcher = Self::with_handle(handle, selected.variant)?;
        info!(
            "Opened {} launcher ({:04x}:{:04x})",
            launcher.variant, selected.vendor_id, selected.product_id
        );
        Ok(launcher)
    }

    /// 从已打开的句柄构造（变体必须已知）
    pub fn with_handle(
        handle: DeviceHandle<GlobalContext>,
        variant: DeviceVariant,
    ) -> Result<Self, UsbError> {
        let request = variant
            .control_request()
            .ok_or(ProtocolError::UnsupportedVariant { variant })?;
        Ok(Self {
            handle,
            variant,
            request,
        })
    }

    /// 卸载内核驱动（尽力而为）
    #[cfg(target_os = "linux")]
    fn claim(handle: &DeviceHandle<GlobalContext>) {
        match handle.detach_kernel_driver(INTERFACE_NUMBER) {
            Ok(()) => debug!("Detached kernel driver from interface {}", INTERFACE_NUMBER),
            Err(e) => debug!("Kernel driver detach skipped (may be normal): {}", e),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn claim(_handle: &DeviceHandle<GlobalContext>) {
        trace!("No kernel driver detach on this platform");
    }
}

impl LauncherTransport for UsbLauncher {
    fn variant(&self) -> DeviceVariant {
        self.variant
    }

    fn send_raw(&mut self, report: &Report) -> Result<(), UsbError> {
        let req = self.request;
        trace!(
            "ctrl_transfer(0x{:02x}, 0x{:02x}, 0x{:04x}, {}) <- {:02x?}",
            req.request_type,
            req.request,
            req.value,
            req.index,
            report.as_bytes()
        );

        let written = self
            .handle
            .write_control(
                req.request_type,
                req.request,
                req.value,
                req.index,
                report.as_bytes(),
                CONTROL_TIMEOUT,
            )
            .map_err(UsbError::Transfer)?;

        if written < report.len() {
            return Err(UsbError::ShortWrite {
                expected: report.len(),
                actual: written,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(vendor_id: u16, product_id: u16, address: u8) -> LauncherInfo {
        LauncherInfo {
            bus_number: 1,
            address,
            vendor_id,
            product_id,
            variant: DeviceVariant::from_ids(vendor_id, product_id),
        }
    }

    #[test]
    fn test_select_prefers_thunder() {
        // Original 排在前面，但 Thunder 优先
        let infos = [info(0x0A81, 0x0701, 3), info(0x2123, 0x1010, 7)];
        let selected = select_launcher(&infos).unwrap();
        assert_eq!(selected.variant, DeviceVariant::Thunder);
        assert_eq!(selected.address, 7);
    }

    #[test]
    fn test_select_falls_back_to_original() {
        let infos = [info(0x0A81, 0x0701, 4)];
        let selected = select_launcher(&infos).unwrap();
        assert_eq!(selected.variant, DeviceVariant::Original);
    }

    #[test]
    fn test_select_first_of_same_kind() {
        let infos = [info(0x2123, 0x1010, 2), info(0x2123, 0x1010, 9)];
        assert_eq!(select_launcher(&infos).unwrap().address, 2);
    }

    #[test]
    fn test_select_none() {
        assert!(select_launcher(&[]).is_none());
        let infos = [info(0x1D50, 0x606F, 1)];
        assert!(select_launcher(&infos).is_none());
    }

    #[test]
    fn test_tried_ids() {
        assert_eq!(tried_ids(), "2123:1010, 0a81:0701");
    }

    // 注意：discover() 和实际 USB 传输的测试需要硬件
}
