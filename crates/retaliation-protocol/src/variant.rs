//! 硬件协议变体

use crate::constants::*;
use std::fmt;

/// 设备协议变体
///
/// 在设备发现时确定一次，之后不可变。`Unknown` 只出现在对未知 VID/PID 的分类结果中，
/// 永远不会被绑定到一个已打开的设备上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceVariant {
    /// Dream Cheeky Thunder（8 字节报文，带 LED）
    Thunder,
    /// 初代发射器（1 字节报文，无 LED）
    Original,
    /// 不支持的设备
    Unknown,
}

impl DeviceVariant {
    /// 按探测优先级排列的已知设备
    pub const PROBE_ORDER: [(u16, u16, DeviceVariant); 2] = [
        (THUNDER_VENDOR_ID, THUNDER_PRODUCT_ID, DeviceVariant::Thunder),
        (ORIGINAL_VENDOR_ID, ORIGINAL_PRODUCT_ID, DeviceVariant::Original),
    ];

    /// 根据 VID/PID 分类
    pub fn from_ids(vendor_id: u16, product_id: u16) -> Self {
        Self::PROBE_ORDER
            .iter()
            .find(|(vid, pid, _)| *vid == vendor_id && *pid == product_id)
            .map(|(_, _, variant)| *variant)
            .unwrap_or(DeviceVariant::Unknown)
    }

    /// 该变体使用的控制传输参数
    ///
    /// `Unknown` 没有定义的参数，返回 `None`。
    pub fn control_request(self) -> Option<ControlRequest> {
        match self {
            DeviceVariant::Thunder => Some(ControlRequest {
                request_type: REQUEST_TYPE_CLASS_OUT,
                request: REQUEST_SET_REPORT,
                value: THUNDER_REQUEST_VALUE,
                index: 0,
            }),
            DeviceVariant::Original => Some(ControlRequest {
                request_type: REQUEST_TYPE_CLASS_OUT,
                request: REQUEST_SET_REPORT,
                value: ORIGINAL_REQUEST_VALUE,
                index: 0,
            }),
            DeviceVariant::Unknown => None,
        }
    }

    /// 硬件是否带 LED
    pub fn has_led(self) -> bool {
        matches!(self, DeviceVariant::Thunder)
    }
}

impl fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceVariant::Thunder => "Thunder",
            DeviceVariant::Original => "Original",
            DeviceVariant::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// 控制传输 Setup 参数（不含数据阶段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRequest {
    /// bmRequestType
    pub request_type: u8,
    /// bRequest
    pub request: u8,
    /// wValue
    pub value: u16,
    /// wIndex
    pub index: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids() {
        assert_eq!(DeviceVariant::from_ids(0x2123, 0x1010), DeviceVariant::Thunder);
        assert_eq!(DeviceVariant::from_ids(0x0A81, 0x0701), DeviceVariant::Original);
        assert_eq!(DeviceVariant::from_ids(0x2123, 0x0701), DeviceVariant::Unknown);
        assert_eq!(DeviceVariant::from_ids(0x1D50, 0x606F), DeviceVariant::Unknown);
    }

    #[test]
    fn test_probe_order_thunder_first() {
        assert_eq!(DeviceVariant::PROBE_ORDER[0].2, DeviceVariant::Thunder);
        assert_eq!(DeviceVariant::PROBE_ORDER[1].2, DeviceVariant::Original);
    }

    #[test]
    fn test_control_request_thunder() {
        let req = DeviceVariant::Thunder.control_request().unwrap();
        assert_eq!(req.request_type, 0x21);
        assert_eq!(req.request, 0x09);
        assert_eq!(req.value, 0);
        assert_eq!(req.index, 0);
    }

    #[test]
    fn test_control_request_original() {
        let req = DeviceVariant::Original.control_request().unwrap();
        assert_eq!(req.request_type, 0x21);
        assert_eq!(req.request, 0x09);
        assert_eq!(req.value, 0x0200);
        assert_eq!(req.index, 0);
    }

    #[test]
    fn test_control_request_unknown() {
        assert!(DeviceVariant::Unknown.control_request().is_none());
    }

    #[test]
    fn test_has_led() {
        assert!(DeviceVariant::Thunder.has_led());
        assert!(!DeviceVariant::Original.has_led());
        assert!(!DeviceVariant::Unknown.has_led());
    }

    #[test]
    fn test_display() {
        assert_eq!(DeviceVariant::Thunder.to_string(), "Thunder");
        assert_eq!(DeviceVariant::Original.to_string(), "Original");
    }
}
