//! Mock 发射器
//!
//! 录制每一次控制传输（Setup 参数 + 数据），以及由测试注入的挂起事件，
//! 统一写入一个有序事件日志，用于校验命令顺序与时序。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::LauncherTransport;
use crate::error::UsbError;
use retaliation_protocol::{ControlRequest, DeviceVariant, Report};

/// 录制的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    /// 一次控制传输
    Transfer {
        request: ControlRequest,
        payload: Vec<u8>,
    },
    /// 一次线程挂起
    Sleep(Duration),
}

/// 共享事件日志
pub type EventLog = Arc<Mutex<Vec<MockEvent>>>;

/// Mock 发射器
pub struct MockLauncher {
    variant: DeviceVariant,
    log: EventLog,
    /// 第 N 次（从 0 开始）传输时返回错误
    fail_at: Option<usize>,
    transfers: usize,
}

impl MockLauncher {
    pub fn new(variant: DeviceVariant) -> Self {
        Self {
            variant,
            log: Arc::new(Mutex::new(Vec::new())),
            fail_at: None,
            transfers: 0,
        }
    }

    pub fn thunder() -> Self {
        Self::new(DeviceVariant::Thunder)
    }

    pub fn original() -> Self {
        Self::new(DeviceVariant::Original)
    }

    /// 第 `index` 次传输（从 0 开始）模拟设备拔出
    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// 事件日志句柄
    pub fn log(&self) -> EventLog {
        Arc::clone(&self.log)
    }

    /// 返回一个把挂起写入同一日志的闭包（不真正休眠）
    pub fn sleep_recorder(&self) -> impl FnMut(Duration) + use<> {
        let log = self.log();
        move |duration| {
            if let Ok(mut events) = log.lock() {
                events.push(MockEvent::Sleep(duration));
            }
        }
    }

    /// 当前日志快照
    pub fn events(&self) -> Vec<MockEvent> {
        self.log.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// 只取传输数据
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                MockEvent::Transfer { payload, .. } => Some(payload),
                MockEvent::Sleep(_) => None,
            })
            .collect()
    }

    /// 成功完成的传输次数
    pub fn transfer_count(&self) -> usize {
        self.payloads().len()
    }
}

impl LauncherTransport for MockLauncher {
    fn variant(&self) -> DeviceVariant {
        self.variant
    }

    fn send_raw(&mut self, report: &Report) -> Result<(), UsbError> {
        let index = self.transfers;
        self.transfers += 1;

        if self.fail_at == Some(index) {
            return Err(UsbError::Transfer(rusb::Error::NoDevice));
        }

        let request = self
            .variant
            .control_request()
            .ok_or(retaliation_protocol::ProtocolError::UnsupportedVariant {
                variant: self.variant,
            })?;

        if let Ok(mut events) = self.log.lock() {
            events.push(MockEvent::Transfer {
                request,
                payload: report.as_bytes().to_vec(),
            });
        }
        Ok(())
    }
}
