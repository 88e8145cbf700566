//! 主机状态查询
//!
//! 实现 rainb0w-core 的 SystemProbe trait；每次调用都重新读取，不做缓存。

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use rainb0w_core::traits::SystemProbe;
use rainb0w_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::process::Command;

const CONGESTION_CONTROL: &str = "/proc/sys/net/ipv4/tcp_congestion_control";
const TUNED_ALGORITHM: &str = "bbr";

/// procfs + systemctl
pub struct HostProbe {
    congestion_control: PathBuf,
}

impl HostProbe {
    pub fn new() -> Self {
        Self::with_congestion_control(CONGESTION_CONTROL)
    }

    pub fn with_congestion_control(path: impl Into<PathBuf>) -> Self {
        Self {
            congestion_control: path.into(),
        }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for HostProbe {
    async fn is_network_stack_tuned(&self) -> CoreResult<bool> {
        match fs::read_to_string(&self.congestion_control).await {
            Ok(value) => Ok(value.trim() == TUNED_ALGORITHM),
            // 非 Linux 主机或无 procfs：视为未优化
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::StorageError(format!(
                "{}: {e}",
                self.congestion_control.display()
            ))),
        }
    }

    async fn is_service_running(&self, service: &str) -> CoreResult<bool> {
        let status = Command::new("systemctl")
            .args(["is-active", "--quiet", service])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => Ok(status.success()),
            Err(e) => {
                log::warn!("systemctl unavailable, treating {service} as stopped: {e}");
                Ok(false)
            }
        }
    }
}
