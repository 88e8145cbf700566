//! Live host state queries

use async_trait::async_trait;

use crate::error::CoreResult;

/// Read-only view of host state that drives toggle labels.
///
/// Never cached: every menu render asks again.
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Whether the network stack optimizations (BBR) are active
    async fn is_network_stack_tuned(&self) -> CoreResult<bool>;

    /// Whether a systemd service is currently active
    async fn is_service_running(&self, service: &str) -> CoreResult<bool>;
}
