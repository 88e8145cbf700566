//! Performance tweaks
//!
//! The scripts apply their change synchronously, outside the managed
//! services, so none of these operations needs a restart.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::Script;

/// systemd unit providing compressed swap
pub const ZRAM_SERVICE: &str = "zramswap";

pub struct PerformanceService {
    ctx: Arc<ServiceContext>,
}

impl PerformanceService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn network_stack_tuned(&self) -> CoreResult<bool> {
        self.ctx.system_probe.is_network_stack_tuned().await
    }

    pub async fn zram_enabled(&self) -> CoreResult<bool> {
        self.ctx.system_probe.is_service_running(ZRAM_SERVICE).await
    }

    pub async fn tune_network_stack(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::TuneKernelNet, &[]).await
    }

    pub async fn revert_network_stack(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::RevertKernelNet, &[]).await
    }

    pub async fn enable_zram(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::EnableZram, &[]).await
    }

    pub async fn disable_zram(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::DisableZram, &[]).await
    }
}
