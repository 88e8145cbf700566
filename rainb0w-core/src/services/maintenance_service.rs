//! 更新与卸载

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::Script;

/// 维护服务
pub struct MaintenanceService {
    ctx: Arc<ServiceContext>,
}

impl MaintenanceService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 停止并删除所有容器、网络、卷，并撤销系统调整
    pub async fn uninstall(&self) -> CoreResult<()> {
        log::warn!("Uninstalling the appliance");
        self.ctx.invoke(Script::Uninstall, &[]).await
    }

    /// 拉取最新镜像并更新代理
    pub async fn update(&self) -> CoreResult<()> {
        log::info!("Updating the appliance");
        self.ctx.invoke(Script::Update, &[]).await
    }
}
