//! 访问控制服务（DNS 屏蔽）

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::Script;

/// 访问控制服务
pub struct AccessControlService {
    ctx: Arc<ServiceContext>,
}

impl AccessControlService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 成人内容是否已屏蔽
    pub async fn is_porn_blocked(&self) -> CoreResult<bool> {
        self.ctx.dns_filter.is_porn_blocked().await
    }

    /// 屏蔽成人内容：运行脚本并更新 DNS 过滤配置
    pub async fn block_porn(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::BlockPorn, &[]).await?;
        self.ctx.dns_filter.set_porn_blocking(true).await
    }

    /// 取消屏蔽
    pub async fn unblock_porn(&self) -> CoreResult<()> {
        self.ctx.invoke(Script::UnblockPorn, &[]).await?;
        self.ctx.dns_filter.set_porn_blocking(false).await
    }
}
