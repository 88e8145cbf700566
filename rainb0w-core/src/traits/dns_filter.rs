//! DNS 过滤配置抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// DNS 过滤器 Trait
#[async_trait]
pub trait DnsFilter: Send + Sync {
    /// 成人内容是否已被屏蔽（每次实时读取）
    async fn is_porn_blocked(&self) -> CoreResult<bool>;

    /// 启用或关闭成人内容屏蔽
    async fn set_porn_blocking(&self, blocked: bool) -> CoreResult<()>;
}
