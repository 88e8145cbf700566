//! 代理配置文件操作抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ProxyKind, RainbowConfig, User};

/// 代理后端 Trait
///
/// 修改各代理自身的配置文件；生效需要重启服务（"Apply Changes"）。
#[async_trait]
pub trait ProxyBackend: Send + Sync {
    /// 在指定代理上重置 SNI
    async fn reset_sni(&self, proxy: ProxyKind, sni: &str) -> CoreResult<()>;

    /// 将用户接入所有已启用的代理
    async fn add_user(&self, config: &RainbowConfig, user: &User) -> CoreResult<()>;

    /// 从所有已启用的代理中移除用户
    async fn remove_user(&self, config: &RainbowConfig, name: &str) -> CoreResult<()>;
}
