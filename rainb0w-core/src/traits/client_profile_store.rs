//! 客户端配置（分享链接 / 二维码）存储抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ShareLink;

/// 客户端配置存储 Trait
#[async_trait]
pub trait ClientProfileStore: Send + Sync {
    /// 写入（覆盖）某个用户的分享链接与二维码
    async fn publish(&self, user: &str, links: &[ShareLink]) -> CoreResult<()>;

    /// 删除某个用户的客户端配置
    async fn remove(&self, user: &str) -> CoreResult<()>;
}
