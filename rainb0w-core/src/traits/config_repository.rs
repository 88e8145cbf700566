//! 设备配置持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::RainbowConfig;

/// 设备配置仓库 Trait
///
/// 每次操作前读取整个文件，修改后整体写回。
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// 读取完整配置
    async fn load(&self) -> CoreResult<RainbowConfig>;

    /// 写回完整配置
    ///
    /// # Arguments
    /// * `config` - 配置数据
    async fn save(&self, config: &RainbowConfig) -> CoreResult<()>;
}
