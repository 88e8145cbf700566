//! 业务逻辑服务层

mod access_control_service;
mod backup_service;
mod maintenance_service;
mod performance_service;
mod share_link_service;
mod sni_service;
mod user_service;

pub use access_control_service::AccessControlService;
pub use backup_service::{BackupReport, BackupService};
pub use maintenance_service::MaintenanceService;
pub use performance_service::{PerformanceService, ZRAM_SERVICE};
pub use share_link_service::build_share_links;
pub use sni_service::{SniChangeReport, SniService, COMMON_NAME_PREFIX};
pub use user_service::{AddUserOutcome, ClientInfo, UserService};

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{
    ActionInvoker, ClientProfileStore, ConfigRepository, DnsFilter, ProxyBackend, SystemProbe,
    UserRepository,
};
use crate::types::{AppliancePaths, Script};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ServiceContext {
    /// 设备配置仓库
    pub config_repository: Arc<dyn ConfigRepository>,
    /// 用户仓库
    pub user_repository: Arc<dyn UserRepository>,
    /// 外部脚本执行器
    pub action_invoker: Arc<dyn ActionInvoker>,
    /// 代理配置文件
    pub proxy_backend: Arc<dyn ProxyBackend>,
    /// DNS 过滤配置
    pub dns_filter: Arc<dyn DnsFilter>,
    /// 主机状态查询
    pub system_probe: Arc<dyn SystemProbe>,
    /// 客户端分享链接存储
    pub client_profiles: Arc<dyn ClientProfileStore>,
    /// 知名路径
    pub paths: AppliancePaths,
}

impl ServiceContext {
    /// 运行外部脚本，非零退出视为失败
    ///
    /// There is no retry: the failure propagates and ends the session.
    pub async fn invoke(&self, script: Script, args: &[String]) -> CoreResult<()> {
        log::info!("Running {script} {args:?}");
        let status = self.action_invoker.run(script, args).await?;

        if status.success() {
            log::info!("{script} finished successfully");
            Ok(())
        } else {
            log::error!("{script} failed: {status}");
            Err(CoreError::ActionFailed {
                action: script.to_string(),
                status,
            })
        }
    }
}
