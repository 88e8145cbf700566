//! 核心服务
//!
//! 用具体适配器组装 rainb0w-core 的 ServiceContext

use std::sync::Arc;

use rainb0w_core::services::ServiceContext;

use super::action_invoker::ShellActionInvoker;
use super::client_profiles::FsClientProfileStore;
use super::config_repository::TomlConfigRepository;
use super::config_service::ConsoleSettings;
use super::dns_filter::BlockyDnsFilter;
use super::host_probe::HostProbe;
use super::proxy_files::ProxyConfigFiles;
use super::user_repository::TomlUserRepository;

/// 创建服务上下文
pub fn build_context(settings: &ConsoleSettings) -> Arc<ServiceContext> {
    // 1. 存储
    let config_repository = Arc::new(TomlConfigRepository::new(&settings.config_file));
    let user_repository = Arc::new(TomlUserRepository::new(&settings.users_file));

    // 2. 外部脚本与主机状态
    let action_invoker = Arc::new(ShellActionInvoker::new(&settings.scripts_dir));
    let system_probe = Arc::new(HostProbe::new());

    // 3. 代理与 DNS 配置文件
    let proxy_backend = Arc::new(ProxyConfigFiles::new(
        &settings.xray_config_file,
        &settings.hysteria_config_file,
        &settings.mtproto_config_file,
    ));
    let dns_filter = Arc::new(BlockyDnsFilter::new(&settings.blocky_config_file));
    let client_profiles = Arc::new(FsClientProfileStore::new(&settings.client_configs_dir));

    Arc::new(ServiceContext {
        config_repository,
        user_repository,
        action_invoker,
        proxy_backend,
        dns_filter,
        system_probe,
        client_profiles,
        paths: settings.appliance_paths(),
    })
}
