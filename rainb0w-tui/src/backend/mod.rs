//!
//! src/backend/mod.rs
//! Backend 层：设备适配器
//!
//! Backend 层与 UI 完全解耦，为 rainb0w-core 的各个 trait 提供真实实现。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;        // 组装 ServiceContext
//!         mod config_service;      // 控制台设置（路径）
//!
//!         mod config_repository;   // 设备配置（rainb0w_config.toml）
//!         mod user_repository;     // 用户列表（rainb0w_users.toml）
//!         mod action_invoker;      // 外部 shell 脚本
//!         mod proxy_files;         // Xray / Hysteria / MTProto 配置文件
//!         mod dns_filter;          // blocky DNS 过滤配置
//!         mod host_probe;          // BBR 与 systemd 服务状态
//!         mod client_profiles;     // 分享链接与二维码文件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、组装（build_context）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         创建流程：
//!             1. 创建配置仓库与用户仓库
//!             2. 创建脚本执行器与主机探针
//!             3. 创建代理配置、DNS 过滤与客户端配置存储
//!             4. 组装 ServiceContext，交给 Dashboard 使用
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、设置（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         所有路径默认位于 $HOME/Rainb0w_Home 下，
//!         可通过 $RAINB0W_HOME 整体迁移，或在 console.toml 中逐项覆盖。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、持久化约定
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - 每次操作都重新读取整个文件，修改后整体写回，不做缓存
//!     - 只改动需要改动的键或行，其余内容原样保留
//!     - 所有错误都转换为 CoreError 返回给核心层
//!

mod action_invoker;
mod client_profiles;
mod config_repository;
mod config_service;
mod core_service;
mod dns_filter;
mod host_probe;
mod proxy_files;
mod user_repository;

pub use config_service::LocalConfigService;
pub use core_service::build_context;
