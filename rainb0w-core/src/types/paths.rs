//! 设备上的知名路径

use std::path::PathBuf;

/// Files and directories the services read, write or copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliancePaths {
    /// rainb0w_config.toml
    pub config_file: PathBuf,
    /// rainb0w_users.toml
    pub users_file: PathBuf,
    /// 客户端分享链接与二维码目录
    pub client_configs_dir: PathBuf,
    /// 备份目标目录
    pub backup_dir: PathBuf,
    /// 自签名证书续期脚本（含 `COMMON_NAME=` 行）
    pub cert_renewal_script: PathBuf,
}
