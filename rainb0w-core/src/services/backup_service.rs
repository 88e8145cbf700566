//! 备份服务

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::utils::fs::{copy_dir_into, copy_file_into};

/// 备份结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// 备份目录
    pub destination: PathBuf,
    /// 复制的文件总数
    pub files_copied: usize,
}

/// 备份服务
///
/// 只读取在线状态，不影响运行中的服务。
pub struct BackupService {
    ctx: Arc<ServiceContext>,
}

impl BackupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 备份目录
    pub fn destination(&self) -> &PathBuf {
        &self.ctx.paths.backup_dir
    }

    /// 复制配置文件、用户文件和客户端配置目录到备份目录
    pub async fn backup(&self) -> CoreResult<BackupReport> {
        let paths = &self.ctx.paths;
        let destination = paths.backup_dir.clone();

        fs::create_dir_all(&destination)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", destination.display())))?;

        copy_file_into(&paths.config_file, &destination).await?;
        copy_file_into(&paths.users_file, &destination).await?;
        let client_files = copy_dir_into(&paths.client_configs_dir, &destination).await?;

        let report = BackupReport {
            destination,
            files_copied: client_files + 2,
        };
        log::info!(
            "Backup of {} files written to {}",
            report.files_copied,
            report.destination.display()
        );
        Ok(report)
    }
}
