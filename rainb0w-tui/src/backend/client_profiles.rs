//! 客户端配置存储
//!
//! 每个用户一个目录：
//!     <clients>/<name>/share_urls.txt     每行一个分享链接
//!     <clients>/<name>/<proxy>.qr.txt     对应链接的终端二维码
//!
//! 实现 rainb0w-core 的 ClientProfileStore trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rainb0w_core::traits::ClientProfileStore;
use rainb0w_core::types::ShareLink;
use rainb0w_core::{CoreError, CoreResult};
use tokio::fs;

const SHARE_URLS_FILE: &str = "share_urls.txt";

/// 基于文件系统的客户端配置存储
pub struct FsClientProfileStore {
    root: PathBuf,
}

impl FsClientProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 用户目录；名称经百分号编码，不同用户名不会落到同一目录
    pub fn profile_dir(&self, user: &str) -> PathBuf {
        let encoded = match user {
            "." => "%2E".to_string(),
            ".." => "%2E%2E".to_string(),
            _ => urlencoding::encode(user).into_owned(),
        };
        self.root.join(encoded)
    }
}

fn storage_err(path: &Path, e: &std::io::Error) -> CoreError {
    CoreError::StorageError(format!("{}: {e}", path.display()))
}

#[async_trait]
impl ClientProfileStore for FsClientProfileStore {
    async fn publish(&self, user: &str, links: &[ShareLink]) -> CoreResult<()> {
        let dir = self.profile_dir(user);

        // 先清空，避免残留已禁用代理的文件
        if fs::try_exists(&dir).await.unwrap_or(false) {
            fs::remove_dir_all(&dir).await.map_err(|e| storage_err(&dir, &e))?;
        }
        fs::create_dir_all(&dir).await.map_err(|e| storage_err(&dir, &e))?;

        let urls: String = links.iter().map(|link| format!("{}\n", link.url)).collect();
        let urls_file = dir.join(SHARE_URLS_FILE);
        fs::write(&urls_file, urls)
            .await
            .map_err(|e| storage_err(&urls_file, &e))?;

        for link in links {
            let qr_file = dir.join(format!("{}.qr.txt", link.proxy.slug()));
            fs::write(&qr_file, link.qr_text()?)
                .await
                .map_err(|e| storage_err(&qr_file, &e))?;
        }

        log::debug!("{} share links written for {user}", links.len());
        Ok(())
    }

    async fn remove(&self, user: &str) -> CoreResult<()> {
        let dir = self.profile_dir(user);
        match fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No client profile to remove for {user}");
                Ok(())
            }
            Err(e) => Err(storage_err(&dir, &e)),
        }
    }
}
