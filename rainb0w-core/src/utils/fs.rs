//! 备份用的文件复制

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{CoreError, CoreResult};

fn storage_err(path: &Path, e: &std::io::Error) -> CoreError {
    CoreError::StorageError(format!("{}: {e}", path.display()))
}

fn file_name(path: &Path) -> CoreResult<&std::ffi::OsStr> {
    path.file_name()
        .ok_or_else(|| CoreError::StorageError(format!("{} has no file name", path.display())))
}

/// 将文件复制到目录下（保留文件名），返回目标路径
pub async fn copy_file_into(src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
    let dest = dest_dir.join(file_name(src)?);
    fs::copy(src, &dest).await.map_err(|e| storage_err(src, &e))?;
    Ok(dest)
}

/// 将目录整体复制到目录下（保留目录名），返回复制的文件数
pub async fn copy_dir_into(src: &Path, dest_dir: &Path) -> CoreResult<usize> {
    let root = dest_dir.join(file_name(src)?);
    let mut pending = vec![(src.to_path_buf(), root)];
    let mut copied = 0;

    while let Some((from, to)) = pending.pop() {
        fs::create_dir_all(&to).await.map_err(|e| storage_err(&to, &e))?;

        let mut entries = fs::read_dir(&from).await.map_err(|e| storage_err(&from, &e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_err(&from, &e))?
        {
            let path = entry.path();
            let target = to.join(entry.file_name());
            let file_type = entry.file_type().await.map_err(|e| storage_err(&path, &e))?;

            if file_type.is_dir() {
                pending.push((path, target));
            } else {
                fs::copy(&path, &target).await.map_err(|e| storage_err(&path, &e))?;
                copied += 1;
            }
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copies_nested_directories() {
        let src_root = tempfile::tempdir().unwrap();
        let dest_root = tempfile::tempdir().unwrap();
        let clients = src_root.path().join("clients");
        fs::create_dir_all(clients.join("alice")).await.unwrap();
        fs::write(clients.join("alice/share_urls.txt"), "vless://x").await.unwrap();
        fs::write(clients.join("README"), "hi").await.unwrap();

        let copied = copy_dir_into(&clients, dest_root.path()).await.unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest_root.path().join("clients/alice/share_urls.txt"))
                .await
                .unwrap(),
            "vless://x"
        );
    }

    #[tokio::test]
    async fn copy_file_keeps_name() {
        let src_root = tempfile::tempdir().unwrap();
        let dest_root = tempfile::tempdir().unwrap();
        let src = src_root.path().join("rainb0w_config.toml");
        fs::write(&src, "[CERT]").await.unwrap();

        let dest = copy_file_into(&src, dest_root.path()).await.unwrap();

        assert_eq!(dest, dest_root.path().join("rainb0w_config.toml"));
    }
}
