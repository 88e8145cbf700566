//! 用户仓库
//!
//! 使用 TOML 文件（`[[users]]`）存储用户列表
//! 实现 rainb0w-core 的 UserRepository trait

use std::path::PathBuf;

use async_trait::async_trait;
use rainb0w_core::traits::UserRepository;
use rainb0w_core::types::{User, UserList};
use rainb0w_core::{CoreError, CoreResult};
use tokio::fs;

/// 基于 TOML 文件的用户仓库
pub struct TomlUserRepository {
    path: PathBuf,
}

impl TomlUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserRepository for TomlUserRepository {
    async fn find_all(&self) -> CoreResult<Vec<User>> {
        // 文件不存在视为空列表
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.path.display())))?;

        let list: UserList = toml::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", self.path.display())))?;

        Ok(list.users)
    }

    async fn save_all(&self, users: &[User]) -> CoreResult<()> {
        let list = UserList {
            users: users.to_vec(),
        };
        let content = toml::to_string_pretty(&list)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.path.display())))?;

        log::debug!("{} users written to {}", users.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlUserRepository::new(dir.path().join("rainb0w_users.toml"));

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_is_preserved_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlUserRepository::new(dir.path().join("rainb0w_users.toml"));

        repo.append(&User::generate("zoe")).await.unwrap();
        repo.append(&User::generate("adam")).await.unwrap();
        repo.append(&User::generate("mia")).await.unwrap();
        repo.remove("adam").await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["zoe", "mia"]);
    }

    #[tokio::test]
    async fn existing_file_format_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainb0w_users.toml");
        std::fs::write(
            &path,
            "[[users]]\nname = \"alice\"\nuuid = \"u-1\"\npassword = \"p-1\"\n",
        )
        .unwrap();

        let users = TomlUserRepository::new(&path).find_all().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].uuid, "u-1");
    }
}
