//! 用户列表持久化抽象 Trait

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::types::User;

/// 用户仓库 Trait
///
/// 用户列表有序，按名称引用。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 获取所有用户（保持顺序）
    async fn find_all(&self) -> CoreResult<Vec<User>>;

    /// 整体写回用户列表
    ///
    /// # Arguments
    /// * `users` - 用户列表
    async fn save_all(&self, users: &[User]) -> CoreResult<()>;

    /// 按名称查找用户
    async fn find_by_name(&self, name: &str) -> CoreResult<Option<User>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|user| user.name == name))
    }

    /// 追加一个用户
    async fn append(&self, user: &User) -> CoreResult<()> {
        let mut users = self.find_all().await?;
        users.push(user.clone());
        self.save_all(&users).await
    }

    /// 按名称删除用户
    async fn remove(&self, name: &str) -> CoreResult<()> {
        let mut users = self.find_all().await?;
        let original_len = users.len();
        users.retain(|user| user.name != name);

        if users.len() == original_len {
            return Err(CoreError::UserNotFound(name.to_string()));
        }

        self.save_all(&users).await
    }
}
