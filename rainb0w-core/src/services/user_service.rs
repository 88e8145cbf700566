//! 用户管理服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{build_share_links, ServiceContext};
use crate::types::{ShareLink, User};

/// 添加用户的结果
#[derive(Debug, Clone, PartialEq)]
pub enum AddUserOutcome {
    /// 已创建并接入代理
    Added(User),
    /// 名称为空，未做任何修改
    EmptyName,
    /// 名称已存在（区分大小写），未做任何修改
    Duplicate(String),
}

/// 用户的客户端信息
#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub user: User,
    pub links: Vec<ShareLink>,
}

/// 用户管理服务
pub struct UserService {
    ctx: Arc<ServiceContext>,
}

impl UserService {
    /// 创建用户服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出所有用户名（保持顺序）
    pub async fn list_names(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .ctx
            .user_repository
            .find_all()
            .await?
            .into_iter()
            .map(|user| user.name)
            .collect())
    }

    /// 添加用户
    ///
    /// 完整流程：校验名称 -> 生成凭证 -> 追加到用户列表 -> 接入已启用的代理 -> 生成分享链接
    ///
    /// The name is taken verbatim; duplicates are exact, case-sensitive matches.
    pub async fn add_user(&self, name: &str) -> CoreResult<AddUserOutcome> {
        if name.is_empty() {
            return Ok(AddUserOutcome::EmptyName);
        }

        if self.ctx.user_repository.find_by_name(name).await?.is_some() {
            log::warn!("Refusing to add duplicate user: {name}");
            return Ok(AddUserOutcome::Duplicate(name.to_string()));
        }

        let user = User::generate(name);
        self.ctx.user_repository.append(&user).await?;
        log::info!("User {name} saved");

        let config = self.ctx.config_repository.load().await?;
        self.ctx.proxy_backend.add_user(&config, &user).await?;

        let links = build_share_links(&config, &user);
        self.ctx.client_profiles.publish(&user.name, &links).await?;

        Ok(AddUserOutcome::Added(user))
    }

    /// 删除用户：用户列表、各代理配置与客户端配置
    pub async fn remove_user(&self, name: &str) -> CoreResult<()> {
        let config = self.ctx.config_repository.load().await?;

        self.ctx.user_repository.remove(name).await?;
        self.ctx.proxy_backend.remove_user(&config, name).await?;
        self.ctx.client_profiles.remove(name).await?;

        log::info!("User {name} removed");
        Ok(())
    }

    /// 获取用户的分享链接
    pub async fn client_info(&self, name: &str) -> CoreResult<ClientInfo> {
        let user = self
            .ctx
            .user_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| CoreError::UserNotFound(name.to_string()))?;
        let config = self.ctx.config_repository.load().await?;
        let links = build_share_links(&config, &user);

        Ok(ClientInfo { user, links })
    }
}
