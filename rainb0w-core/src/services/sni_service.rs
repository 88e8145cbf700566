//! SNI 管理服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{build_share_links, ServiceContext};
use crate::types::{ProxyKind, Script};
use crate::utils::{patch_prefixed_line, validate_sni};

/// 证书续期脚本中被改写的行前缀
pub const COMMON_NAME_PREFIX: &str = "COMMON_NAME=";

/// SNI 变更结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniChangeReport {
    /// 规范化后的新 SNI
    pub sni: String,
    /// 已更新的代理（按处理顺序）
    pub updated: Vec<ProxyKind>,
    /// 续期脚本中的 CN 行是否被改写
    pub renewal_script_patched: bool,
    /// 重新生成分享链接的用户数
    pub regenerated_users: usize,
}

/// SNI 管理服务
pub struct SniService {
    ctx: Arc<ServiceContext>,
}

impl SniService {
    /// 创建 SNI 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 当前配置的伪装 SNI
    pub async fn current_sni(&self) -> CoreResult<String> {
        Ok(self.ctx.config_repository.load().await?.cert.fake_sni)
    }

    /// 变更 SNI
    ///
    /// 完整流程：写入配置对象 -> 逐个重置已启用代理 -> 保存配置 -> 重新生成所有用户的分享链接
    ///
    /// A failure part-way leaves the proxies already handled on the new SNI
    /// while the saved configuration keeps the old one; nothing is rolled back.
    pub async fn change_sni(&self, input: &str) -> CoreResult<SniChangeReport> {
        let sni = validate_sni(input)?;
        let mut config = self.ctx.config_repository.load().await?;
        log::info!("Changing SNI from {} to {sni}", config.cert.fake_sni);
        config.cert.fake_sni.clone_from(&sni);

        let mut report = SniChangeReport {
            sni: sni.clone(),
            updated: Vec::new(),
            renewal_script_patched: false,
            regenerated_users: 0,
        };

        for proxy in config.enabled_proxies() {
            if proxy.requires_certificate() {
                self.ctx
                    .invoke(Script::GenX509Cert, std::slice::from_ref(&sni))
                    .await?;
                report.renewal_script_patched = self.patch_renewal_script(&sni).await?;
            } else {
                self.ctx.proxy_backend.reset_sni(proxy, &sni).await?;
            }
            log::info!("SNI reset on {proxy}");
            report.updated.push(proxy);
        }

        self.ctx.config_repository.save(&config).await?;

        let users = self.ctx.user_repository.find_all().await?;
        for user in &users {
            let links = build_share_links(&config, user);
            self.ctx.client_profiles.publish(&user.name, &links).await?;
        }
        report.regenerated_users = users.len();

        Ok(report)
    }

    /// 改写续期脚本中的 CN 行；没有匹配行时不做修改
    async fn patch_renewal_script(&self, sni: &str) -> CoreResult<bool> {
        let script = &self.ctx.paths.cert_renewal_script;
        let patched =
            patch_prefixed_line(script, COMMON_NAME_PREFIX, &format!("{COMMON_NAME_PREFIX}{sni}"))
                .await?;
        if !patched {
            log::warn!(
                "{} has no {COMMON_NAME_PREFIX} line; renewal keeps the old common name",
                script.display()
            );
        }
        Ok(patched)
    }
}
