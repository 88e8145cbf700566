//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ZRAM_SERVICE};
use crate::traits::{
    ActionInvoker, ClientProfileStore, ConfigRepository, Console, DnsFilter, ProxyBackend,
    SystemProbe, Tone, UserRepository,
};
use crate::types::{
    AppliancePaths, CertSection, ProxyKind, RainbowConfig, Script, ScriptStatus, ServerSection,
    ShareLink, User,
};

// ===== 工厂方法 =====

/// Xray + Hysteria enabled, MTProto off
pub fn sample_config() -> RainbowConfig {
    let mut config = RainbowConfig {
        cert: CertSection {
            fake_sni: "www.example.com".to_string(),
            ..CertSection::default()
        },
        server: ServerSection {
            public_ip: "203.0.113.7".to_string(),
            ..ServerSection::default()
        },
        xray: Default::default(),
        mtproto: Default::default(),
        hysteria: Default::default(),
        extra: toml::Table::new(),
    };
    config.xray.is_enabled = true;
    config.xray.public_key = "pubkey".to_string();
    config.xray.short_id = "abcd".to_string();
    config.hysteria.is_enabled = true;
    config
}

pub fn sample_user(name: &str) -> User {
    User {
        name: name.to_string(),
        uuid: format!("00000000-0000-4000-8000-{:0>12}", name.len()),
        password: format!("{name}-password"),
        extra: toml::Table::new(),
    }
}

// ===== ScriptedConsole =====

/// 预先编排的操作员输入
#[derive(Debug, Clone)]
pub enum Reply {
    /// 按标签选择菜单项
    Choose(&'static str),
    /// 回答文本提示
    Input(&'static str),
}

/// 按脚本回答的控制台；脚本用完后返回 `Interrupted`
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<Reply>,
    /// (标题, 选项) 按渲染顺序
    pub menus: Vec<(String, Vec<String>)>,
    pub prompts: Vec<String>,
    pub transcript: Vec<(Tone, String)>,
    pub pauses: usize,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            ..Self::default()
        }
    }

    /// 是否输出过包含 `needle` 的消息
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|(_, line)| line.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    fn choose(&mut self, title: &str, options: &[String]) -> CoreResult<usize> {
        self.menus.push((title.to_string(), options.to_vec()));
        match self.replies.pop_front() {
            Some(Reply::Choose(label)) => Ok(options
                .iter()
                .position(|option| option == label)
                .unwrap_or_else(|| panic!("'{label}' is not offered in {options:?}"))),
            Some(Reply::Input(text)) => panic!("expected a menu pick, scripted input '{text}'"),
            None => Err(CoreError::Interrupted),
        }
    }

    fn prompt(&mut self, message: &str) -> CoreResult<String> {
        self.prompts.push(message.to_string());
        match self.replies.pop_front() {
            Some(Reply::Input(text)) => Ok(text.to_string()),
            Some(Reply::Choose(label)) => panic!("expected text input, scripted pick '{label}'"),
            None => Err(CoreError::Interrupted),
        }
    }

    fn pause(&mut self) -> CoreResult<()> {
        self.pauses += 1;
        Ok(())
    }

    fn clear(&mut self) -> CoreResult<()> {
        self.clears += 1;
        Ok(())
    }

    fn say(&mut self, tone: Tone, message: &str) -> CoreResult<()> {
        self.transcript.push((tone, message.to_string()));
        Ok(())
    }
}

// ===== MockConfigRepository =====

pub struct MockConfigRepository {
    config: RwLock<RainbowConfig>,
    saves: AtomicUsize,
}

impl MockConfigRepository {
    pub fn new(config: RainbowConfig) -> Self {
        Self {
            config: RwLock::new(config),
            saves: AtomicUsize::new(0),
        }
    }

    pub async fn current(&self) -> RainbowConfig {
        self.config.read().await.clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn load(&self) -> CoreResult<RainbowConfig> {
        Ok(self.config.read().await.clone())
    }

    async fn save(&self, config: &RainbowConfig) -> CoreResult<()> {
        *self.config.write().await = config.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== MockUserRepository =====

pub struct MockUserRepository {
    users: RwLock<Vec<User>>,
    writes: AtomicUsize,
}

impl MockUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
            writes: AtomicUsize::new(0),
        }
    }

    pub async fn names(&self) -> Vec<String> {
        self.users.read().await.iter().map(|u| u.name.clone()).collect()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> CoreResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn save_all(&self, users: &[User]) -> CoreResult<()> {
        *self.users.write().await = users.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== MockSystemProbe =====

#[derive(Default)]
pub struct MockSystemProbe {
    network_tuned: AtomicBool,
    running: RwLock<HashSet<String>>,
}

impl MockSystemProbe {
    pub fn set_network_tuned(&self, tuned: bool) {
        self.network_tuned.store(tuned, Ordering::SeqCst);
    }

    pub async fn set_running(&self, service: &str, running: bool) {
        let mut services = self.running.write().await;
        if running {
            services.insert(service.to_string());
        } else {
            services.remove(service);
        }
    }
}

#[async_trait]
impl SystemProbe for MockSystemProbe {
    async fn is_network_stack_tuned(&self) -> CoreResult<bool> {
        Ok(self.network_tuned.load(Ordering::SeqCst))
    }

    async fn is_service_running(&self, service: &str) -> CoreResult<bool> {
        Ok(self.running.read().await.contains(service))
    }
}

// ===== RecordingInvoker =====

/// 记录所有脚本调用；可让某个脚本以非零状态退出。
///
/// With a probe attached, the performance scripts flip the probed state the
/// way the real scripts change the host.
pub struct RecordingInvoker {
    calls: RwLock<Vec<(Script, Vec<String>)>>,
    failing: RwLock<Option<Script>>,
    probe: Option<Arc<MockSystemProbe>>,
}

impl RecordingInvoker {
    pub fn new(probe: Option<Arc<MockSystemProbe>>) -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            failing: RwLock::new(None),
            probe,
        }
    }

    pub async fn fail_on(&self, script: Script) {
        *self.failing.write().await = Some(script);
    }

    pub async fn calls(&self) -> Vec<(Script, Vec<String>)> {
        self.calls.read().await.clone()
    }

    pub async fn scripts(&self) -> Vec<Script> {
        self.calls.read().await.iter().map(|(s, _)| *s).collect()
    }
}

#[async_trait]
impl ActionInvoker for RecordingInvoker {
    async fn run(&self, script: Script, args: &[String]) -> CoreResult<ScriptStatus> {
        self.calls.write().await.push((script, args.to_vec()));

        if *self.failing.read().await == Some(script) {
            return Ok(ScriptStatus::exited(1));
        }

        if let Some(probe) = &self.probe {
            match script {
                Script::TuneKernelNet => probe.set_network_tuned(true),
                Script::RevertKernelNet => probe.set_network_tuned(false),
                Script::EnableZram => probe.set_running(ZRAM_SERVICE, true).await,
                Script::DisableZram => probe.set_running(ZRAM_SERVICE, false).await,
                _ => {}
            }
        }
        Ok(ScriptStatus::exited(0))
    }
}

// ===== MockProxyBackend =====

#[derive(Default)]
pub struct MockProxyBackend {
    pub resets: RwLock<Vec<(ProxyKind, String)>>,
    pub added: RwLock<Vec<String>>,
    pub removed: RwLock<Vec<String>>,
}

#[async_trait]
impl ProxyBackend for MockProxyBackend {
    async fn reset_sni(&self, proxy: ProxyKind, sni: &str) -> CoreResult<()> {
        self.resets.write().await.push((proxy, sni.to_string()));
        Ok(())
    }

    async fn add_user(&self, _config: &RainbowConfig, user: &User) -> CoreResult<()> {
        self.added.write().await.push(user.name.clone());
        Ok(())
    }

    async fn remove_user(&self, _config: &RainbowConfig, name: &str) -> CoreResult<()> {
        self.removed.write().await.push(name.to_string());
        Ok(())
    }
}

// ===== MockDnsFilter =====

#[derive(Default)]
pub struct MockDnsFilter {
    blocked: AtomicBool,
}

impl MockDnsFilter {
    pub fn blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsFilter for MockDnsFilter {
    async fn is_porn_blocked(&self) -> CoreResult<bool> {
        Ok(self.blocked())
    }

    async fn set_porn_blocking(&self, blocked: bool) -> CoreResult<()> {
        self.blocked.store(blocked, Ordering::SeqCst);
        Ok(())
    }
}

// ===== MockClientProfileStore =====

#[derive(Default)]
pub struct MockClientProfileStore {
    pub published: RwLock<HashMap<String, Vec<ShareLink>>>,
    pub removed: RwLock<Vec<String>>,
}

#[async_trait]
impl ClientProfileStore for MockClientProfileStore {
    async fn publish(&self, user: &str, links: &[ShareLink]) -> CoreResult<()> {
        self.published
            .write()
            .await
            .insert(user.to_string(), links.to_vec());
        Ok(())
    }

    async fn remove(&self, user: &str) -> CoreResult<()> {
        self.published.write().await.remove(user);
        self.removed.write().await.push(user.to_string());
        Ok(())
    }
}

// ===== TestHarness =====

pub const RENEWAL_SCRIPT: &str = "#!/bin/sh\nDAYS=3650\nCOMMON_NAME=www.example.com\nopenssl req -x509\n";

/// 一组互相连接的 mock 与指向临时目录的路径
pub struct TestHarness {
    pub ctx: Arc<ServiceContext>,
    pub config: Arc<MockConfigRepository>,
    pub users: Arc<MockUserRepository>,
    pub invoker: Arc<RecordingInvoker>,
    pub proxies: Arc<MockProxyBackend>,
    pub dns: Arc<MockDnsFilter>,
    pub probe: Arc<MockSystemProbe>,
    pub profiles: Arc<MockClientProfileStore>,
    _dir: TempDir,
}

impl TestHarness {
    pub fn new(users: &[&str]) -> Self {
        Self::with_config(sample_config(), users)
    }

    pub fn with_config(config: RainbowConfig, users: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_home(dir.path());

        let config = Arc::new(MockConfigRepository::new(config));
        let users = Arc::new(MockUserRepository::new(
            users.iter().map(|name| sample_user(name)).collect(),
        ));
        let probe = Arc::new(MockSystemProbe::default());
        let invoker = Arc::new(RecordingInvoker::new(Some(Arc::clone(&probe))));
        let proxies = Arc::new(MockProxyBackend::default());
        let dns = Arc::new(MockDnsFilter::default());
        let profiles = Arc::new(MockClientProfileStore::default());

        let ctx = Arc::new(ServiceContext {
            config_repository: config.clone(),
            user_repository: users.clone(),
            action_invoker: invoker.clone(),
            proxy_backend: proxies.clone(),
            dns_filter: dns.clone(),
            system_probe: probe.clone(),
            client_profiles: profiles.clone(),
            paths,
        });

        Self {
            ctx,
            config,
            users,
            invoker,
            proxies,
            dns,
            probe,
            profiles,
            _dir: dir,
        }
    }

    pub fn paths(&self) -> &AppliancePaths {
        &self.ctx.paths
    }
}

/// 在临时目录中写入配置、用户、客户端目录与证书续期脚本
fn seed_home(root: &Path) -> AppliancePaths {
    let home = root.join("Rainb0w_Home");
    let clients = home.join("clients");
    std::fs::create_dir_all(clients.join("alice")).unwrap();
    std::fs::write(home.join("rainb0w_config.toml"), "[CERT]\nFAKE_SNI = \"www.example.com\"\n")
        .unwrap();
    std::fs::write(home.join("rainb0w_users.toml"), "users = []\n").unwrap();
    std::fs::write(clients.join("alice").join("share_urls.txt"), "vless://alice\n").unwrap();

    let renewal = root.join("renew_selfsigned_cert.sh");
    std::fs::write(&renewal, RENEWAL_SCRIPT).unwrap();

    AppliancePaths {
        config_file: home.join("rainb0w_config.toml"),
        users_file: home.join("rainb0w_users.toml"),
        client_configs_dir: clients,
        backup_dir: root.join("Rainb0w_Backup"),
        cert_renewal_script: renewal,
    }
}
