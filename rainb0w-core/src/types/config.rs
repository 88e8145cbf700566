//! 设备配置（rainb0w_config.toml）
//!
//! Every section keeps the keys it does not model in `extra`, so a rewrite
//! never drops settings written by the installer.

use serde::{Deserialize, Serialize};
use toml::Table;

use super::ProxyKind;

/// 设备主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RainbowConfig {
    /// 证书设置
    pub cert: CertSection,
    /// 服务器信息
    #[serde(default)]
    pub server: ServerSection,
    /// Xray 设置
    #[serde(default)]
    pub xray: XraySection,
    /// MTProto 设置
    #[serde(default)]
    pub mtproto: MtprotoSection,
    /// Hysteria 设置
    #[serde(default)]
    pub hysteria: HysteriaSection,
    /// 未建模的其他段
    #[serde(flatten)]
    pub extra: Table,
}

/// `[CERT]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CertSection {
    /// 伪装域名
    pub fake_sni: String,
    #[serde(flatten)]
    pub extra: Table,
}

/// `[SERVER]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ServerSection {
    /// 分享链接中使用的公网地址
    #[serde(default)]
    pub public_ip: String,
    #[serde(flatten)]
    pub extra: Table,
}

/// `[XRAY]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct XraySection {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default = "default_tls_port")]
    pub port: u16,
    /// REALITY 公钥
    #[serde(default)]
    pub public_key: String,
    /// REALITY short id
    #[serde(default)]
    pub short_id: String,
    #[serde(flatten)]
    pub extra: Table,
}

/// `[MTPROTO]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MtprotoSection {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default = "default_tls_port")]
    pub port: u16,
    /// 32 位十六进制密钥
    #[serde(default)]
    pub secret: String,
    #[serde(flatten)]
    pub extra: Table,
}

/// `[HYSTERIA]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HysteriaSection {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default = "default_hysteria_port")]
    pub port: u16,
    #[serde(flatten)]
    pub extra: Table,
}

fn default_tls_port() -> u16 {
    443
}

fn default_hysteria_port() -> u16 {
    8443
}

impl Default for XraySection {
    fn default() -> Self {
        Self {
            is_enabled: false,
            port: default_tls_port(),
            public_key: String::new(),
            short_id: String::new(),
            extra: Table::new(),
        }
    }
}

impl Default for MtprotoSection {
    fn default() -> Self {
        Self {
            is_enabled: false,
            port: default_tls_port(),
            secret: String::new(),
            extra: Table::new(),
        }
    }
}

impl Default for HysteriaSection {
    fn default() -> Self {
        Self {
            is_enabled: false,
            port: default_hysteria_port(),
            extra: Table::new(),
        }
    }
}

impl RainbowConfig {
    /// 当前伪装域名
    pub fn fake_sni(&self) -> &str {
        &self.cert.fake_sni
    }

    /// 读取某个代理的启用标志
    pub fn is_enabled(&self, proxy: ProxyKind) -> bool {
        match proxy {
            ProxyKind::Xray => self.xray.is_enabled,
            ProxyKind::Mtproto => self.mtproto.is_enabled,
            ProxyKind::Hysteria => self.hysteria.is_enabled,
        }
    }

    /// 已启用的代理（固定顺序）
    pub fn enabled_proxies(&self) -> Vec<ProxyKind> {
        ProxyKind::ALL
            .into_iter()
            .filter(|proxy| self.is_enabled(*proxy))
            .collect()
    }
}
