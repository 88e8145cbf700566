//! 代理子系统类型

use std::fmt;

use serde::{Deserialize, Serialize};

/// 可独立启用的代理后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyKind {
    /// Xray (VLESS + REALITY)
    Xray,
    /// MTProto (Telegram)
    Mtproto,
    /// Hysteria2
    Hysteria,
}

impl ProxyKind {
    /// 所有代理，按 SNI 重置的顺序排列
    pub const ALL: [Self; 3] = [Self::Xray, Self::Mtproto, Self::Hysteria];

    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            Self::Xray => "Xray",
            Self::Mtproto => "MTProto",
            Self::Hysteria => "Hysteria",
        }
    }

    /// 文件名使用的短标识
    pub fn slug(self) -> &'static str {
        match self {
            Self::Xray => "xray",
            Self::Mtproto => "mtproto",
            Self::Hysteria => "hysteria",
        }
    }

    /// 是否使用以 SNI 为 CN 的自签名证书
    pub fn requires_certificate(self) -> bool {
        matches!(self, Self::Hysteria)
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
