//! 分享链接生成
//!
//! Pure functions of (configuration, user): every link embeds the current
//! fake SNI, so links must be regenerated whenever the SNI changes.

use crate::types::{ProxyKind, RainbowConfig, ShareLink, User};

/// 为用户生成所有已启用代理的分享链接
pub fn build_share_links(config: &RainbowConfig, user: &User) -> Vec<ShareLink> {
    config
        .enabled_proxies()
        .into_iter()
        .filter_map(|proxy| {
            let url = match proxy {
                ProxyKind::Xray => Some(xray_link(config, user)),
                ProxyKind::Hysteria => Some(hysteria_link(config, user)),
                ProxyKind::Mtproto => mtproto_link(config),
            }?;
            Some(ShareLink { proxy, url })
        })
        .collect()
}

fn fragment(user: &User, proxy: ProxyKind) -> String {
    urlencoding::encode(&format!("{} [{}]", user.name, proxy.name())).into_owned()
}

fn xray_link(config: &RainbowConfig, user: &User) -> String {
    format!(
        "vless://{uuid}@{host}:{port}?security=reality&encryption=none&pbk={pbk}&fp=chrome&type=tcp&flow=xtls-rprx-vision&sni={sni}&sid={sid}#{name}",
        uuid = user.uuid,
        host = config.server.public_ip,
        port = config.xray.port,
        pbk = urlencoding::encode(&config.xray.public_key),
        sni = urlencoding::encode(config.fake_sni()),
        sid = urlencoding::encode(&config.xray.short_id),
        name = fragment(user, ProxyKind::Xray),
    )
}

fn hysteria_link(config: &RainbowConfig, user: &User) -> String {
    format!(
        "hy2://{name}:{password}@{host}:{port}?sni={sni}&insecure=1#{label}",
        name = urlencoding::encode(&user.name),
        password = urlencoding::encode(&user.password),
        host = config.server.public_ip,
        port = config.hysteria.port,
        sni = urlencoding::encode(config.fake_sni()),
        label = fragment(user, ProxyKind::Hysteria),
    )
}

/// Fake-TLS secret: `ee` + 16-byte secret + hex of the SNI
fn mtproto_link(config: &RainbowConfig) -> Option<String> {
    if config.mtproto.secret.is_empty() {
        return None;
    }
    Some(format!(
        "tg://proxy?server={host}&port={port}&secret=ee{secret}{domain}",
        host = config.server.public_ip,
        port = config.mtproto.port,
        secret = config.mtproto.secret,
        domain = hex::encode(config.fake_sni()),
    ))
}
