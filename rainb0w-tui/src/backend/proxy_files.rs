//! 代理配置文件
//!
//! 实现 rainb0w-core 的 ProxyBackend trait：
//!     Xray      JSON，REALITY `serverNames` / `dest` 与 VLESS `clients`（以 email 为键）
//!     Hysteria  JSON，`auth.userpass`
//!     MTProto   Python 配置中的 `TLS_DOMAIN = "..."` 行
//!
//! 修改只写文件，生效需要 "Apply Changes" 重启服务。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rainb0w_core::traits::ProxyBackend;
use rainb0w_core::types::{ProxyKind, RainbowConfig, User};
use rainb0w_core::utils::patch_prefixed_line;
use rainb0w_core::{CoreError, CoreResult};
use serde_json::{json, Map, Value};
use tokio::fs;

const XRAY_FLOW: &str = "xtls-rprx-vision";
const TLS_DOMAIN_KEY: &str = "TLS_DOMAIN";

/// 各代理配置文件的位置
pub struct ProxyConfigFiles {
    xray: PathBuf,
    hysteria: PathBuf,
    mtproto: PathBuf,
}

impl ProxyConfigFiles {
    pub fn new(
        xray: impl Into<PathBuf>,
        hysteria: impl Into<PathBuf>,
        mtproto: impl Into<PathBuf>,
    ) -> Self {
        Self {
            xray: xray.into(),
            hysteria: hysteria.into(),
            mtproto: mtproto.into(),
        }
    }

    async fn reset_xray_sni(&self, sni: &str) -> CoreResult<()> {
        let mut doc = read_json(&self.xray).await?;

        for inbound in vless_inbounds(&mut doc, &self.xray)? {
            let reality = inbound
                .get_mut("streamSettings")
                .and_then(|s| s.get_mut("realitySettings"))
                .and_then(Value::as_object_mut)
                .ok_or_else(|| malformed(&self.xray, "VLESS inbound without realitySettings"))?;
            reality.insert("dest".to_string(), json!(format!("{sni}:443")));
            reality.insert("serverNames".to_string(), json!([sni]));
        }

        write_json(&self.xray, &doc).await
    }

    async fn reset_mtproto_sni(&self, sni: &str) -> CoreResult<()> {
        let patched = patch_prefixed_line(
            &self.mtproto,
            TLS_DOMAIN_KEY,
            &format!("{TLS_DOMAIN_KEY} = \"{sni}\""),
        )
        .await?;

        if patched {
            Ok(())
        } else {
            Err(malformed(&self.mtproto, "no TLS_DOMAIN setting"))
        }
    }

    async fn add_xray_user(&self, user: &User) -> CoreResult<()> {
        let mut doc = read_json(&self.xray).await?;

        for inbound in vless_inbounds(&mut doc, &self.xray)? {
            let clients = clients_mut(inbound, &self.xray)?;
            if clients.iter().any(|c| has_email(c, &user.name)) {
                continue;
            }
            clients.push(json!({
                "id": user.uuid,
                "email": user.name,
                "flow": XRAY_FLOW,
            }));
        }

        write_json(&self.xray, &doc).await
    }

    async fn remove_xray_user(&self, name: &str) -> CoreResult<()> {
        let mut doc = read_json(&self.xray).await?;

        for inbound in vless_inbounds(&mut doc, &self.xray)? {
            clients_mut(inbound, &self.xray)?.retain(|c| !has_email(c, name));
        }

        write_json(&self.xray, &doc).await
    }

    async fn edit_hysteria_users(
        &self,
        edit: impl FnOnce(&mut Map<String, Value>) + Send,
    ) -> CoreResult<()> {
        let mut doc = read_json(&self.hysteria).await?;

        let userpass = doc
            .get_mut("auth")
            .and_then(|auth| auth.get_mut("userpass"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| malformed(&self.hysteria, "missing auth.userpass"))?;
        edit(userpass);

        write_json(&self.hysteria, &doc).await
    }
}

#[async_trait]
impl ProxyBackend for ProxyConfigFiles {
    async fn reset_sni(&self, proxy: ProxyKind, sni: &str) -> CoreResult<()> {
        match proxy {
            ProxyKind::Xray => self.reset_xray_sni(sni).await,
            ProxyKind::Mtproto => self.reset_mtproto_sni(sni).await,
            // Hysteria 只依赖证书，由证书脚本处理
            ProxyKind::Hysteria => Ok(()),
        }
    }

    async fn add_user(&self, config: &RainbowConfig, user: &User) -> CoreResult<()> {
        for proxy in config.enabled_proxies() {
            match proxy {
                ProxyKind::Xray => self.add_xray_user(user).await?,
                ProxyKind::Hysteria => {
                    let (name, password) = (user.name.clone(), user.password.clone());
                    self.edit_hysteria_users(move |users| {
                        users.insert(name, Value::String(password));
                    })
                    .await?;
                }
                // MTProto 所有用户共享一个密钥
                ProxyKind::Mtproto => {}
            }
            log::debug!("User {} added to {proxy}", user.name);
        }
        Ok(())
    }

    async fn remove_user(&self, config: &RainbowConfig, name: &str) -> CoreResult<()> {
        for proxy in config.enabled_proxies() {
            match proxy {
                ProxyKind::Xray => self.remove_xray_user(name).await?,
                ProxyKind::Hysteria => {
                    let name = name.to_string();
                    self.edit_hysteria_users(move |users| {
                        users.remove(&name);
                    })
                    .await?;
                }
                ProxyKind::Mtproto => {}
            }
        }
        Ok(())
    }
}

fn malformed(path: &Path, what: &str) -> CoreError {
    CoreError::ConfigError(format!("{}: {what}", path.display()))
}

fn has_email(client: &Value, name: &str) -> bool {
    client.get("email").and_then(Value::as_str) == Some(name)
}

async fn read_json(path: &Path) -> CoreResult<Value> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| CoreError::SerializationError(format!("{}: {e}", path.display())))
}

async fn write_json(path: &Path, doc: &Value) -> CoreResult<()> {
    let mut content = serde_json::to_string_pretty(doc)
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;
    content.push('\n');
    fs::write(path, content)
        .await
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))
}

fn vless_inbounds<'a>(
    doc: &'a mut Value,
    path: &Path,
) -> CoreResult<Vec<&'a mut Map<String, Value>>> {
    let inbounds: Vec<_> = doc
        .get_mut("inbounds")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| malformed(path, "missing inbounds"))?
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .filter(|inbound| inbound.get("protocol").and_then(Value::as_str) == Some("vless"))
        .collect();

    if inbounds.is_empty() {
        return Err(malformed(path, "no VLESS inbound"));
    }
    Ok(inbounds)
}

fn clients_mut<'a>(
    inbound: &'a mut Map<String, Value>,
    path: &Path,
) -> CoreResult<&'a mut Vec<Value>> {
    inbound
        .entry("settings")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| malformed(path, "settings is not an object"))?
        .entry("clients")
        .or_insert_with(|| json!([]))
        .as_array_mut()
        .ok_or_else(|| malformed(path, "clients is not an array"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const XRAY: &str = r#"{
  "inbounds": [
    { "protocol": "dokodemo-door", "tag": "api" },
    {
      "protocol": "vless",
      "settings": { "clients": [ { "id": "u-0", "email": "alice", "flow": "xtls-rprx-vision" } ] },
      "streamSettings": {
        "security": "reality",
        "realitySettings": { "dest": "www.example.com:443", "serverNames": ["www.example.com"] }
      }
    }
  ]
}"#;

    const HYSTERIA: &str = r#"{ "listen": ":8443", "auth": { "type": "userpass", "userpass": { "alice": "pw" } } }"#;

    const MTPROTO: &str = "PORT = 443\nTLS_DOMAIN = \"www.example.com\"\nUSERS = {}\n";

    struct Files {
        _dir: tempfile::TempDir,
        xray: PathBuf,
        hysteria: PathBuf,
        mtproto: PathBuf,
        backend: ProxyConfigFiles,
    }

    fn files() -> Files {
        let dir = tempfile::tempdir().unwrap();
        let xray = dir.path().join("xray.json");
        let hysteria = dir.path().join("hysteria.json");
        let mtproto = dir.path().join("config.py");
        std::fs::write(&xray, XRAY).unwrap();
        std::fs::write(&hysteria, HYSTERIA).unwrap();
        std::fs::write(&mtproto, MTPROTO).unwrap();
        let backend = ProxyConfigFiles::new(&xray, &hysteria, &mtproto);

        Files {
            _dir: dir,
            xray,
            hysteria,
            mtproto,
            backend,
        }
    }

    fn json_at(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn all_enabled() -> RainbowConfig {
        toml::from_str(
            "[CERT]\nFAKE_SNI = \"www.example.com\"\n[XRAY]\nIS_ENABLED = true\n\
             [MTPROTO]\nIS_ENABLED = true\n[HYSTERIA]\nIS_ENABLED = true\n",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn xray_sni_reset_rewrites_reality() {
        let f = files();
        f.backend.reset_sni(ProxyKind::Xray, "cdn.example.net").await.unwrap();

        let doc = json_at(&f.xray);
        let reality = &doc["inbounds"][1]["streamSettings"]["realitySettings"];
        assert_eq!(reality["dest"], "cdn.example.net:443");
        assert_eq!(reality["serverNames"], json!(["cdn.example.net"]));
        assert_eq!(doc["inbounds"][0]["tag"], "api");
    }

    #[tokio::test]
    async fn mtproto_sni_reset_patches_tls_domain() {
        let f = files();
        f.backend
            .reset_sni(ProxyKind::Mtproto, "cdn.example.net")
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&f.mtproto).unwrap(),
            "PORT = 443\nTLS_DOMAIN = \"cdn.example.net\"\nUSERS = {}\n"
        );
    }

    #[tokio::test]
    async fn users_are_added_and_removed_on_enabled_proxies() {
        let f = files();
        let config = all_enabled();
        let mut bob = User::generate("bob");
        bob.password = "secret".to_string();

        f.backend.add_user(&config, &bob).await.unwrap();
        let clients = json_at(&f.xray)["inbounds"][1]["settings"]["clients"].clone();
        assert_eq!(clients.as_array().unwrap().len(), 2);
        assert_eq!(clients[1]["id"], bob.uuid.as_str());
        assert_eq!(json_at(&f.hysteria)["auth"]["userpass"]["bob"], "secret");

        f.backend.remove_user(&config, "alice").await.unwrap();
        let clients = json_at(&f.xray)["inbounds"][1]["settings"]["clients"].clone();
        assert_eq!(clients.as_array().unwrap().len(), 1);
        assert_eq!(clients[0]["email"], "bob");
        assert!(json_at(&f.hysteria)["auth"]["userpass"].get("alice").is_none());
    }

    #[tokio::test]
    async fn disabled_proxies_are_not_touched() {
        let f = files();
        let mut config = all_enabled();
        config.hysteria.is_enabled = false;

        f.backend
            .add_user(&config, &User::generate("carol"))
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&f.hysteria).unwrap(), HYSTERIA);
    }

    #[tokio::test]
    async fn xray_without_vless_inbound_is_rejected() {
        let f = files();
        std::fs::write(&f.xray, r#"{ "inbounds": [] }"#).unwrap();

        let err = f
            .backend
            .reset_sni(ProxyKind::Xray, "cdn.example.net")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
    }
}
