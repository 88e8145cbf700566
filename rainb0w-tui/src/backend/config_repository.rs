//! 设备配置仓库
//!
//! 使用 TOML 文件存储设备配置
//! 实现 rainb0w-core 的 ConfigRepository trait

use std::path::PathBuf;

use async_trait::async_trait;
use rainb0w_core::traits::ConfigRepository;
use rainb0w_core::types::RainbowConfig;
use rainb0w_core::{CoreError, CoreResult};
use tokio::fs;

/// 基于 TOML 文件的设备配置仓库
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigRepository for TomlConfigRepository {
    async fn load(&self) -> CoreResult<RainbowConfig> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", self.path.display())))?;

        toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", self.path.display())))
    }

    async fn save(&self, config: &RainbowConfig) -> CoreResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.path.display())))?;

        log::debug!("Appliance config written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[CERT]
FAKE_SNI = "www.example.com"
CERT_DIR = "/etc/rainb0w/certs"

[SERVER]
PUBLIC_IP = "203.0.113.7"

[XRAY]
IS_ENABLED = true
PORT = 443
PUBLIC_KEY = "pk"
SHORT_ID = "ab"

[HYSTERIA]
IS_ENABLED = false

[DNS]
UPSTREAM = "1.1.1.1"
"#;

    #[tokio::test]
    async fn round_trip_keeps_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainb0w_config.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let repo = TomlConfigRepository::new(&path);

        let mut config = repo.load().await.unwrap();
        assert_eq!(config.fake_sni(), "www.example.com");
        assert!(config.xray.is_enabled);
        assert!(!config.mtproto.is_enabled);

        config.cert.fake_sni = "cdn.example.net".to_string();
        repo.save(&config).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("cdn.example.net"));
        assert!(written.contains("CERT_DIR"));
        assert!(written.contains("UPSTREAM"));
    }

    #[tokio::test]
    async fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlConfigRepository::new(dir.path().join("absent.toml"));

        assert!(matches!(repo.load().await, Err(CoreError::ConfigError(_))));
    }
}
