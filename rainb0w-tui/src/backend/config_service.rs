//! 配置服务
//!
//! 控制台自身的设置：设备文件、脚本与日志的位置。
//!
//! 查找顺序：
//!     home      = $RAINB0W_HOME，否则 $HOME/Rainb0w_Home
//!     设置文件   = $RAINB0W_CONSOLE_CONFIG，否则 <home>/console.toml
//!
//! 设置文件中的每一项都是可选的，缺省值都挂在 home 下。

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rainb0w_core::types::AppliancePaths;
use serde::Deserialize;

pub const HOME_ENV: &str = "RAINB0W_HOME";
pub const SETTINGS_ENV: &str = "RAINB0W_CONSOLE_CONFIG";

const HOME_DIR_NAME: &str = "Rainb0w_Home";
const BACKUP_DIR_NAME: &str = "Rainb0w_Backup";
const SETTINGS_FILE_NAME: &str = "console.toml";
const RENEWAL_SCRIPT: &str = "/usr/libexec/rainb0w/renew_selfsigned_cert.sh";

/// 解析后的控制台设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub home_dir: PathBuf,
    pub config_file: PathBuf,
    pub users_file: PathBuf,
    pub client_configs_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub cert_renewal_script: PathBuf,
    /// 外部脚本根目录
    pub scripts_dir: PathBuf,
    pub xray_config_file: PathBuf,
    pub hysteria_config_file: PathBuf,
    pub mtproto_config_file: PathBuf,
    pub blocky_config_file: PathBuf,
    pub log_dir: PathBuf,
}

impl ConsoleSettings {
    /// 核心层使用的路径
    pub fn appliance_paths(&self) -> AppliancePaths {
        AppliancePaths {
            config_file: self.config_file.clone(),
            users_file: self.users_file.clone(),
            client_configs_dir: self.client_configs_dir.clone(),
            backup_dir: self.backup_dir.clone(),
            cert_renewal_script: self.cert_renewal_script.clone(),
        }
    }
}

/// `console.toml` 的内容，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsOverrides {
    config_file: Option<PathBuf>,
    users_file: Option<PathBuf>,
    client_configs_dir: Option<PathBuf>,
    backup_dir: Option<PathBuf>,
    cert_renewal_script: Option<PathBuf>,
    scripts_dir: Option<PathBuf>,
    xray_config_file: Option<PathBuf>,
    hysteria_config_file: Option<PathBuf>,
    mtproto_config_file: Option<PathBuf>,
    blocky_config_file: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

/// 本地配置服务
pub struct LocalConfigService {
    user_home: PathBuf,
    home_dir: PathBuf,
    cwd: PathBuf,
    /// 显式指定的设置文件（必须存在）
    settings_file: Option<PathBuf>,
}

impl LocalConfigService {
    /// 从进程环境构建
    pub fn from_env() -> Result<Self> {
        let user_home = dirs::home_dir().context("Cannot determine the home directory")?;
        let home_dir = env::var_os(HOME_ENV)
            .map_or_else(|| user_home.join(HOME_DIR_NAME), PathBuf::from);
        let cwd = env::current_dir().context("Cannot determine the working directory")?;

        Ok(Self {
            user_home,
            home_dir,
            cwd,
            settings_file: env::var_os(SETTINGS_ENV).map(PathBuf::from),
        })
    }

    /// 加载设置
    pub fn load(&self) -> Result<ConsoleSettings> {
        let overrides = match &self.settings_file {
            Some(path) => read_overrides(path)?,
            None => {
                let path = self.home_dir.join(SETTINGS_FILE_NAME);
                if path.is_file() {
                    read_overrides(&path)?
                } else {
                    SettingsOverrides::default()
                }
            }
        };

        Ok(self.resolve(overrides))
    }

    fn resolve(&self, o: SettingsOverrides) -> ConsoleSettings {
        let home = &self.home_dir;

        ConsoleSettings {
            config_file: o.config_file.unwrap_or_else(|| home.join("rainb0w_config.toml")),
            users_file: o.users_file.unwrap_or_else(|| home.join("rainb0w_users.toml")),
            client_configs_dir: o.client_configs_dir.unwrap_or_else(|| home.join("clients")),
            backup_dir: o
                .backup_dir
                .unwrap_or_else(|| self.user_home.join(BACKUP_DIR_NAME)),
            cert_renewal_script: o
                .cert_renewal_script
                .unwrap_or_else(|| PathBuf::from(RENEWAL_SCRIPT)),
            scripts_dir: o
                .scripts_dir
                .unwrap_or_else(|| self.cwd.join("lib").join("shell")),
            xray_config_file: o
                .xray_config_file
                .unwrap_or_else(|| home.join("xray/etc/xray.json")),
            hysteria_config_file: o
                .hysteria_config_file
                .unwrap_or_else(|| home.join("hysteria/etc/config.json")),
            mtproto_config_file: o
                .mtproto_config_file
                .unwrap_or_else(|| home.join("mtprotopy/config.py")),
            blocky_config_file: o
                .blocky_config_file
                .unwrap_or_else(|| home.join("blocky/config.yml")),
            log_dir: o.log_dir.unwrap_or_else(|| home.join("logs")),
            home_dir: home.clone(),
        }
    }
}

fn read_overrides(path: &Path) -> Result<SettingsOverrides> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read console settings {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid console settings {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(root: &Path, settings_file: Option<PathBuf>) -> LocalConfigService {
        LocalConfigService {
            user_home: root.to_path_buf(),
            home_dir: root.join(HOME_DIR_NAME),
            cwd: root.join("checkout"),
            settings_file,
        }
    }

    #[test]
    fn defaults_live_under_home() {
        let root = tempfile::tempdir().unwrap();
        let settings = service(root.path(), None).load().unwrap();
        let home = root.path().join(HOME_DIR_NAME);

        assert_eq!(settings.config_file, home.join("rainb0w_config.toml"));
        assert_eq!(settings.users_file, home.join("rainb0w_users.toml"));
        assert_eq!(settings.backup_dir, root.path().join(BACKUP_DIR_NAME));
        assert_eq!(settings.scripts_dir, root.path().join("checkout/lib/shell"));
        assert_eq!(settings.cert_renewal_script, PathBuf::from(RENEWAL_SCRIPT));
    }

    #[test]
    fn console_toml_in_home_overrides_paths() {
        let root = tempfile::tempdir().unwrap();
        let home = root.path().join(HOME_DIR_NAME);
        fs::create_dir_all(&home).unwrap();
        fs::write(
            home.join(SETTINGS_FILE_NAME),
            "scripts_dir = \"/opt/rainb0w/shell\"\nbackup_dir = \"/srv/backup\"\n",
        )
        .unwrap();

        let settings = service(root.path(), None).load().unwrap();

        assert_eq!(settings.scripts_dir, PathBuf::from("/opt/rainb0w/shell"));
        assert_eq!(settings.backup_dir, PathBuf::from("/srv/backup"));
        assert_eq!(settings.log_dir, home.join("logs"));
    }

    #[test]
    fn explicit_settings_file_must_exist() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope.toml");

        assert!(service(root.path(), Some(missing)).load().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("console.toml");
        fs::write(&file, "scirpts_dir = \"/typo\"\n").unwrap();

        assert!(service(root.path(), Some(file)).load().is_err());
    }
}
