//! 用户记录

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use toml::Table;

const PASSWORD_LEN: usize = 16;

/// 代理用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户名（在当前用户中唯一）
    pub name: String,
    /// Xray VLESS 客户端 ID
    pub uuid: String,
    /// Hysteria 密码
    pub password: String,
    #[serde(flatten)]
    pub extra: Table,
}

impl User {
    /// 以随机凭证创建新用户
    pub fn generate(name: impl Into<String>) -> Self {
        let password = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(PASSWORD_LEN)
            .map(char::from)
            .collect();

        Self {
            name: name.into(),
            uuid: uuid::Uuid::new_v4().to_string(),
            password,
            extra: Table::new(),
        }
    }
}

/// 用户列表文件（rainb0w_users.toml）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_users_get_fresh_credentials() {
        let a = User::generate("alice");
        let b = User::generate("alice");

        assert_eq!(a.name, "alice");
        assert_eq!(a.password.len(), PASSWORD_LEN);
        assert!(a.password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(uuid::Uuid::parse_str(&a.uuid).is_ok());
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn missing_users_key_reads_as_empty_list() {
        let list: UserList = toml::from_str("").unwrap();
        assert!(list.users.is_empty());
    }
}
