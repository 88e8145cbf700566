//! 伪装域名校验

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, CoreResult};

const MAX_HOSTNAME_LEN: usize = 253;

static LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").ok());

/// 校验并规范化 SNI
///
/// 接受形如 `www.example.com` 的主机名：至少两段，每段 1-63 个字母、数字或连字符，
/// 不以连字符开头或结尾，总长不超过 253。返回小写形式。
pub fn validate_sni(input: &str) -> CoreResult<String> {
    let sni = input.trim().trim_end_matches('.').to_ascii_lowercase();

    if sni.is_empty() {
        return Err(CoreError::ValidationError("SNI cannot be empty".to_string()));
    }
    if sni.len() > MAX_HOSTNAME_LEN {
        return Err(CoreError::ValidationError(format!(
            "SNI is longer than {MAX_HOSTNAME_LEN} characters"
        )));
    }

    let labels: Vec<&str> = sni.split('.').collect();
    if labels.len() < 2 {
        return Err(CoreError::ValidationError(format!(
            "'{sni}' is not a fully qualified domain name"
        )));
    }

    let Some(label_re) = LABEL.as_ref() else {
        return Err(CoreError::ValidationError("hostname pattern unavailable".to_string()));
    };
    if let Some(bad) = labels.iter().find(|label| !label_re.is_match(label)) {
        return Err(CoreError::ValidationError(format!(
            "'{bad}' is not a valid label in '{sni}'"
        )));
    }

    Ok(sni)
}
