//! Blocky DNS 过滤配置
//!
//! 实现 rainb0w-core 的 DnsFilter trait。
//! 屏蔽状态 = `blocking.clientGroupsBlock.default` 列表中是否含有 `porn` 分组。
//!
//! 状态始终由 `serde_yaml` 解析得到。修改时，块序列写法走行级修改以保留注释，
//! 其它写法（flow 序列、缺失的分组等）整体重新序列化。

use std::path::PathBuf;

use async_trait::async_trait;
use rainb0w_core::traits::DnsFilter;
use rainb0w_core::{CoreError, CoreResult};
use serde_yaml::{Mapping, Value};
use tokio::fs;

const BLOCKING_KEY: &str = "blocking";
const GROUPS_KEY: &str = "clientGroupsBlock";
const DEFAULT_KEY: &str = "default";
const PORN_GROUP: &str = "porn";

/// 基于 blocky 配置文件的 DNS 过滤器
pub struct BlockyDnsFilter {
    path: PathBuf,
}

impl BlockyDnsFilter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> CoreResult<String> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.path.display())))
    }

    fn parse(&self, content: &str) -> CoreResult<Value> {
        serde_yaml::from_str(content)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", self.path.display())))
    }

    fn malformed(&self) -> CoreError {
        CoreError::ConfigError(format!(
            "{}: {BLOCKING_KEY}.{GROUPS_KEY}.{DEFAULT_KEY} is not a list",
            self.path.display()
        ))
    }

    /// 缺失或为空的 default 分组视为未屏蔽
    fn porn_listed(&self, doc: &Value) -> CoreResult<bool> {
        let groups = doc
            .get(BLOCKING_KEY)
            .and_then(|blocking| blocking.get(GROUPS_KEY))
            .and_then(|client_groups| client_groups.get(DEFAULT_KEY));

        match groups {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Sequence(items)) => Ok(items
                .iter()
                .any(|item| item.as_str() == Some(PORN_GROUP))),
            Some(_) => Err(self.malformed()),
        }
    }

    /// 在解析后的文档上修改分组并整体序列化
    fn rewrite(&self, doc: &mut Value, blocked: bool) -> CoreResult<String> {
        if doc.is_null() {
            *doc = Value::Mapping(Mapping::new());
        }
        let client_groups = doc
            .as_mapping_mut()
            .and_then(|root| child_mapping(root, BLOCKING_KEY))
            .and_then(|blocking| child_mapping(blocking, GROUPS_KEY))
            .ok_or_else(|| self.malformed())?;

        if !matches!(client_groups.get(DEFAULT_KEY), Some(Value::Sequence(_))) {
            client_groups.insert(Value::from(DEFAULT_KEY), Value::Sequence(Vec::new()));
        }
        if let Some(Value::Sequence(items)) = client_groups.get_mut(DEFAULT_KEY) {
            if blocked {
                items.push(Value::from(PORN_GROUP));
            } else {
                items.retain(|item| item.as_str() != Some(PORN_GROUP));
            }
        }

        serde_yaml::to_string(doc)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", self.path.display())))
    }
}

#[async_trait]
impl DnsFilter for BlockyDnsFilter {
    async fn is_porn_blocked(&self) -> CoreResult<bool> {
        let content = self.read().await?;
        self.porn_listed(&self.parse(&content)?)
    }

    async fn set_porn_blocking(&self, blocked: bool) -> CoreResult<()> {
        let content = self.read().await?;
        let mut doc = self.parse(&content)?;

        if self.porn_listed(&doc)? == blocked {
            return Ok(());
        }

        // 行级修改的结果须解析回期望的状态，否则退回整体序列化
        let line_patch = patch_block_sequence(&content, blocked).filter(|patched| {
            self.parse(patched)
                .and_then(|patched_doc| self.porn_listed(&patched_doc))
                .is_ok_and(|listed| listed == blocked)
        });
        let patched = match line_patch {
            Some(patched) => patched,
            None => {
                log::debug!(
                    "{} has no block-style default group; rewriting the document",
                    self.path.display()
                );
                self.rewrite(&mut doc, blocked)?
            }
        };

        fs::write(&self.path, patched)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.path.display())))?;

        log::info!(
            "Porn DNS group {} in {}",
            if blocked { "added to" } else { "removed from" },
            self.path.display()
        );
        Ok(())
    }
}

/// 取得名为 `key` 的子映射，缺失或为 null 时创建
fn child_mapping<'a>(parent: &'a mut Mapping, key: &str) -> Option<&'a mut Mapping> {
    if matches!(parent.get(key), None | Some(Value::Null)) {
        parent.insert(Value::from(key), Value::Mapping(Mapping::new()));
    }
    parent.get_mut(key)?.as_mapping_mut()
}

/// 对 `default:` 后跟 `- item` 行的写法做行级增删；其它写法返回 None
fn patch_block_sequence(content: &str, blocked: bool) -> Option<String> {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let view: Vec<&str> = content.lines().collect();
    let group = DefaultGroup::find(&view)?;

    if blocked {
        lines.insert(group.end, format!("{}- {PORN_GROUP}", group.item_indent));
    } else {
        let items: Vec<usize> = (group.start..group.end)
            .filter(|&i| item_value(view[i]) == Some(PORN_GROUP))
            .collect();
        for idx in items.into_iter().rev() {
            lines.remove(idx);
        }
    }

    let mut patched = lines.join("\n");
    if content.ends_with('\n') {
        patched.push('\n');
    }
    Some(patched)
}

/// `default:` 分组在文件中的位置
#[derive(Debug, PartialEq, Eq)]
struct DefaultGroup {
    /// 第一个列表项（或本应出现的位置）
    start: usize,
    /// 最后一个列表项之后
    end: usize,
    item_indent: String,
}

impl DefaultGroup {
    fn find(lines: &[&str]) -> Option<Self> {
        let groups_key = format!("{GROUPS_KEY}:");
        let default_key = format!("{DEFAULT_KEY}:");

        let groups = lines
            .iter()
            .position(|l| strip_comment(l).trim_start() == groups_key)?;
        let groups_indent = indent(lines[groups]);

        let header = (groups + 1..lines.len())
            .take_while(|&i| lines[i].trim().is_empty() || indent(lines[i]) > groups_indent)
            .find(|&i| strip_comment(lines[i]).trim_start() == default_key)?;
        let header_indent = indent(lines[header]);

        let start = header + 1;
        let mut end = start;
        while end < lines.len()
            && item_value(lines[end]).is_some()
            && indent(lines[end]) >= header_indent
        {
            end += 1;
        }

        let item_indent = if end > start {
            lines[start][..indent(lines[start])].to_string()
        } else {
            format!("{}  ", &lines[header][..header_indent])
        };

        Some(Self {
            start,
            end,
            item_indent,
        })
    }
}

fn indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// `default: # all clients` -> `default:`
fn strip_comment(line: &str) -> &str {
    line.split(" #").next().unwrap_or_default().trim_end()
}

/// `  - "porn"  # comment` -> `porn`
fn item_value(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('-')?;
    let value = rest.split('#').next().unwrap_or_default().trim();
    Some(value.trim_matches(|c: char| c == '"' || c == '\''))
}
