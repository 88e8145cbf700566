//! 外部脚本执行器
//!
//! 实现 rainb0w-core 的 ActionInvoker trait。
//! 脚本继承控制台的 stdin/stdout/stderr，操作员能直接看到脚本输出。

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use rainb0w_core::traits::ActionInvoker;
use rainb0w_core::types::{Script, ScriptStatus};
use rainb0w_core::{CoreError, CoreResult};
use tokio::process::Command;

/// 运行脚本根目录下的 shell 脚本
pub struct ShellActionInvoker {
    scripts_dir: PathBuf,
}

impl ShellActionInvoker {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }

    /// 脚本的绝对路径
    pub fn script_path(&self, script: Script) -> PathBuf {
        self.scripts_dir.join(script.relative_path())
    }
}

#[async_trait]
impl ActionInvoker for ShellActionInvoker {
    async fn run(&self, script: Script, args: &[String]) -> CoreResult<ScriptStatus> {
        let path = self.script_path(script);
        log::debug!("Spawning {} {args:?}", path.display());

        let status = Command::new(&path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| CoreError::ConfigError(format!("Cannot run {}: {e}", path.display())))?;

        Ok(status.into())
    }
}
