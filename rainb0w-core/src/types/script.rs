//! 外部脚本标识与退出状态

use std::fmt;
use std::path::PathBuf;

/// 控制台可调用的外部脚本
///
/// 路径相对于脚本根目录（默认 `<cwd>/lib/shell`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    TuneKernelNet,
    RevertKernelNet,
    EnableZram,
    DisableZram,
    BlockPorn,
    UnblockPorn,
    GenX509Cert,
    Uninstall,
    Update,
}

impl Script {
    /// 相对于脚本根目录的路径
    pub fn relative_path(self) -> PathBuf {
        let path = match self {
            Self::TuneKernelNet => "performance/tune_kernel_net.sh",
            Self::RevertKernelNet => "performance/revert_kernel_net.sh",
            Self::EnableZram => "performance/enable_zram.sh",
            Self::DisableZram => "performance/disable_zram.sh",
            Self::BlockPorn => "access_control/block_porn.sh",
            Self::UnblockPorn => "access_control/unblock_porn.sh",
            Self::GenX509Cert => "cryptography/gen_x509_cert.sh",
            Self::Uninstall => "uninstall.sh",
            Self::Update => "update.sh",
        };
        PathBuf::from(path)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_path().display())
    }
}

/// 脚本退出状态
///
/// `code` is `None` when the script was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStatus {
    pub code: Option<i32>,
}

impl ScriptStatus {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ScriptStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}
