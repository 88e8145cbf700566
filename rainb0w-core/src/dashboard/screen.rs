//! 屏幕标识与导航边

/// 导航图中的节点
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// 主菜单
    #[default]
    Root,
    /// SNI 设置
    Sni,
    /// 性能设置（自循环）
    Performance,
    /// 访问控制（自循环）
    AccessControls,
    /// 用户管理
    Users,
    /// 单个用户详情
    UserDetail { name: String },
    /// 备份
    Backup,
    /// 卸载确认
    Uninstall,
    /// 更新确认
    Update,
}

impl Screen {
    /// 日志中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Sni => "sni",
            Self::Performance => "performance",
            Self::AccessControls => "access-controls",
            Self::Users => "users",
            Self::UserDetail { .. } => "user-detail",
            Self::Backup => "backup",
            Self::Uninstall => "uninstall",
            Self::Update => "update",
        }
    }
}

/// 进程退出状态（与上层管理进程的约定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0：正常退出 / 卸载完成，无需重启
    Normal,
    /// 1：操作员选择 "Apply Changes"，由上层进程执行特权重启
    ApplyChanges,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::ApplyChanges => 1,
        }
    }
}

/// 每个屏幕处理完成后的去向
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// 进入下一个屏幕（可以是自身）
    Goto(Screen),
    /// 结束会话
    Exit(ExitStatus),
}
