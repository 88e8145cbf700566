//! 会话状态
//!
//! `restart_pending` is the only mutable state shared by all screens. It
//! starts false and is only ever raised; the process exit is the reset.

/// 交互会话
#[derive(Debug, Default)]
pub struct Session {
    restart_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 持久化配置是否已与运行中的服务不一致
    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    /// 标记需要 "Apply Changes"
    pub fn mark_restart_pending(&mut self) {
        if !self.restart_pending {
            log::info!("Pending changes recorded; services need to be restarted");
        }
        self.restart_pending = true;
    }
}
