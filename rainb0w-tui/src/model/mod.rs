//!
//! src/model/mod.rs
//! Model 层：菜单状态定义
//!
//! Model 层是菜单界面的 “唯一真相来源”。
//! 这一层只包含纯数据结构；所有状态变更都通过 Update 层来触发。
//!
//! 每次 `Console::choose` 都会创建一个新的 App，菜单确认或被中断后即被丢弃：
//!
//! App {
//!
//!     menu: MenuState {
//!         title,                  // 菜单标题（可多行，例如卸载警告）
//!         options,                // 选项标签
//!         selected = 0,           // 当前高亮的选项
//!     },
//!     outcome = None,             // 主循环看到 Some(..) 时返回
//!
//! }

/// 菜单的结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 操作员确认了某一项
    Picked(usize),
    /// Ctrl+C
    Interrupted,
}

/// 单个菜单的状态
#[derive(Debug, Clone)]
pub struct MenuState {
    pub title: String,
    pub options: Vec<String>,
    pub selected: usize,
}

impl MenuState {
    pub fn new(title: impl Into<String>, options: &[String]) -> Self {
        Self {
            title: title.into(),
            options: options.to_vec(),
            selected: 0,
        }
    }

    /// 选择上一项（到顶后回到最后一项）
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.options.len() - 1);
    }

    /// 选择下一项（到底后回到第一项）
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.options.len().saturating_sub(1);
    }

    /// 直接跳到某一项，越界时忽略
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }
}

/// 菜单界面状态
#[derive(Debug, Clone)]
pub struct App {
    pub menu: MenuState,
    pub outcome: Option<Outcome>,
}

impl App {
    pub fn new(menu: MenuState) -> Self {
        Self {
            menu,
            outcome: None,
        }
    }
}
