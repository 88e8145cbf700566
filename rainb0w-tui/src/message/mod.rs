//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! Event 层把按键翻译为 AppMessage，Update 层消费 AppMessage 修改 Model。
//!
//!     按键 ──▶ handle_event() ──▶ AppMessage ──▶ update() ──▶ App

/// 菜单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 数字键直接定位（从 0 开始）
    Jump(usize),
    /// 确认当前选项
    Confirm,
}

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 菜单相关消息
    Menu(MenuMessage),
    /// 操作员中断（Ctrl+C）
    Interrupt,
    /// 无操作（用于忽略未处理的事件）
    Noop,
}
