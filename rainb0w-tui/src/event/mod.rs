//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             ↑ / k           → MenuMessage::SelectPrevious
//!             ↓ / j           → MenuMessage::SelectNext
//!             Home / End      → MenuMessage::SelectFirst / SelectLast
//!             1-9             → MenuMessage::Jump(n - 1)
//!             Enter           → MenuMessage::Confirm
//!             Ctrl+C          → AppMessage::Interrupt
//!             其余            → AppMessage::Noop
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
