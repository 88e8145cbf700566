//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 App，从不修改它。
//!
//!     ┌──────── Rainb0w Dashboard ────────┐
//!     │ 标题                              │
//!     └───────────────────────────────────┘
//!     ┌───────────────────────────────────┐
//!     │ ▶ 选项 1                          │
//!     │   选项 2                          │
//!     └───────────────────────────────────┘
//!      ↑↓ Move  1-9 Jump  Enter Select  Ctrl+C Quit

mod layout;
pub mod theme;

pub use layout::render;
