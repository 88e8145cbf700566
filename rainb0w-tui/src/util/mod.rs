//!
//! src/util/mod.rs
//! Util 层：终端与日志
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志文件
//!         mod terminal;       // 终端初始化与恢复
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个菜单单独进入、离开一次备用屏幕：
//!
//!         init_terminal()
//!             · enable_raw_mode()                     关闭行缓冲与回显，逐键读取
//!             · execute!(stdout, EnterAlternateScreen) 切换到备用屏幕
//!
//!         app::run()                                  菜单主循环
//!
//!         restore_terminal()
//!             · disable_raw_mode()
//!             · execute!(.., LeaveAlternateScreen)    回到主屏幕
//!             · show_cursor()
//!
//!     注意：无论菜单是确认、中断还是出错，都必须恢复终端，
//!           否则后续的脚本输出与文本提示无法正常显示。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
