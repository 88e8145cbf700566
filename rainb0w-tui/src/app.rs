//!
//! app.rs
//! 菜单主循环
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if let Some(outcome) = app.outcome { return }   // 已确认或被中断
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 250ms
//!         let msg = handle_event(event);              // 翻译为消息
//!         update::update(&mut app , msg)              // 更新状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::{App, Outcome};
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 运行菜单主循环，直到操作员确认或中断
pub fn run(terminal: &mut Term, app: &mut App) -> Result<Outcome> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否已有结果
        if let Some(outcome) = app.outcome {
            return Ok(outcome);
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event);

            // 5. 更新状态
            update::update(app, msg);
        }
    }
}
