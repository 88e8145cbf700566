//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, MenuMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::INTERRUPT.matches(&key) {
        return AppMessage::Interrupt;
    }

    let msg = if DefaultKeymap::NAV_UP.matches(&key) || DefaultKeymap::NAV_UP_ALT.matches(&key) {
        MenuMessage::SelectPrevious
    } else if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_DOWN_ALT.matches(&key)
    {
        MenuMessage::SelectNext
    } else if DefaultKeymap::NAV_FIRST.matches(&key) {
        MenuMessage::SelectFirst
    } else if DefaultKeymap::NAV_LAST.matches(&key) {
        MenuMessage::SelectLast
    } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        MenuMessage::Confirm
    } else {
        match (key.modifiers, key.code) {
            // 1-9：跳到对应编号的选项
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                MenuMessage::Jump(c as usize - '1' as usize)
            }
            _ => return AppMessage::Noop,
        }
    };

    AppMessage::Menu(msg)
}
