//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 唯一允许修改 App 的地方。

use crate::message::{AppMessage, MenuMessage};
use crate::model::{App, Outcome};

/// 处理消息
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Menu(msg) => update_menu(app, msg),
        AppMessage::Interrupt => app.outcome = Some(Outcome::Interrupted),
        AppMessage::Noop => {}
    }
}

fn update_menu(app: &mut App, msg: MenuMessage) {
    let menu = &mut app.menu;
    match msg {
        MenuMessage::SelectPrevious => menu.select_previous(),
        MenuMessage::SelectNext => menu.select_next(),
        MenuMessage::SelectFirst => menu.select_first(),
        MenuMessage::SelectLast => menu.select_last(),
        MenuMessage::Jump(index) => menu.select(index),
        MenuMessage::Confirm => {
            if !menu.options.is_empty() {
                app.outcome = Some(Outcome::Picked(menu.selected));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuState;

    fn app(n: usize) -> App {
        let options: Vec<String> = (1..=n).map(|i| format!("Option {i}")).collect();
        App::new(MenuState::new("Select any option:", &options))
    }

    #[test]
    fn selection_wraps_around() {
        let mut app = app(3);

        update(&mut app, AppMessage::Menu(MenuMessage::SelectPrevious));
        assert_eq!(app.menu.selected, 2);

        update(&mut app, AppMessage::Menu(MenuMessage::SelectNext));
        assert_eq!(app.menu.selected, 0);
    }

    #[test]
    fn confirm_reports_the_highlighted_option() {
        let mut app = app(4);
        update(&mut app, AppMessage::Menu(MenuMessage::SelectLast));
        update(&mut app, AppMessage::Menu(MenuMessage::SelectPrevious));
        assert!(app.outcome.is_none());

        update(&mut app, AppMessage::Menu(MenuMessage::Confirm));
        assert_eq!(app.outcome, Some(Outcome::Picked(2)));
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut app = app(2);
        update(&mut app, AppMessage::Menu(MenuMessage::Jump(1)));
        update(&mut app, AppMessage::Menu(MenuMessage::Jump(7)));

        assert_eq!(app.menu.selected, 1);
    }

    #[test]
    fn empty_menu_never_confirms() {
        let mut app = app(0);
        update(&mut app, AppMessage::Menu(MenuMessage::SelectNext));
        update(&mut app, AppMessage::Menu(MenuMessage::Confirm));

        assert!(app.outcome.is_none());
    }

    #[test]
    fn interrupt_ends_the_menu() {
        let mut app = app(2);
        update(&mut app, AppMessage::Interrupt);

        assert_eq!(app.outcome, Some(Outcome::Interrupted));
    }
}
