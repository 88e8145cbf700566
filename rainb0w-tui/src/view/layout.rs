//! 菜单布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;

use super::theme::{colors, Styles};

/// 渲染菜单
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let title_rows = title_height(&app.menu.title, size.width);

    // 三层布局：标题 + 选项列表 + 快捷键提示
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_rows),   // 标题
            Constraint::Min(3),               // 选项
            Constraint::Length(1),            // 提示栏
        ])
        .split(size);

    render_title(app, frame, main_layout[0]);
    render_options(app, frame, main_layout[1]);
    render_hints(frame, main_layout[2]);
}

/// 折行后的标题行数 + 上下边框
fn title_height(title: &str, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let lines: usize = title
        .trim_matches('\n')
        .lines()
        .map(|line| line.chars().count().div_ceil(inner).max(1))
        .sum();
    u16::try_from(lines.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_title(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(app.menu.title.trim_matches('\n'))
        .style(Styles::title())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Rainb0w Dashboard ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        );
    frame.render_widget(title, area);
}

fn render_options(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let items: Vec<ListItem> = app
        .menu
        .options
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_selected = i == app.menu.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(format!("{prefix}{label}"), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.muted)),
    );

    let mut state = ListState::default().with_selected(Some(app.menu.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = [("↑↓", "Move"), ("1-9", "Jump"), ("Enter", "Select"), ("Ctrl+C", "Quit")];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {key} "), Styles::hint_key()),
                Span::styled(format!("{desc}  "), Styles::hint_desc()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::model::MenuState;

    #[test]
    fn renders_title_and_highlighted_option() {
        let options = vec!["SNI Settings".to_string(), "Exit".to_string()];
        let mut app = App::new(MenuState::new("Choose any options to proceed:", &options));
        app.menu.selected = 1;

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Choose any options to proceed:"));
        assert!(text.contains("  SNI Settings"));
        assert!(text.contains("▶ Exit"));
    }

    #[test]
    fn multi_line_titles_get_room() {
        assert_eq!(title_height("Select any option:", 80), 3);
        assert_eq!(title_height("\nline one\nline two\n\nDo you confirm?\n", 80), 6);
        // 12 chars in a 10-wide box wrap onto two rows
        assert_eq!(title_height("abcdefghijkl", 12), 4);
    }
}
