//! 终端控制台
//!
//! 实现 rainb0w-core 的 Console trait：
//!     choose        ratatui 全屏菜单（备用屏幕，结束后恢复）
//!     prompt/pause  主屏幕上的行输入
//!     say/clear     crossterm 直接输出到主屏幕

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use rainb0w_core::traits::{Console, Tone};
use rainb0w_core::{CoreError, CoreResult};

use crate::app;
use crate::model::{App, MenuState, Outcome};
use crate::util::{init_terminal, restore_terminal};
use crate::view::theme::colors;

const PAUSE_MESSAGE: &str = "Press Enter to continue...";

fn unavailable(e: impl std::fmt::Display) -> CoreError {
    CoreError::ConsoleUnavailable(e.to_string())
}

/// 交互终端
pub struct TuiConsole {
    stdout: io::Stdout,
}

impl TuiConsole {
    /// stdin 与 stdout 都必须是终端
    pub fn new() -> CoreResult<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(CoreError::ConsoleUnavailable(
                "stdin and stdout must be attached to a terminal".to_string(),
            ));
        }
        Ok(Self {
            stdout: io::stdout(),
        })
    }

    fn read_line(&mut self) -> CoreResult<String> {
        self.stdout.flush().map_err(unavailable)?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(unavailable)?;
        if read == 0 {
            return Err(unavailable("stdin was closed"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// 消息色调对应的终端颜色
fn tone_color(tone: Tone) -> Option<Color> {
    let c = colors();
    let color = match tone {
        Tone::Plain => return None,
        Tone::Info => c.info,
        Tone::Success => c.success,
        Tone::Warning => c.warning,
        Tone::Error => c.error,
    };

    Some(match color {
        ratatui::style::Color::Rgb(r, g, b) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    })
}

impl Console for TuiConsole {
    fn choose(&mut self, title: &str, options: &[String]) -> CoreResult<usize> {
        let mut app = App::new(MenuState::new(title, options));

        let mut terminal = init_terminal().map_err(unavailable)?;
        let result = app::run(&mut terminal, &mut app);
        // 无论成功失败都先恢复终端
        restore_terminal(&mut terminal).map_err(unavailable)?;

        match result.map_err(unavailable)? {
            Outcome::Picked(index) => {
                log::debug!("Picked {:?} from {:?}", options.get(index), title.trim());
                Ok(index)
            }
            Outcome::Interrupted => Err(CoreError::Interrupted),
        }
    }

    fn prompt(&mut self, message: &str) -> CoreResult<String> {
        queue!(self.stdout, Print(message)).map_err(unavailable)?;
        self.read_line()
    }

    fn pause(&mut self) -> CoreResult<()> {
        queue!(self.stdout, Print("\n"), Print(PAUSE_MESSAGE)).map_err(unavailable)?;
        self.read_line()?;
        self.clear()
    }

    fn clear(&mut self) -> CoreResult<()> {
        queue!(
            self.stdout,
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            MoveTo(0, 0)
        )
        .map_err(unavailable)?;
        self.stdout.flush().map_err(unavailable)
    }

    fn say(&mut self, tone: Tone, message: &str) -> CoreResult<()> {
        let written = match tone_color(tone) {
            Some(color) => queue!(
                self.stdout,
                SetForegroundColor(color),
                Print(message),
                ResetColor,
                Print("\n")
            ),
            None => queue!(self.stdout, Print(message), Print("\n")),
        };
        written.map_err(unavailable)?;
        self.stdout.flush().map_err(unavailable)
    }
}
