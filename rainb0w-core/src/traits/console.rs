//! Operator console abstraction
//!
//! The only blocking collaborator: every call waits for the operator.

use crate::error::CoreResult;

/// Message tone, mapped to a color by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

/// Interactive surface used by every dashboard screen
pub trait Console {
    /// Show `title` and `options`, block until one is picked and return its position.
    ///
    /// Fails with `ConsoleUnavailable` when there is no terminal and with
    /// `Interrupted` when the operator aborts.
    fn choose(&mut self, title: &str, options: &[String]) -> CoreResult<usize>;

    /// Ask for one line of free text
    fn prompt(&mut self, message: &str) -> CoreResult<String>;

    /// Wait until the operator acknowledges, then clear the screen
    fn pause(&mut self) -> CoreResult<()>;

    /// Clear the screen
    fn clear(&mut self) -> CoreResult<()>;

    /// Print one message
    fn say(&mut self, tone: Tone, message: &str) -> CoreResult<()>;
}
