//! Backup, uninstall and update screens

use crate::error::CoreResult;
use crate::traits::Tone;

use super::menus;
use super::{Dashboard, ExitStatus, Screen, Transition};

impl Dashboard<'_> {
    pub(super) async fn backup_screen(&mut self) -> CoreResult<Transition> {
        let destination = self.backup.destination().display().to_string();
        self.console.say(
            Tone::Info,
            &format!("Backing up users and config files to '{destination}'"),
        )?;

        self.backup.backup().await?;

        self.console.say(Tone::Success, "Backup finished successfully.")?;
        self.console.pause()?;
        Ok(Transition::Goto(Screen::Root))
    }

    /// Confirmed uninstall ends the session with status 0 after one acknowledgment pause
    pub(super) async fn uninstall_screen(&mut self) -> CoreResult<Transition> {
        if !self.pick(&menus::uninstall_menu())? {
            return Ok(Transition::Goto(Screen::Root));
        }

        self.maintenance.uninstall().await?;
        self.console.pause()?;
        Ok(Transition::Exit(ExitStatus::Normal))
    }

    /// The update script restarts the whole program, so the session just ends
    pub(super) async fn update_screen(&mut self) -> CoreResult<Transition> {
        if !self.pick(&menus::update_menu())? {
            return Ok(Transition::Goto(Screen::Root));
        }

        self.maintenance.update().await?;
        Ok(Transition::Exit(ExitStatus::Normal))
    }
}
