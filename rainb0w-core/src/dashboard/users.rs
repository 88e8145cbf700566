//! 用户管理屏幕

use crate::error::CoreResult;
use crate::services::{AddUserOutcome, ClientInfo};
use crate::traits::Tone;

use super::menus::{self, UserDetailAction, UsersAction};
use super::{Dashboard, Screen, Transition};

impl Dashboard<'_> {
    pub(super) async fn users_screen(&mut self) -> CoreResult<Transition> {
        let names = self.users.list_names().await?;

        Ok(match self.pick(&menus::users_menu(&names))? {
            UsersAction::Open(name) => Transition::Goto(Screen::UserDetail { name }),
            UsersAction::Add => {
                self.add_user().await?;
                Transition::Goto(Screen::Users)
            }
            UsersAction::Back => Transition::Goto(Screen::Root),
        })
    }

    async fn add_user(&mut self) -> CoreResult<()> {
        let input = self.console.prompt("Enter a name for the new user: ")?;

        match self.users.add_user(&input).await? {
            AddUserOutcome::EmptyName => {
                self.console.say(Tone::Error, "User name cannot be empty!")?;
                self.console.pause()
            }
            AddUserOutcome::Duplicate(name) => {
                self.console.say(
                    Tone::Error,
                    &format!("A user with the given name '{name}' already exists!"),
                )?;
                self.console.pause()
            }
            AddUserOutcome::Added(user) => {
                self.session.mark_restart_pending();
                self.console
                    .say(Tone::Success, &format!("User '{}' was added", user.name))?;
                self.announce_deferred()
            }
        }
    }

    pub(super) async fn user_detail_screen(&mut self, name: String) -> CoreResult<Transition> {
        match self.pick(&menus::user_detail_menu(&name))? {
            UserDetailAction::ViewClientInfo => {
                self.console.clear()?;
                let info = self.users.client_info(&name).await?;
                self.print_client_info(&info)?;
                self.console.pause()?;
                Ok(Transition::Goto(Screen::Users))
            }
            UserDetailAction::Remove => {
                if self.pick(&menus::confirm_remove_menu(&name))? {
                    self.session.mark_restart_pending();
                    self.users.remove_user(&name).await?;
                    self.console.clear()?;
                    Ok(Transition::Goto(Screen::Users))
                } else {
                    Ok(Transition::Goto(Screen::UserDetail { name }))
                }
            }
            UserDetailAction::Back => Ok(Transition::Goto(Screen::Users)),
        }
    }

    fn print_client_info(&mut self, info: &ClientInfo) -> CoreResult<()> {
        if info.links.is_empty() {
            return self.console.say(
                Tone::Warning,
                &format!("No enabled proxy offers a share link for '{}'", info.user.name),
            );
        }

        for link in &info.links {
            self.console
                .say(Tone::Info, &format!("[{}] {}", link.proxy, info.user.name))?;
            self.console.say(Tone::Plain, &link.qr_text()?)?;
            self.console.say(Tone::Plain, &link.url)?;
        }
        Ok(())
    }
}
