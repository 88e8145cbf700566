//! SNI 屏幕

use crate::error::{CoreError, CoreResult};
use crate::traits::Tone;
use crate::utils::validate_sni;

use super::menus::{self, SniAction};
use super::{Dashboard, Screen, Transition};

impl Dashboard<'_> {
    pub(super) async fn sni_screen(&mut self) -> CoreResult<Transition> {
        match self.pick(&menus::sni_menu())? {
            SniAction::View => {
                self.console.clear()?;
                let sni = self.sni.current_sni().await?;
                self.console.say(Tone::Plain, &format!("Current SNI: {sni}"))?;
                self.console.pause()?;
            }
            SniAction::Change => {
                self.console.clear()?;
                let sni = self.prompt_fake_sni()?;

                self.console
                    .say(Tone::Info, &format!("Applying new SNI '{sni}'..."))?;
                let report = self.sni.change_sni(&sni).await?;

                self.session.mark_restart_pending();
                self.console.say(
                    Tone::Success,
                    &format!(
                        "SNI set to {}: {} proxies reset, share links and QR codes regenerated for {} users",
                        report.sni,
                        report.updated.len(),
                        report.regenerated_users
                    ),
                )?;
                self.announce_deferred()?;
            }
            SniAction::Back => {}
        }

        Ok(Transition::Goto(Screen::Root))
    }

    /// 反复提示直到输入合法的 SNI
    fn prompt_fake_sni(&mut self) -> CoreResult<String> {
        loop {
            let input = self
                .console
                .prompt("Enter a new SNI (e.g. www.example.com): ")?;

            match validate_sni(&input) {
                Ok(sni) => return Ok(sni),
                Err(CoreError::ValidationError(reason)) => {
                    self.console.say(Tone::Error, &reason)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
