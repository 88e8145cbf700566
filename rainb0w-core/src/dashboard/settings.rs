//! Performance and access-control screens
//!
//! Both loop on themselves so the toggle labels are re-queried after every
//! action.

use crate::error::CoreResult;

use super::menus::{self, AccessAction, PerformanceAction};
use super::{Dashboard, Screen, Transition};

impl Dashboard<'_> {
    pub(super) async fn performance_screen(&mut self) -> CoreResult<Transition> {
        let network_tuned = self.performance.network_stack_tuned().await?;
        let zram_enabled = self.performance.zram_enabled().await?;

        match self.pick(&menus::performance_menu(network_tuned, zram_enabled))? {
            PerformanceAction::TuneNetworkStack => self.performance.tune_network_stack().await?,
            PerformanceAction::RevertNetworkStack => {
                self.performance.revert_network_stack().await?;
            }
            PerformanceAction::EnableZram => self.performance.enable_zram().await?,
            PerformanceAction::DisableZram => self.performance.disable_zram().await?,
            PerformanceAction::Back => return Ok(Transition::Goto(Screen::Root)),
        }

        self.console.pause()?;
        Ok(Transition::Goto(Screen::Performance))
    }

    pub(super) async fn access_controls_screen(&mut self) -> CoreResult<Transition> {
        let blocked = self.access.is_porn_blocked().await?;

        match self.pick(&menus::access_controls_menu(blocked))? {
            AccessAction::BlockPorn => {
                self.session.mark_restart_pending();
                self.access.block_porn().await?;
            }
            AccessAction::UnblockPorn => {
                self.session.mark_restart_pending();
                self.access.unblock_porn().await?;
            }
            AccessAction::Back => return Ok(Transition::Goto(Screen::Root)),
        }

        tokio::time::sleep(self.settle_delay).await;
        self.console.clear()?;
        Ok(Transition::Goto(Screen::AccessControls))
    }
}
