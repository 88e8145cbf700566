//! Dashboard state machine
//!
//! Each screen renders a menu, handles the pick and returns a [`Transition`]:
//! the next screen to enter or the exit status for the supervising process.
//! `run` is the trampoline; screens never call each other.
//!
//! ```text
//!            ┌──────────────── Root ─────────────────┐
//!            │  Apply Changes ─▶ exit 1  Exit ─▶ 0   │
//!            └──┬──────┬──────┬──────┬──────┬──────┬─┘
//!              Sni  Perf⟲  Access⟲  Users  Backup  Uninstall / Update
//!                                     │              └─ OKAY ─▶ exit 0
//!                               UserDetail{name}
//! ```

mod lifecycle;
pub mod menus;
mod screen;
mod settings;
mod sni;
mod users;


pub use screen::{ExitStatus, Screen, Transition};

use std::sync::Arc;
use std::time::Duration;

use crate::error::CoreResult;
use crate::services::{
    AccessControlService, BackupService, MaintenanceService, PerformanceService, ServiceContext,
    SniService, UserService,
};
use crate::session::Session;
use crate::traits::{Console, Tone};

use menus::{Menu, RootAction};

/// Printed after every change that only takes effect on restart
pub const DEFERRED_NOTICE: &str =
    "Changes only take effect after selecting 'Apply Changes' in the dashboard!";

/// Pause before re-reading DNS filter state after a toggle
const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// 交互式控制台会话
pub struct Dashboard<'c> {
    session: Session,
    console: &'c mut dyn Console,
    sni: SniService,
    users: UserService,
    access: AccessControlService,
    performance: PerformanceService,
    backup: BackupService,
    maintenance: MaintenanceService,
    settle_delay: Duration,
}

impl<'c> Dashboard<'c> {
    /// 创建会话（restart_pending = false）
    pub fn new(ctx: Arc<ServiceContext>, console: &'c mut dyn Console) -> Self {
        Self {
            session: Session::new(),
            console,
            sni: SniService::new(Arc::clone(&ctx)),
            users: UserService::new(Arc::clone(&ctx)),
            access: AccessControlService::new(Arc::clone(&ctx)),
            performance: PerformanceService::new(Arc::clone(&ctx)),
            backup: BackupService::new(Arc::clone(&ctx)),
            maintenance: MaintenanceService::new(ctx),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 从主菜单开始运行，直到某个屏幕给出退出状态
    ///
    /// Errors from external actions are not handled here; they end the session.
    pub async fn run(&mut self) -> CoreResult<ExitStatus> {
        let mut screen = Screen::Root;
        log::info!("Dashboard session started");

        loop {
            log::debug!("Entering screen: {}", screen.name());
            match self.enter(screen).await? {
                Transition::Goto(next) => screen = next,
                Transition::Exit(status) => {
                    log::info!(
                        "Dashboard session finished with exit status {}",
                        status.code()
                    );
                    return Ok(status);
                }
            }
        }
    }

    async fn enter(&mut self, screen: Screen) -> CoreResult<Transition> {
        match screen {
            Screen::Root => self.root_screen(),
            Screen::Sni => self.sni_screen().await,
            Screen::Performance => self.performance_screen().await,
            Screen::AccessControls => self.access_controls_screen().await,
            Screen::Users => self.users_screen().await,
            Screen::UserDetail { name } => self.user_detail_screen(name).await,
            Screen::Backup => self.backup_screen().await,
            Screen::Uninstall => self.uninstall_screen().await,
            Screen::Update => self.update_screen().await,
        }
    }

    fn root_screen(&mut self) -> CoreResult<Transition> {
        let menu = menus::root_menu(self.session.restart_pending());

        Ok(match self.pick(&menu)? {
            RootAction::Open(screen) => Transition::Goto(screen),
            RootAction::ApplyChanges => {
                self.console.clear()?;
                self.console.say(Tone::Info, "Applying Changes!")?;
                Transition::Exit(ExitStatus::ApplyChanges)
            }
            RootAction::Exit => {
                self.console.say(Tone::Plain, "Exiting!")?;
                Transition::Exit(ExitStatus::Normal)
            }
        })
    }

    fn pick<A: Clone>(&mut self, menu: &Menu<A>) -> CoreResult<A> {
        menu.choose(&mut *self.console)
    }

    /// 提示延后生效并等待确认
    fn announce_deferred(&mut self) -> CoreResult<()> {
        self.console.say(Tone::Warning, DEFERRED_NOTICE)?;
        self.console.pause()
    }
}
