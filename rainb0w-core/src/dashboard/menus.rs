//! Menu definitions
//!
//! Every builder is a pure function of the state it is given and is called
//! again on each render, so labels always reflect the latest query.

use crate::error::{CoreError, CoreResult};
use crate::traits::Console;

use super::Screen;

pub const DEFAULT_TITLE: &str = "Select any option:";
pub const ROOT_TITLE: &str = "Choose any options to proceed:";
pub const USERS_TITLE: &str = "Add or remove a user:";

pub const APPLY_CHANGES: &str = "Apply Changes";
pub const EXIT: &str = "Exit";
pub const BACK_TO_MAIN_MENU: &str = "Back to Main Menu";
pub const BACK_TO_USERS_MENU: &str = "Back to Users Management Menu";
pub const ADD_NEW_USER: &str = "Add a New User";

const UNINSTALL_WARNING: &str = "
Proceeding will stop and remove all Docker containers, volumes, networks and
revert all changes made to the system such as firewall settings and kernel tweaks!
Make sure you have made a backup of your configuration and users
if you'd like to restore them later on.

Do you confirm?
";

const UPDATE_WARNING: &str = "
IMPORTANT: Proceeding will pull the latest Docker images of proxies and
update them on your system, BUT doing so without upgrading your CLIENT apps first
may cause connectivity issues, and you won't be able to connect until you upgrade your clients!
Please update your client apps first and then proceed here.

Do you want to continue?
";

/// A titled list of labels, each bound to the action it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<A> {
    title: String,
    entries: Vec<(String, A)>,
}

impl<A: Clone> Menu<A> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, action: A) -> Self {
        self.entries.push((label.into(), action));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    /// Render through the console and return the action of the picked entry
    pub fn choose(&self, console: &mut dyn Console) -> CoreResult<A> {
        if self.entries.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "menu '{}' has no options",
                self.title
            )));
        }

        let index = console.choose(&self.title, &self.labels())?;
        self.entries
            .get(index)
            .map(|(_, action)| action.clone())
            .ok_or_else(|| {
                CoreError::ConsoleUnavailable(format!("selection {index} is out of range"))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootAction {
    Open(Screen),
    ApplyChanges,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniAction {
    View,
    Change,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceAction {
    TuneNetworkStack,
    RevertNetworkStack,
    EnableZram,
    DisableZram,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    BlockPorn,
    UnblockPorn,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersAction {
    Open(String),
    Add,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDetailAction {
    ViewClientInfo,
    Remove,
    Back,
}

/// The final entry is "Apply Changes" iff a restart is pending.
pub fn root_menu(restart_pending: bool) -> Menu<RootAction> {
    let last = if restart_pending {
        (APPLY_CHANGES, RootAction::ApplyChanges)
    } else {
        (EXIT, RootAction::Exit)
    };

    Menu::new(ROOT_TITLE)
        .entry("SNI Settings", RootAction::Open(Screen::Sni))
        .entry("Performance Settings", RootAction::Open(Screen::Performance))
        .entry("Access Controls", RootAction::Open(Screen::AccessControls))
        .entry("Manage Users", RootAction::Open(Screen::Users))
        .entry("Backup", RootAction::Open(Screen::Backup))
        .entry("Uninstall", RootAction::Open(Screen::Uninstall))
        .entry("Update", RootAction::Open(Screen::Update))
        .entry(last.0, last.1)
}

pub fn sni_menu() -> Menu<SniAction> {
    Menu::new(DEFAULT_TITLE)
        .entry("View Currently Set SNI", SniAction::View)
        .entry("Change SNI", SniAction::Change)
        .entry(BACK_TO_MAIN_MENU, SniAction::Back)
}

pub fn performance_menu(network_tuned: bool, zram_enabled: bool) -> Menu<PerformanceAction> {
    let network = if network_tuned {
        ("Revert Network Stack Optimizations", PerformanceAction::RevertNetworkStack)
    } else {
        ("Optimize Network Stack (BBR)", PerformanceAction::TuneNetworkStack)
    };
    let zram = if zram_enabled {
        ("Disable Zram Swap", PerformanceAction::DisableZram)
    } else {
        ("Enable Zram Swap", PerformanceAction::EnableZram)
    };

    Menu::new("Select any option to optimize performance:")
        .entry(network.0, network.1)
        .entry(zram.0, zram.1)
        .entry(BACK_TO_MAIN_MENU, PerformanceAction::Back)
}

pub fn access_controls_menu(porn_blocked: bool) -> Menu<AccessAction> {
    let toggle = if porn_blocked {
        ("Unblock Porn", AccessAction::UnblockPorn)
    } else {
        ("Block Porn", AccessAction::BlockPorn)
    };

    Menu::new(DEFAULT_TITLE)
        .entry(toggle.0, toggle.1)
        .entry(BACK_TO_MAIN_MENU, AccessAction::Back)
}

/// Numbered user entries come first, then "Add" and "Back".
pub fn users_menu(names: &[String]) -> Menu<UsersAction> {
    let title = if names.is_empty() {
        DEFAULT_TITLE
    } else {
        USERS_TITLE
    };

    names
        .iter()
        .enumerate()
        .fold(Menu::new(title), |menu, (idx, name)| {
            menu.entry(format!("{}. {name}", idx + 1), UsersAction::Open(name.clone()))
        })
        .entry(ADD_NEW_USER, UsersAction::Add)
        .entry(BACK_TO_MAIN_MENU, UsersAction::Back)
}

pub fn user_detail_menu(name: &str) -> Menu<UserDetailAction> {
    Menu::new(format!("Select any option for {name}:"))
        .entry("View QR codes and share URLs", UserDetailAction::ViewClientInfo)
        .entry("Remove User", UserDetailAction::Remove)
        .entry(BACK_TO_USERS_MENU, UserDetailAction::Back)
}

pub fn confirm_remove_menu(name: &str) -> Menu<bool> {
    Menu::new(format!("Confirm removing '{name}'?"))
        .entry("Yes", true)
        .entry("No", false)
}

pub fn uninstall_menu() -> Menu<bool> {
    Menu::new(UNINSTALL_WARNING)
        .entry("CANCEL", false)
        .entry("OKAY", true)
}

pub fn update_menu() -> Menu<bool> {
    Menu::new(UPDATE_WARNING)
        .entry("CANCEL", false)
        .entry("OKAY", true)
}
