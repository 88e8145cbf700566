//! Rainb0w Core Library
//!
//! Platform-independent business logic for the Rainb0w appliance dashboard:
//! - Appliance configuration and user list models
//! - Services that change the SNI, manage users, toggle access controls and
//!   performance tweaks, back up state, update or uninstall the appliance
//! - The dashboard state machine and the restart-pending session flag
//!
//! Storage, external scripts, proxy configuration files and the terminal are
//! abstracted through traits so the front end injects its own implementations.

pub mod dashboard;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dashboard::{Dashboard, ExitStatus, Screen, Transition};
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use session::Session;
pub use traits::{
    ActionInvoker, ClientProfileStore, ConfigRepository, Console, DnsFilter, ProxyBackend,
    SystemProbe, Tone, UserRepository,
};
