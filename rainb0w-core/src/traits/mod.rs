//! Storage, action and terminal abstraction trait definitions

mod action_invoker;
mod client_profile_store;
mod config_repository;
mod console;
mod dns_filter;
mod proxy_backend;
mod system_probe;
mod user_repository;

pub use action_invoker::ActionInvoker;
pub use client_profile_store::ClientProfileStore;
pub use config_repository::ConfigRepository;
pub use console::{Console, Tone};
pub use dns_filter::DnsFilter;
pub use proxy_backend::ProxyBackend;
pub use system_probe::SystemProbe;
pub use user_repository::UserRepository;
