//! 类型定义模块

mod config;
mod paths;
mod proxy;
mod script;
mod share_link;
mod user;

pub use config::{
    CertSection, HysteriaSection, MtprotoSection, RainbowConfig, ServerSection, XraySection,
};
pub use paths::AppliancePaths;
pub use proxy::ProxyKind;
pub use script::{Script, ScriptStatus};
pub use share_link::ShareLink;
pub use user::{User, UserList};
