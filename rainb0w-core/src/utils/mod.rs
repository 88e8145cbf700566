//! 工具函数

pub mod fs;
pub mod sni;
pub mod text_patch;

pub use sni::validate_sni;
pub use text_patch::{patch_prefixed_line, replace_prefixed_lines};
