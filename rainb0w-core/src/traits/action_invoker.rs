//! External script invocation abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Script, ScriptStatus};

/// Runs one external script to completion.
///
/// Implementations report how the script exited and only fail when the
/// script could not be started at all. Turning a non-zero status into an
/// error is the caller's decision (see `ServiceContext::invoke`).
#[async_trait]
pub trait ActionInvoker: Send + Sync {
    /// Run a script and wait for it to exit
    ///
    /// # Arguments
    /// * `script` - Which script to run
    /// * `args` - Positional arguments
    async fn run(&self, script: Script, args: &[String]) -> CoreResult<ScriptStatus>;
}
