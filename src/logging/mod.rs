//! Console tracing setup for the CLI binary.

use crate::Result;
use anyhow::anyhow;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the tracing subscriber for the current process.
///
/// Filter precedence: `RUST_LOG` when set, otherwise `info`. Errors when
/// invoked more than once per process invocation.
pub fn init() -> Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))?;
    Ok(())
}
