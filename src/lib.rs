//! # optresolve
//!
//! Resolves the options a project script runs with: formatter settings
//! merged from built-in defaults and a discovered prettier configuration,
//! a caller-chosen slice of the process environment, and a fixed set of
//! command-line flags.
//!
//! ## Features
//!
//! - Awaited formatter configuration discovery with silent fallback to defaults
//! - Shallow, key-by-key option merging
//! - Environment extraction through an explicit, swappable source
//! - Result-pair wrapper for fallible futures
//!
//! ## Example
//!
//! ```no_run
//! use optresolve::{config::resolve_format_options, utils::{ProcessEnv, to_environment_map}};
//!
//! # async fn run() {
//! let options = resolve_format_options().await;
//! println!("print width: {}", options.print_width);
//!
//! let env = to_environment_map(["HOME", "EDITOR"], &ProcessEnv);
//! println!("{env:?}");
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
