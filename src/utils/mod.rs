//! Utility modules for common functionality
//!
//! Provides reusable utilities for file reads and environment handling.

pub mod env;
pub mod fs;

pub use env::{EnvSource, EnvironmentMap, ProcessEnv, ShellRenderer, to_environment_map};
pub use fs::FileSystemUtils;
