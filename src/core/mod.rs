//! Core resolution machinery
//!
//! Contains formatter configuration discovery and the result-pair wrapper
//! used to await it.

pub mod discovery;
pub mod settle;

pub use discovery::{ConfigDiscovery, ConfigFormat, PrettierrcLocator};
pub use settle::{Settled, settle};
