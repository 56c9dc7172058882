//! Command-line interface module
//!
//! Provides flag declaration, argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{
    Args, Command, FLAGS, FlagSpec, ProgramOptions, declare_flags, parse_args, program,
};
pub use commands::execute_command;
