//! Command-line flag declaration and argument parsing

use clap::{Arg, ArgAction, ArgMatches, FromArgMatches, Subcommand};
use serde::Serialize;
use std::{ffi::OsString, path::PathBuf};

pub use clap::Command as Program;

/// What a declared flag does when present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Boolean switch, false when absent
    Switch,
    /// Takes one argument, shown with the given placeholder
    Value(&'static str),
    /// Prints help and exits
    Help,
}

/// A single flag declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub id: &'static str,
    pub short: char,
    pub long: &'static str,
    pub kind: FlagKind,
    pub help: &'static str,
}

/// Flags every program invocation accepts, in declaration order
pub const FLAGS: [FlagSpec; 4] = [
    FlagSpec {
        id: "debug",
        short: 'd',
        long: "debug",
        kind: FlagKind::Switch,
        help: "output extra debugging",
    },
    FlagSpec {
        id: "small",
        short: 's',
        long: "small",
        kind: FlagKind::Switch,
        help: "small pizza size",
    },
    FlagSpec {
        id: "pizza_type",
        short: 'p',
        long: "pizza-type",
        kind: FlagKind::Value("type"),
        help: "flavour of pizza",
    },
    FlagSpec {
        id: "help",
        short: 'h',
        long: "help",
        kind: FlagKind::Help,
        help: "display help for command",
    },
];

impl FlagSpec {
    /// Build the clap argument for this declaration
    pub fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.id)
            .short(self.short)
            .long(self.long)
            .help(self.help);

        match self.kind {
            FlagKind::Switch => arg.action(ArgAction::SetTrue),
            FlagKind::Value(placeholder) => arg.value_name(placeholder).action(ArgAction::Set),
            FlagKind::Help => arg.action(ArgAction::Help),
        }
    }
}

/// Register [`FLAGS`] on `program`.
///
/// clap's generated help flag is replaced by the declared one. Flags whose
/// id is already registered are left alone, so declaring twice is a no-op.
pub fn declare_flags(program: Program) -> Program {
    let mut program = program.disable_help_flag(true);

    for flag in &FLAGS {
        if program.get_arguments().any(|arg| arg.get_id() == flag.id) {
            continue;
        }
        program = program.arg(flag.to_arg());
    }

    program
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve formatter options and print them as JSON
    Options {
        /// Directory to start configuration discovery from
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Do not search for configuration above this directory
        #[arg(long, value_name = "DIR")]
        stop_dir: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print selected environment variables
    Env {
        /// Variable names to extract
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,

        /// Print shell assignments instead of JSON
        #[arg(long)]
        shell: bool,

        /// Omit the `export` keyword from shell assignments
        #[arg(long, requires = "shell")]
        no_export: bool,

        /// Wrap shell assignments in a "Generated by" comment banner
        #[arg(long, requires = "shell")]
        annotate: bool,
    },
}

/// Values of the declared flags after parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOptions {
    pub debug: bool,
    pub small: bool,
    pub pizza_type: Option<String>,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Declared flag values
    pub options: ProgramOptions,
    /// Subcommand to execute, if any
    pub command: Option<Command>,
}

impl Args {
    /// Extract arguments from matches produced by [`program`]
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let options = ProgramOptions {
            debug: matches.get_flag("debug"),
            small: matches.get_flag("small"),
            pizza_type: matches.get_one::<String>("pizza_type").cloned(),
        };

        let command = match matches.subcommand_name() {
            Some(_) => Some(Command::from_arg_matches(matches)?),
            None => None,
        };

        Ok(Self { options, command })
    }

    /// Parse from an explicit argument list
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = program().try_get_matches_from(itr)?;
        Self::from_matches(&matches)
    }
}

/// The full program definition: declared flags plus subcommands
pub fn program() -> Program {
    let program = Program::new("optresolve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve formatter options, environment variables and CLI flags");

    Command::augment_subcommands(declare_flags(program))
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    let matches = program().get_matches();
    Args::from_matches(&matches).unwrap_or_else(|e| e.exit())
}
