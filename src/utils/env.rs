//! Environment variable utilities
//!
//! Extracts a caller-chosen set of variables from an environment and
//! renders them as shell assignments.

use crate::error::{ResolverError, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, HashMap},
    env,
};
use tracing::{debug, instrument, warn};

/// Variable name to value, `None` when the variable is unset
pub type EnvironmentMap = BTreeMap<String, Option<String>>;

/// Read access to a set of environment variables
pub trait EnvSource {
    /// Look up a variable by name
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset
        env::var_os(key)?.into_string().ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Build an [`EnvironmentMap`] holding exactly the template's keys.
///
/// Only the keys of the template matter. Each one is looked up in `source`
/// and recorded as `None` when absent, so the output key set never depends
/// on what the environment contains.
#[instrument(skip_all)]
pub fn to_environment_map<I, K, S>(template: I, source: &S) -> EnvironmentMap
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
    S: EnvSource + ?Sized,
{
    let map: EnvironmentMap = template
        .into_iter()
        .map(|key| {
            let key = key.as_ref();
            (key.to_string(), source.get(key))
        })
        .collect();

    debug!(
        "Resolved {} environment variables ({} set)",
        map.len(),
        map.values().filter(|v| v.is_some()).count()
    );
    map
}

/// Renders environment maps as shell assignment lines
#[derive(Debug, Clone)]
pub struct ShellRenderer {
    export: bool,
    /// Wrap output in a comment banner
    annotate: bool,
    /// Valid shell variable names
    re_name: Regex,
}

const BANNER_RULE_WIDTH: usize = 80;

impl ShellRenderer {
    /// Create a renderer, prefixing lines with `export` when asked
    pub fn new(export: bool) -> Result<Self> {
        Ok(Self {
            export,
            annotate: false,
            re_name: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
                .map_err(|e| ResolverError::config(format!("Failed to compile regex: {}", e)))?,
        })
    }

    /// Surround rendered output with a "Generated by" comment banner
    #[must_use]
    pub fn with_annotation(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Render a single assignment
    pub fn line(&self, key: &str, value: &str) -> String {
        let value = value.trim_matches('\'').trim_matches('"');

        let value = if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            value.to_string()
        } else {
            format!("'{}'", value.replace('\'', r"'\''"))
        };

        if self.export {
            format!("export {key}={value}")
        } else {
            format!("{key}={value}")
        }
    }

    /// Render every set variable, one line each.
    ///
    /// Unset variables are skipped. Names that are not valid shell
    /// identifiers are skipped with a warning.
    pub fn render(&self, map: &EnvironmentMap) -> String {
        let rule = format!("# {}\n", "-".repeat(BANNER_RULE_WIDTH));
        let mut output = String::new();

        if self.annotate {
            output.push_str(&rule);
            output.push_str("# Generated by optresolve from the process environment\n");
            output.push_str(&rule);
        }

        for (key, value) in map {
            let Some(value) = value else {
                debug!("Skipping unset variable: {}", key);
                continue;
            };

            if !self.re_name.is_match(key) {
                warn!("Skipping '{}': not a valid shell variable name", key);
                continue;
            }

            output.push_str(&self.line(key, value));
            output.push('\n');
        }

        if self.annotate {
            output.push_str(&rule);
        }

        output
    }
}
