//! Formatter option resolution
//!
//! Starts from built-in defaults and overlays whatever project-level
//! formatter configuration discovery turns up. Resolution is awaited as a
//! whole: callers only ever see the final, merged options.

use crate::{
    core::{
        discovery::{ConfigDiscovery, PrettierrcLocator},
        settle::settle,
    },
    error::ResolverError,
    utils::FileSystemUtils,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, path::PathBuf};
use tracing::{debug, info, instrument, warn};

/// Trailing comma policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Wherever the target syntax allows
    #[default]
    All,
    /// Where valid in ES5 (objects, arrays)
    Es5,
    /// Never
    None,
}

/// Effective formatter options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Parser the formatter should use
    pub parser: String,
    /// Line width the formatter wraps at
    pub print_width: u32,
    /// Spaces per indentation level
    pub tab_width: u32,
    /// Prefer single quotes
    pub single_quote: bool,
    /// Trailing comma policy
    pub trailing_comma: TrailingComma,
    /// Spaces inside object literal braces
    pub bracket_spacing: bool,
    /// Terminate statements with semicolons
    pub semi: bool,
    /// Settings this crate does not model, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A partial set of options, as read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOverrides {
    pub parser: Option<String>,
    pub print_width: Option<u32>,
    pub tab_width: Option<u32>,
    pub single_quote: Option<bool>,
    pub trailing_comma: Option<TrailingComma>,
    pub bracket_spacing: Option<bool>,
    pub semi: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            parser: "json".to_string(),
            print_width: 120,
            tab_width: 2,
            single_quote: true,
            trailing_comma: TrailingComma::All,
            bracket_spacing: true,
            semi: false,
            extra: BTreeMap::new(),
        }
    }
}

impl FormatOverrides {
    /// Whether the overrides would leave options unchanged
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FormatOptions {
    /// Shallow-merge `overrides` on top of these options.
    ///
    /// Every key present in `overrides` replaces the current value outright;
    /// nested objects and arrays are not merged.
    pub fn merge(&mut self, overrides: FormatOverrides) {
        let FormatOverrides {
            parser,
            print_width,
            tab_width,
            single_quote,
            trailing_comma,
            bracket_spacing,
            semi,
            extra,
        } = overrides;

        if let Some(parser) = parser {
            self.parser = parser;
        }
        if let Some(print_width) = print_width {
            self.print_width = print_width;
        }
        if let Some(tab_width) = tab_width {
            self.tab_width = tab_width;
        }
        if let Some(single_quote) = single_quote {
            self.single_quote = single_quote;
        }
        if let Some(trailing_comma) = trailing_comma {
            self.trailing_comma = trailing_comma;
        }
        if let Some(bracket_spacing) = bracket_spacing {
            self.bracket_spacing = bracket_spacing;
        }
        if let Some(semi) = semi {
            self.semi = semi;
        }

        self.extra.extend(extra);
    }

    /// Return a copy with `overrides` merged on top
    #[must_use]
    pub fn merged(mut self, overrides: FormatOverrides) -> Self {
        self.merge(overrides);
        self
    }
}

/// Resolve options for the current working directory.
///
/// Falls back to the defaults when the working directory is unavailable.
pub async fn resolve_format_options() -> FormatOptions {
    match FileSystemUtils::new().current_dir() {
        Ok(cwd) => resolve_format_options_in(cwd).await,
        Err(e) => {
            warn!("Cannot determine working directory, using default options: {}", e);
            FormatOptions::default()
        }
    }
}

/// Resolve options for `start` using the prettier configuration lookup
pub async fn resolve_format_options_in(start: impl Into<PathBuf>) -> FormatOptions {
    resolve_format_options_with(PrettierrcLocator::new(), start).await
}

/// Resolve options for `start` with a custom discovery collaborator.
///
/// Never fails: any discovery error is logged and the defaults are kept.
#[instrument(skip(discovery, start))]
pub async fn resolve_format_options_with<D: ConfigDiscovery>(
    discovery: D,
    start: impl Into<PathBuf>,
) -> FormatOptions {
    let start = start.into();
    let defaults = FormatOptions::default();

    debug!("Discovering formatter configuration from: {}", start.display());
    let task = tokio::task::spawn_blocking(move || discovery.discover(&start));

    let settled = settle(async {
        match task.await {
            Ok(found) => found,
            Err(e) => Err(ResolverError::discovery(format!(
                "discovery task did not complete: {e}"
            ))),
        }
    })
    .await;

    match settled.into_pair() {
        (Some(e), _) => {
            warn!("Ignoring formatter configuration: {}", e);
            defaults
        }
        (None, Some(Some(overrides))) => {
            info!("Applying discovered formatter configuration");
            debug!("Overrides: {:?}", overrides);
            defaults.merged(overrides)
        }
        (None, _) => {
            debug!("No formatter configuration found, using defaults");
            defaults
        }
    }
}
