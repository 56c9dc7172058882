//! Project-level formatter configuration discovery
//!
//! Looks for a prettier configuration in the start directory and each of
//! its ancestors up to the filesystem root, stopping at the first hit.

use crate::{
    config::FormatOverrides,
    error::{ResolverError, Result},
    utils::FileSystemUtils,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Source of a partial formatter configuration
pub trait ConfigDiscovery: Send + Sync + 'static {
    /// Find configuration applying to `start`.
    ///
    /// `Ok(None)` means nothing was found; errors mean something was found
    /// but could not be used.
    fn discover(&self, start: &Path) -> Result<Option<FormatOverrides>>;
}

/// How a candidate configuration file is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `prettier` key inside `package.json`
    PackageJson,
    /// Extensionless rc file, JSON or YAML
    Rc,
    Json,
    Yaml,
    Toml,
    /// Needs a JavaScript or JSON5 evaluator
    Unsupported,
}

/// Candidate file names, in the order they are tried within a directory
pub const CANDIDATES: &[(&str, ConfigFormat)] = &[
    ("package.json", ConfigFormat::PackageJson),
    (".prettierrc", ConfigFormat::Rc),
    (".prettierrc.json", ConfigFormat::Json),
    (".prettierrc.yaml", ConfigFormat::Yaml),
    (".prettierrc.yml", ConfigFormat::Yaml),
    (".prettierrc.json5", ConfigFormat::Unsupported),
    (".prettierrc.js", ConfigFormat::Unsupported),
    ("prettier.config.js", ConfigFormat::Unsupported),
    (".prettierrc.mjs", ConfigFormat::Unsupported),
    ("prettier.config.mjs", ConfigFormat::Unsupported),
    (".prettierrc.cjs", ConfigFormat::Unsupported),
    ("prettier.config.cjs", ConfigFormat::Unsupported),
    (".prettierrc.ts", ConfigFormat::Unsupported),
    ("prettier.config.ts", ConfigFormat::Unsupported),
    (".prettierrc.toml", ConfigFormat::Toml),
];

/// Prettier-compatible configuration lookup
#[derive(Debug, Default, Clone)]
pub struct PrettierrcLocator {
    fs_utils: FileSystemUtils,
    /// Last directory searched; `None` walks to the filesystem root
    stop_dir: Option<PathBuf>,
}

impl PrettierrcLocator {
    /// Create a new locator
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            stop_dir: None,
        }
    }

    /// Do not search above `dir`
    #[must_use]
    pub fn with_stop_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.stop_dir = Some(self.absolute(dir.as_ref()));
        self
    }

    fn absolute(&self, start: &Path) -> PathBuf {
        if start.is_absolute() {
            return start.to_path_buf();
        }
        self.fs_utils
            .current_dir()
            .map(|cwd| cwd.join(start))
            .unwrap_or_else(|_| start.to_path_buf())
    }

    /// Load one candidate file.
    ///
    /// Returns `Ok(None)` for a `package.json` without a `prettier` key.
    pub fn load(&self, path: &Path, format: ConfigFormat) -> Result<Option<FormatOverrides>> {
        if format == ConfigFormat::Unsupported {
            return Err(ResolverError::unsupported_config(path));
        }

        let content = self
            .fs_utils
            .read_file_to_string(path)
            .map_err(|e| ResolverError::file_system("read", path, e))?;

        if content.trim().is_empty() && format != ConfigFormat::PackageJson {
            return Ok(Some(FormatOverrides::default()));
        }

        let overrides = match format {
            ConfigFormat::PackageJson => {
                let manifest: Value = serde_json::from_str(&content)
                    .map_err(|e| ResolverError::parse("JSON", path, e))?;
                match manifest.get("prettier") {
                    None => return Ok(None),
                    Some(section @ Value::Object(_)) => serde_json::from_value(section.clone())
                        .map_err(|e| ResolverError::parse("JSON", path, e))?,
                    // A string names a shared config package
                    Some(_) => return Err(ResolverError::unsupported_config(path)),
                }
            }
            ConfigFormat::Rc => match serde_json::from_str(&content) {
                Ok(overrides) => overrides,
                Err(json_err) => {
                    debug!("{} is not JSON ({}), trying YAML", path.display(), json_err);
                    serde_yaml::from_str(&content)
                        .map_err(|e| ResolverError::parse("YAML", path, e))?
                }
            },
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| ResolverError::parse("JSON", path, e))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| ResolverError::parse("YAML", path, e))?,
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|e| ResolverError::parse("TOML", path, e))?
            }
            ConfigFormat::Unsupported => return Err(ResolverError::unsupported_config(path)),
        };

        Ok(Some(overrides))
    }
}

impl ConfigDiscovery for PrettierrcLocator {
    #[instrument(skip(self))]
    fn discover(&self, start: &Path) -> Result<Option<FormatOverrides>> {
        let start = self.absolute(start);

        for dir in start.ancestors() {
            for (name, format) in CANDIDATES {
                let path = dir.join(name);
                if !self.fs_utils.is_file(&path) {
                    continue;
                }

                debug!("Found formatter configuration candidate: {}", path.display());
                if let Some(overrides) = self.load(&path, *format)? {
                    return Ok(Some(overrides));
                }
            }

            if self.stop_dir.as_deref() == Some(dir) {
                debug!("Reached stop directory: {}", dir.display());
                break;
            }
        }

        Ok(None)
    }
}
