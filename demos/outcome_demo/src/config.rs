//! Layered configuration for the demo.
//!
//! Values resolve from lowest to highest precedence: built-in defaults, an
//! optional TOML file, `OUTCOME_DEMO_*` environment variables and finally the
//! global command-line flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::CommandLine;
use crate::error::DemoError;

/// Prefix of the environment variables read by the demo.
pub const ENV_PREFIX: &str = "OUTCOME_DEMO_";
/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "OUTCOME_DEMO_CONFIG_PATH";
/// File consulted in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "outcome-demo.toml";

/// Resolved configuration of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number the guessing game is looking for.
    pub target: i64,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Products keyed by their identifier.
    pub catalogue: BTreeMap<String, ProductRecord>,
}

/// Catalogue entry; either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl ProductRecord {
    fn new(title: Option<&str>, brand: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_owned),
            brand: brand.map(str::to_owned),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let catalogue = [
            ("1", ProductRecord::new(Some("iPhone 9"), Some("Apple"))),
            ("3", ProductRecord::new(Some("Samsung Universe 9"), Some("Samsung"))),
            ("7", ProductRecord::new(Some("Plain Box"), None)),
            ("8", ProductRecord::new(None, Some("Nameless"))),
        ]
        .into_iter()
        .map(|(id, record)| (id.to_owned(), record))
        .collect();
        Self {
            target: 5,
            log_level: String::from("info"),
            catalogue,
        }
    }
}

/// Command-line values layered over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliOverrides {
    /// `--target`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    /// `--log-level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl From<&CommandLine> for CliOverrides {
    fn from(cli: &CommandLine) -> Self {
        Self {
            target: cli.target,
            log_level: cli.log_level.clone(),
        }
    }
}

/// Chooses the configuration file and whether it must exist.
///
/// An explicit path (flag first, then [`CONFIG_PATH_ENV`]) is required; the
/// default file is optional.
#[must_use]
pub fn config_file(explicit: Option<&Path>) -> (PathBuf, bool) {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .map_or_else(
            || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            |path| (path, true),
        )
}

/// Builds the layered figment without extracting it.
///
/// # Errors
///
/// Returns [`DemoError::MissingConfigFile`] when an explicitly named file is
/// absent.
pub fn figment(explicit: Option<&Path>, overrides: &CliOverrides) -> Result<Figment, DemoError> {
    let (path, required) = config_file(explicit);
    if required && !path.is_file() {
        return Err(DemoError::MissingConfigFile(path));
    }
    Ok(Figment::from(Serialized::defaults(DemoConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]))
        .merge(Serialized::defaults(overrides)))
}

/// Loads the configuration for `explicit` and `overrides`.
///
/// # Errors
///
/// Returns [`DemoError::MissingConfigFile`] for an absent explicit file and
/// [`DemoError::Configuration`] when a layer holds invalid values.
pub fn load(explicit: Option<&Path>, overrides: &CliOverrides) -> Result<DemoConfig, DemoError> {
    let config = figment(explicit, overrides)?.extract()?;
    Ok(config)
}

/// Loads the configuration selected by a parsed command line.
///
/// # Errors
///
/// See [`load`].
pub fn load_for(cli: &CommandLine) -> Result<DemoConfig, DemoError> {
    load(cli.config_path.as_deref(), &CliOverrides::from(cli))
}
