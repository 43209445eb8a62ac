//! Configuration loading functionality.
//!
//! [`load`] reads a configuration document and reports failures as
//! [`PaycalcError`] values. [`resolve`] is the entry point used by the
//! calculator: it turns any load failure into the built-in default.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PaycalcError, PaycalcResult};

use super::types::Configuration;

/// The configuration file read when the caller does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Loads and parses a configuration document.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML; everything else
/// is parsed as JSON.
///
/// # Errors
///
/// - `ConfigNotFound` if the file cannot be opened or read
/// - `ConfigParseError` if the content does not describe a [`Configuration`]
///
/// # Example
///
/// ```no_run
/// use paycalc::config::load;
///
/// let config = load("./config.json")?;
/// println!("{} tax categories", config.taxes.len());
/// # Ok::<(), paycalc::error::PaycalcError>(())
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> PaycalcResult<Configuration> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PaycalcError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| PaycalcError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| PaycalcError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

/// Produces the effective configuration.
///
/// Reads `path`, or [`DEFAULT_CONFIG_FILE`] when `path` is `None`. Any
/// failure to read or parse the file yields [`Configuration::default`];
/// the error is discarded here and never reaches the caller. A file that
/// loads successfully is used verbatim.
///
/// # Example
///
/// ```
/// use paycalc::config::{resolve, Configuration};
/// use std::path::Path;
///
/// let config = resolve(Some(Path::new("/nonexistent/config.json")));
/// assert_eq!(config, Configuration::default());
/// ```
pub fn resolve(path: Option<&Path>) -> Configuration {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    match load(path) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded configuration");
            config
        }
        Err(reason) => {
            debug!(%reason, "Using built-in default configuration");
            Configuration::default()
        }
    }
}
