use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{MvdError, Result};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mvd.json";

/// How replies are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Numbered lists and plain messages.
    #[default]
    Text,
    /// One JSON document per reply.
    Json,
}

/// Settings for an interactive session.
///
/// Every field is optional in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prompt written before each command.
    pub prompt: String,
    /// Whether to print the welcome banner.
    pub banner: bool,
    /// Whether CLEAR asks for confirmation.
    pub confirm_clear: bool,
    /// Output format.
    pub format: Format,
    /// Default log filter, used when `MVD_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_owned(),
            banner: true,
            confirm_clear: true,
            format: Format::Text,
            log_level: "warn".to_owned(),
        }
    }
}

impl Config {
    /// Loads the config for a session started in `dir`.
    ///
    /// An explicit `path` must exist. Without one, `mvd.json` in `dir`
    /// is used if present, and the defaults otherwise.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) if !path.is_file() => Err(MvdError::ConfigNotFound(path.to_owned())),
            Some(path) => Self::from_file(path),
            None => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let config = serde_json::from_str(&fs::read_to_string(path)?)?;
        Ok(config)
    }
}
