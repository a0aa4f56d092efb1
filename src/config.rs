use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::ParseOptions;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub stamp: StampConfig,
    pub paths: PathsConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StampConfig {
    pub enabled: bool,
    pub author: String,
    pub date_format: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            author: "Ryan Levee".to_string(),
            date_format: "%B %d, %Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.md"),
            output: PathBuf::from("output.html"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    pub flush_unterminated: bool,
}

impl ParserConfig {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            flush_unterminated: self.flush_unterminated,
        }
    }
}

impl Config {
    /// The configuration bundled with the binary (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // build.rs rejects malformed TOML; this catches drift from the structs.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!("bundled default config does not match Config, using built-in defaults: {e}");
            Self::default()
        })
    }

    /// Load config from a TOML file, or return the compiled default if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::compiled_default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
