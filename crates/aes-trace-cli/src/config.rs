//! Settings from an optional TOML file merged with command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// How `encrypt` renders its trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Defaults read from `--config`.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub key_size: Option<u32>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Effective settings for one `encrypt` run.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub key_size: u32,
    pub format: OutputFormat,
}

impl Settings {
    /// Flags win over the file, the file wins over built-in defaults.
    pub fn resolve(
        file: &FileConfig,
        key_size: Option<u32>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            key_size: key_size.or(file.key_size).unwrap_or(128),
            format: format.or(file.format).unwrap_or_default(),
        }
    }
}
