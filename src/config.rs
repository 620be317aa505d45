//! Configuration file (`lifeweeks.toml`)

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::svg::Theme;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    /// Birthdate used when none is given on the command line
    #[serde(default)]
    pub birthdate: Option<String>,
}

/// Which themes to export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
    #[default]
    Both,
}

impl ThemeChoice {
    pub fn themes(self) -> Vec<Theme> {
        match self {
            ThemeChoice::Dark => vec![Theme::Dark],
            ThemeChoice::Light => vec![Theme::Light],
            ThemeChoice::Both => vec![Theme::Dark, Theme::Light],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Directory the SVG files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Reads `path`, or returns `None` when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(Some(config))
    }
}
