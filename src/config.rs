use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "remaining-life.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// `YYYY-MM-DD`, validated later by the input collector.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Directory the SVG reports are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Also print the computed stats as JSON on stdout.
    #[serde(default)]
    pub json: bool,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            birth_date: None,
            out_dir: default_out_dir(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Command-line and environment values win over the file.
    pub fn merge(
        mut self,
        birth_date: Option<String>,
        out_dir: Option<PathBuf>,
        json: bool,
    ) -> Self {
        if birth_date.is_some() {
            self.birth_date = birth_date;
        }
        if let Some(dir) = out_dir {
            self.out_dir = dir;
        }
        self.json |= json;
        self
    }
}
