//! Icon generation configuration, optionally read from `nobg.toml`.
//!
//! # Example
//!
//! ```toml
//! input = "assets/icons/logo.png"   # Source logo
//! output_dir = "assets/icons"       # Where app_logo_{size}.png files go
//! sizes = [1024, 512, 256]          # Largest is rendered first, others derive from it
//! threshold = 18                    # Max RGB distance from the background color
//! ```
//!
//! Every key is optional. Without a config file the defaults above apply, and
//! CLI flags override whatever the file says.

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, image::background::DEFAULT_THRESHOLD, log};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nobg.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Paths, sizes and threshold for one icon export run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Source logo image.
    pub input: PathBuf,

    /// Directory receiving `app_logo_{size}.png`.
    pub output_dir: PathBuf,

    /// Square output sizes in pixels.
    pub sizes: Vec<u32>,

    /// Max Manhattan RGB distance from the background color.
    pub threshold: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("assets/icons/logo.png"),
            output_dir: PathBuf::from("assets/icons"),
            sizes: vec![1024, 512, 256],
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl IconConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Reads `--config` if given (it must exist), otherwise `nobg.toml` in the
    /// working directory if present, otherwise starts from defaults. CLI
    /// overrides are applied last, then the result is validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
        if let Some(path) = &cli.config {
            return Some(path.clone());
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply CLI overrides on top of file values.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(output) = &cli.output {
            self.output_dir = output.clone();
        }
        if let Some(threshold) = cli.threshold {
            self.threshold = threshold;
        }
        if !cli.sizes.is_empty() {
            self.sizes = cli.sizes.clone();
        }
    }

    /// Check sizes. The threshold is deliberately unbounded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Validation("no output sizes configured".into()));
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::Validation("output size must be at least 1px".into()));
        }
        for (i, size) in self.sizes.iter().enumerate() {
            if self.sizes[..i].contains(size) {
                return Err(ConfigError::Validation(format!(
                    "output size {size} listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// The size rendered straight from the cleaned source.
    pub fn master_size(&self) -> u32 {
        self.sizes.iter().copied().max().unwrap_or_default()
    }

    /// Sizes downscaled from the master, in configured order.
    pub fn derived_sizes(&self) -> impl Iterator<Item = u32> + '_ {
        let master = self.master_size();
        self.sizes.iter().copied().filter(move |&size| size != master)
    }

    /// Output file for a given size.
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!("app_logo_{size}.png"))
    }
}

// ============================================================================
// tests
// ============================================================================
