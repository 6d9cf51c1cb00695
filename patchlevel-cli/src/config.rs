//! Configuration file loading for patchlevel.
//!
//! Discovers and loads `patchlevel.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "patchlevel.toml";

/// Output format shared by the report commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Top-level configuration from patchlevel.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchlevelConfig {
    /// Version report settings.
    pub report: ReportConfig,
}

/// Report section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whether `--version` lists the local patch log.
    pub show_patches: bool,

    /// Default output format.
    pub format: OutputFormat,

    /// Display name of the host program.
    pub name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_patches: true,
            format: OutputFormat::Text,
            name: "patchlevel".to_string(),
        }
    }
}

/// Discover the patchlevel.toml config file.
///
/// Returns `None` if no config file is found in `root`.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a patchlevel.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<PatchlevelConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<PatchlevelConfig> {
    let config: PatchlevelConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `root`, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<PatchlevelConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(PatchlevelConfig::default()),
    }
}

/// Effective report settings after merging file and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub show_patches: bool,
    pub format: OutputFormat,
    pub name: String,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: PatchlevelConfig,
}

impl ConfigMerger {
    pub fn new(config: PatchlevelConfig) -> Self {
        Self { config }
    }

    /// Merge with version/patches command arguments.
    ///
    /// Flags left unset on the command line fall back to the file.
    pub fn merge_report_args(
        self,
        cli_show_patches: Option<bool>,
        cli_format: Option<OutputFormat>,
    ) -> MergedConfig {
        let report = self.config.report;
        MergedConfig {
            show_patches: cli_show_patches.unwrap_or(report.show_patches),
            format: cli_format.unwrap_or(report.format),
            name: report.name,
        }
    }
}
