use anyhow::{Context, Result};
use chartmoments_core::model::chart::{BILLBOARD_HOT_100, BILLBOARD_YEAR_END, TOP40_WEEKLY};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Primary-source locations tried, in order, when nothing is configured.
const DEFAULT_PRIMARY_CANDIDATES: &[&str] = &[
    "data/moments.json",
    "data/chart_moments.json",
    "data/billboard_hot100.json",
];

/// Configuration for chartmoments.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CHARTS_* prefix)
/// 3. Config file (~/.config/chartmoments/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Single primary bulk document. When set, no other candidate is tried.
    ///
    /// Can be set via:
    /// - CLI: --primary /path/to/moments.json
    /// - ENV: CHARTS_PRIMARY_PATH
    /// - Config: primary_path = "/path/to/moments.json"
    #[serde(default)]
    pub primary_path: Option<PathBuf>,

    /// Comma-separated list of primary candidates, tried in order.
    ///
    /// Can be set via:
    /// - ENV: CHARTS_PRIMARY_CANDIDATES
    /// - Config: primary_candidates = "a.json,b.json"
    #[serde(default)]
    pub primary_candidates: Option<String>,

    /// Directory of supplemental per-year documents. A missing directory
    /// contributes zero records.
    ///
    /// Can be set via:
    /// - CLI: --supplemental-dir /path/to/dir
    /// - ENV: CHARTS_SUPPLEMENTAL_DIR
    /// - Default: data/top40weekly
    #[serde(default = "default_supplemental_dir")]
    pub supplemental_dir: PathBuf,

    /// Chart assigned to supplemental rows whose document names none.
    #[serde(default = "default_supplemental_chart")]
    pub supplemental_chart: String,

    /// Chart tried when both the requested chart and its fallback are empty.
    #[serde(default = "default_backup_chart")]
    pub backup_chart: Option<String>,

    /// Requested chart to the single chart tried in its place.
    #[serde(default = "default_fallback_charts")]
    pub fallback_charts: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_path: None,
            primary_candidates: None,
            supplemental_dir: default_supplemental_dir(),
            supplemental_chart: default_supplemental_chart(),
            backup_chart: default_backup_chart(),
            fallback_charts: default_fallback_charts(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/chartmoments/config.toml
    /// Reads environment variables with CHARTS_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("charts");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Override the primary source with a single path (the --primary flag).
    #[must_use]
    pub fn with_primary_path(mut self, path: PathBuf) -> Self {
        self.primary_path = Some(path);
        self
    }

    /// Override the supplemental directory (the --supplemental-dir flag).
    #[must_use]
    pub fn with_supplemental_dir(mut self, dir: PathBuf) -> Self {
        self.supplemental_dir = dir;
        self
    }

    /// The ordered list of primary-source paths to try.
    ///
    /// An explicit `primary_path` wins, then a `primary_candidates` list,
    /// then the built-in candidates.
    pub fn primary_candidate_paths(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.primary_path {
            return vec![path.clone()];
        }

        if let Some(list) = &self.primary_candidates {
            let paths: Vec<PathBuf> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                return paths;
            }
        }

        let mut paths: Vec<PathBuf> = DEFAULT_PRIMARY_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .collect();
        if let Some(data_dir) = dirs::data_dir() {
            paths.push(data_dir.join("chartmoments").join("moments.json"));
        }
        paths
    }
}

fn default_supplemental_dir() -> PathBuf {
    PathBuf::from("data").join("top40weekly")
}

fn default_supplemental_chart() -> String {
    TOP40_WEEKLY.to_string()
}

fn default_backup_chart() -> Option<String> {
    Some(BILLBOARD_YEAR_END.to_string())
}

fn default_fallback_charts() -> HashMap<String, String> {
    HashMap::from([(TOP40_WEEKLY.to_string(), BILLBOARD_HOT_100.to_string())])
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/chartmoments/config.toml
/// - macOS: ~/Library/Application Support/chartmoments/config.toml
/// - Windows: %APPDATA%\chartmoments\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chartmoments")
        .join("config.toml")
}

/// Create the config file from the example if it does not exist.
///
/// Returns `true` if the file was created.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Chartmoments Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CHARTS_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Primary bulk document (a JSON array of chart records)
#
# When set, no other candidate is tried. Otherwise primary_candidates is
# used, then the built-in list (data/moments.json, ...).
#
# Can also be set via:
# - CLI: chartmoments --primary /path/to/moments.json stats
# - Environment: CHARTS_PRIMARY_PATH=/path/to/moments.json
#primary_path = "data/moments.json"
#primary_candidates = "data/moments.json,data/billboard_hot100.json"

# Directory of supplemental per-year files
#
# Rows from these files are repaired before they are merged.
#supplemental_dir = "data/top40weekly"
#supplemental_chart = "Top40Weekly Top 100"

# Fallback chain used by random picks
#backup_chart = "Billboard Year-End Hot 100"
#
#[fallback_charts]
#"Top40Weekly Top 100" = "Billboard Hot 100"
"#
}
