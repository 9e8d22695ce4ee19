use crate::analyzer::ClassifierPreset;
use crate::error::{NextVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "nextversion.toml";

/// Represents the complete configuration for next-version.
///
/// Contains tag filtering, commit classification and output settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Which tags count as version tags.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TagsConfig {
    /// Reject date-like tags (`20YY.`) for repositories that also carry them
    #[serde(default)]
    pub exclude_year_prefixed: bool,
}

/// Commit message matching policy.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub preset: ClassifierPreset,
}

fn default_console() -> bool {
    true
}

fn default_annotation_key() -> String {
    "version".to_string()
}

/// Where the computed version is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Print the version as a line on stdout
    #[serde(default = "default_console")]
    pub console: bool,

    /// Also write a `key=value` pipeline annotation
    #[serde(default)]
    pub annotation: bool,

    #[serde(default = "default_annotation_key")]
    pub annotation_key: String,

    /// Upper-case the annotation value
    #[serde(default)]
    pub uppercase: bool,

    /// File the annotation is appended to; stdout when unset
    #[serde(default)]
    pub annotation_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            console: default_console(),
            annotation: false,
            annotation_key: default_annotation_key(),
            uppercase: false,
            annotation_file: None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        NextVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| NextVersionError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| NextVersionError::config(e.to_string()))
}
