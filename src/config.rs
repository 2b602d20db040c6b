/// Startup configuration
///
/// The config file lives in the user's config directory:
/// - Linux: ~/.config/orbital-command/config.json
/// - macOS: ~/Library/Application Support/orbital-command/config.json
/// - Windows: %APPDATA%\orbital-command\config.json
///
/// `submission_url` has no usable default: every deployment points at its
/// own issue tracker, so a missing or placeholder value stops startup.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Dataset location used when the config file doesn't name one
pub const DEFAULT_DATASET: &str = "public/satellite_data.json";

/// Placeholder segments of the sample submission URL
const PLACEHOLDER_MARKERS: [&str; 2] = ["YOUR_USERNAME", "YOUR_REPO_NAME"];

/// Where a resource (dataset or image) is read from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Fetched with a GET request
    Http(Url),
    /// Read from the local filesystem
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` values are endpoints, anything else is a path
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|e| {
                ConfigError::Parse(format!("dataset '{}' is not a valid URL: {}", trimmed, e))
            })?;
            Ok(Source::Http(url))
        } else {
            Ok(Source::File(PathBuf::from(trimmed)))
        }
    }

    /// Human-readable name for logs and error messages
    pub fn describe(&self) -> String {
        match self {
            Source::Http(url) => url.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// On-disk shape of the config file
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    dataset: Option<String>,
    #[serde(default)]
    submission_url: Option<String>,
    #[serde(default)]
    strict_validation: bool,
}

/// Validated application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset: Source,
    /// Base "new issue" URL of the submission sink
    pub submission_url: Url,
    /// Opt-in validation of drafts before submission
    pub strict_validation: bool,
}

impl AppConfig {
    /// Load the config from the default location
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        log::info!("⚙️  Loading config from {}", path.display());
        Self::from_json(&contents)
    }

    /// Parse and validate a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let dataset = Source::parse(raw.dataset.as_deref().unwrap_or(DEFAULT_DATASET))?;
        let submission_url = parse_submission_url(raw.submission_url.as_deref())?;

        Ok(AppConfig {
            dataset,
            submission_url,
            strict_validation: raw.strict_validation,
        })
    }

    /// Get the path where the config file is expected
    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| ConfigError::Read {
                path: "<config dir>".to_string(),
                reason: "could not determine the user config directory".to_string(),
            })?;

        path.push("orbital-command");
        path.push("config.json");
        Ok(path)
    }
}

fn parse_submission_url(value: Option<&str>) -> Result<Url, ConfigError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ConfigError::MissingSubmissionUrl);
    }

    if PLACEHOLDER_MARKERS.iter().any(|marker| value.contains(marker)) {
        return Err(ConfigError::PlaceholderSubmissionUrl(value.to_string()));
    }

    let url = Url::parse(value).map_err(|e| ConfigError::InvalidSubmissionUrl {
        url: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidSubmissionUrl {
            url: value.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
