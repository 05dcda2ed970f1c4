//! Application-level configuration loading, including the result labels used by the scoring rule.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TOURNAMENT_BACK_CONFIG_PATH";
/// Winner label declaring a draw.
const DEFAULT_DRAW_LABEL: &str = "draw";
/// Winner label stored on matches that have not been played yet.
const DEFAULT_UNDECIDED_LABEL: &str = "undecided";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    draw_label: String,
    undecided_label: String,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the built-in labels.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        draw_label = %app_config.draw_label,
                        undecided_label = %app_config.undecided_label,
                        "loaded result labels from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document. Absent or blank labels keep their defaults.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Winner label that declares a draw.
    pub fn draw_label(&self) -> &str {
        &self.draw_label
    }

    /// Winner label for matches created without a result.
    pub fn undecided_label(&self) -> &str {
        &self.undecided_label
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            draw_label: DEFAULT_DRAW_LABEL.to_owned(),
            undecided_label: DEFAULT_UNDECIDED_LABEL.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    draw_label: Option<String>,
    #[serde(default)]
    undecided_label: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            draw_label: non_blank(value.draw_label).unwrap_or(defaults.draw_label),
            undecided_label: non_blank(value.undecided_label).unwrap_or(defaults.undecided_label),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|label| label.trim().to_owned())
        .filter(|label| !label.is_empty())
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
