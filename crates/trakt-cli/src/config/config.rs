//! `AppConfig` struct, file location and TOML read/write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trakt_api::auth::AccessToken;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Trakt application settings.
    #[serde(default)]
    pub trakt: TraktConfig,
    /// Stored OAuth credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Trakt application settings.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TraktConfig {
    /// Application client id (`trakt-api-key`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Application client secret, needed for token calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// OAuth redirect URI registered with the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// API base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// OAuth page base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_base_url: Option<String>,
    /// `trakt-api-version` header override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    /// Send the token on endpoints where OAuth is optional.
    #[serde(default)]
    pub force_authentication: bool,
}

/// Stored OAuth credentials.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Token from the last login or refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<AccessToken>,
}

/// Directory under the config home that holds the file.
const APP_DIR: &str = "trakt";

/// Config file name.
const FILE_NAME: &str = "config.toml";

/// Picks `{dir}`, `$XDG_CONFIG_HOME/trakt` or `$HOME/.config/trakt`, in that order.
fn locate(
    dir: Option<&Path>,
    xdg_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(FILE_NAME));
    }
    let config_home = xdg_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|v| !v.is_empty())
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .context("neither XDG_CONFIG_HOME nor HOME is set; pass --dir")?;
    Ok(config_home.join(APP_DIR).join(FILE_NAME))
}

impl AppConfig {
    /// Resolves the config file path from `--dir` or the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is `None` and no config home can be determined.
    pub fn resolve_path(dir: Option<&Path>) -> Result<PathBuf> {
        locate(
            dir,
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        )
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
