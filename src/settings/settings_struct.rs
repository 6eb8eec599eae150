use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::SettingsError;
use crate::models::{HealthCheckParams, DEFAULT_MODE};
use crate::utils::http_std::{parse_proxy, ProxyConfig, DEFAULT_TIMEOUT};

fn default_mode() -> i64 {
    DEFAULT_MODE
}

fn default_output_path() -> String {
    "config.yaml".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    "link2clash".to_string()
}

fn default_none() -> String {
    "NONE".to_string()
}

fn default_health_check_url() -> String {
    HealthCheckParams::default().url
}

fn default_interval() -> u32 {
    300
}

fn default_tolerance() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct CommonSection {
    #[serde(default = "default_mode")]
    default_mode: i64,
    #[serde(default = "default_output_path")]
    output_path: String,
}

impl Default for CommonSection {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            output_path: default_output_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct FetchSection {
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default = "default_none")]
    proxy: String,
    #[serde(default = "default_user_agent")]
    user_agent: String,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            proxy: default_none(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct HealthCheckSection {
    #[serde(default = "default_health_check_url")]
    url: String,
    #[serde(default = "default_interval")]
    interval: u32,
    #[serde(default = "default_tolerance")]
    tolerance: u32,
}

impl Default for HealthCheckSection {
    fn default() -> Self {
        Self {
            url: default_health_check_url(),
            interval: default_interval(),
            tolerance: default_tolerance(),
        }
    }
}

/// On-disk shape shared by the YAML and TOML settings files
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    common: CommonSection,
    fetch: FetchSection,
    health_check: HealthCheckSection,
}

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Mode used when the caller gives none
    pub default_mode: i64,
    pub output_path: String,
    /// Per-source retrieval timeout
    pub fetch_timeout: Duration,
    pub proxy_config: ProxyConfig,
    pub user_agent: String,
    pub health_check: HealthCheckParams,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(FileSettings::default())
    }
}

impl From<FileSettings> for Settings {
    fn from(file: FileSettings) -> Self {
        Self {
            default_mode: file.common.default_mode,
            output_path: file.common.output_path,
            fetch_timeout: Duration::from_secs(file.fetch.timeout_secs),
            proxy_config: parse_proxy(&file.fetch.proxy),
            user_agent: file.fetch.user_agent,
            health_check: HealthCheckParams {
                url: file.health_check.url,
                interval: file.health_check.interval,
                tolerance: file.health_check.tolerance,
            },
        }
    }
}

impl Settings {
    /// Parse settings from YAML (detected by a `common:` key) or TOML.
    ///
    /// Content that is not valid TOML is retried as YAML, so a YAML file
    /// without a `common` section still loads. When both fail the TOML
    /// error is reported.
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        if content.contains("common:") {
            let file: FileSettings = serde_yaml::from_str(content)?;
            return Ok(Settings::from(file));
        }

        let file: FileSettings = match toml::from_str(content) {
            Ok(file) => file,
            Err(toml_err) => serde_yaml::from_str(content).map_err(|_| toml_err)?,
        };
        Ok(Settings::from(file))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Settings::load_from_content(&content)
    }
}
