//! Plugin configuration for the Bocha search tool
//!
//! Values come from an optional YAML file, then `BOCHA_*` environment
//! overrides, then validation. The validated [`BochaConfig`] is immutable and
//! shared across invocations through `Arc`.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Default Bocha API base URL
pub const DEFAULT_API_URL: &str = "https://api.bochaai.com/v1";

/// Default number of results requested per search
pub const DEFAULT_RESULT_COUNT: u8 = 5;

/// Smallest result count the provider accepts
pub const MIN_RESULT_COUNT: u8 = 1;

/// Largest result count the provider accepts (single page)
pub const MAX_RESULT_COUNT: u8 = 10;

pub const ENV_API_URL: &str = "BOCHA_API_URL";
pub const ENV_API_KEY: &str = "BOCHA_API_KEY";
pub const ENV_RESULT_COUNT: &str = "BOCHA_SEARCH_RESULT_COUNT";

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid api_url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Unvalidated configuration as it appears on disk
///
/// Accepts both snake_case keys and the uppercase plugin-settings names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default = "default_api_url", alias = "API_URL")]
    pub api_url: String,

    #[serde(default, alias = "API_KEY")]
    pub api_key: String,

    #[serde(default = "default_result_count", alias = "SEARCH_RESULT_COUNT")]
    pub result_count: i64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_result_count() -> i64 {
    i64::from(DEFAULT_RESULT_COUNT)
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            result_count: default_result_count(),
        }
    }
}

impl RawConfig {
    /// Apply `BOCHA_*` overrides using the given variable lookup
    ///
    /// The lookup is injected so callers can pass `std::env::var` or a fixed map.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(count) = lookup(ENV_RESULT_COUNT) {
            self.result_count = count.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_RESULT_COUNT,
                value: count.clone(),
            })?;
        }
        Ok(self)
    }
}

/// Validated, immutable Bocha search configuration
#[derive(Clone, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct BochaConfig {
    api_url: String,
    api_key: String,
    result_count: u8,
}

impl BochaConfig {
    /// Build a configuration, validating the URL and clamping the result count
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        result_count: i64,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        url::Url::parse(&api_url).map_err(|source| ConfigError::InvalidUrl {
            url: api_url.clone(),
            source,
        })?;

        let clamped = result_count.clamp(i64::from(MIN_RESULT_COUNT), i64::from(MAX_RESULT_COUNT));
        if clamped != result_count {
            warn!(
                "result_count {} out of range [{}, {}], using {}",
                result_count, MIN_RESULT_COUNT, MAX_RESULT_COUNT, clamped
            );
        }

        Ok(Self {
            api_url,
            api_key: api_key.into(),
            // clamped into [1, 10] above
            result_count: clamped as u8,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn result_count(&self) -> u8 {
        self.result_count
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full search endpoint: base URL without trailing slashes plus `/web-search`
    pub fn search_endpoint(&self) -> String {
        format!("{}/web-search", self.api_url.trim_end_matches('/'))
    }
}

impl Default for BochaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl TryFrom<RawConfig> for BochaConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.api_url, raw.api_key, raw.result_count)
    }
}

impl fmt::Debug for BochaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("BochaConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &key)
            .field("result_count", &self.result_count)
            .finish()
    }
}

/// Load config from a YAML file, falling back to defaults when it is absent
///
/// `BOCHA_*` environment overrides are applied before validation.
pub fn load_yaml_config(path: &Path) -> Result<BochaConfig, ConfigError> {
    load_yaml_config_with(path, |key| std::env::var(key).ok())
}

/// [`load_yaml_config`] with an injected override lookup instead of the process environment
pub fn load_yaml_config_with<F>(path: &Path, lookup: F) -> Result<BochaConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str::<RawConfig>(&contents)?
    } else {
        RawConfig::default()
    };

    BochaConfig::try_from(raw.apply_overrides(lookup)?)
}
