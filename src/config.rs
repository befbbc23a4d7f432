// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! This module handles persistent configuration storage using TOML format.
//! The only deployment value is the backend base URL; a value passed on the
//! command line (or through the environment) takes precedence over the file.

use log::info;
use serde::{Deserialize, Serialize};
use statusboard_client::{EndpointError, Endpoints};
use thiserror::Error;

const APP_NAME: &str = "statusboard-desktop";
const CONFIG_NAME: &str = "config";

/// Errors resolving the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] confy::ConfyError),

    #[error("no status backend configured; pass --base-url, set STATUSBOARD_API_BASE_URL, or set base_url in the config file")]
    MissingBaseUrl,

    #[error(transparent)]
    InvalidBaseUrl(#[from] EndpointError),
}

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Configuration schema version for migrations
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Base URL of the status backend, e.g. `http://status.internal/api/`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_window_width() -> f32 {
    1000.0
}

fn default_window_height() -> f32 {
    640.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            base_url: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating a default file on first run
    pub fn load() -> Result<Self, ConfigError> {
        let config: AppConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        Ok(config)
    }

    /// Get the config file path for display to user
    pub fn config_path() -> Result<std::path::PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?)
    }

    /// Pick the base URL: a non-blank override wins over the config file
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> Option<String> {
        let non_blank = |url: &str| {
            let url = url.trim();
            (!url.is_empty()).then(|| url.to_owned())
        };

        if let Some(url) = override_url.and_then(non_blank) {
            info!("Using base URL from command line/environment");
            return Some(url);
        }

        self.base_url.as_deref().and_then(non_blank)
    }

    /// Resolve and validate the backend endpoints
    pub fn resolve_endpoints(&self, override_url: Option<&str>) -> Result<Endpoints, ConfigError> {
        let base_url = self
            .resolve_base_url(override_url)
            .ok_or(ConfigError::MissingBaseUrl)?;
        Ok(Endpoints::new(base_url)?)
    }
}
