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

//! HTTP retrieval of the two backend resources.
//!
//! [`StatusSource`] is the seam between the controller and the network: the
//! desktop app uses [`HttpStatusSource`], tests plug in canned sources.

use std::future::Future;

use log::{debug, warn};
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::wire::{self, WireComponent, WireServerInfo};

/// Path appended to the base URL for the component list.
const COMPONENTS_PATH: &str = "allstatuses";

/// Reasons a single retrieval can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors building [`Endpoints`] from a configured base URL.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("base URL '{url}' is invalid: {reason}")]
    InvalidBase { url: String, reason: String },

    #[error("base URL '{url}' must use http or https")]
    UnsupportedScheme { url: String },
}

/// The two backend URLs derived from one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Validate a base URL.
    ///
    /// The component list URL is `{base}allstatuses`, so a base without a
    /// trailing slash is accepted but almost certainly a mistake.
    pub fn new(base: impl Into<String>) -> Result<Self, EndpointError> {
        let base = base.into();
        let url = Url::parse(&base).map_err(|e| EndpointError::InvalidBase {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme { url: base });
        }

        if !base.ends_with('/') {
            warn!(
                "Base URL '{}' has no trailing slash; component list will be fetched from '{}{}'",
                base, base, COMPONENTS_PATH
            );
        }

        Ok(Self { base })
    }

    /// Server identity URL (the base itself).
    #[must_use]
    pub fn server_info_url(&self) -> &str {
        &self.base
    }

    /// Component list URL.
    #[must_use]
    pub fn components_url(&self) -> String {
        format!("{}{}", self.base, COMPONENTS_PATH)
    }
}

/// Source of the server identity record and the component list.
pub trait StatusSource {
    fn fetch_server_info(&self) -> impl Future<Output = Result<WireServerInfo, FetchError>> + Send;

    fn fetch_components(&self) -> impl Future<Output = Result<Vec<WireComponent>, FetchError>> + Send;
}

/// [`StatusSource`] backed by the real HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpStatusSource {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings).
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a URL and return the body of a 2xx response.
    async fn get_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl StatusSource for HttpStatusSource {
    async fn fetch_server_info(&self) -> Result<WireServerInfo, FetchError> {
        let body = self.get_body(self.endpoints.server_info_url()).await?;
        Ok(wire::decode_server_info(&body)?)
    }

    async fn fetch_components(&self) -> Result<Vec<WireComponent>, FetchError> {
        let body = self.get_body(&self.endpoints.components_url()).await?;
        Ok(wire::decode_components(&body)?)
    }
}
