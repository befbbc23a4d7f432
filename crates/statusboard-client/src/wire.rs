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

//! Wire format for the status backend.
//!
//! Records arrive as JSON from two endpoints: the server identity resource
//! and the component list. Status and type strings are open-ended on the
//! wire, so both decode into enums with an `Unknown` variant that keeps the
//! raw value instead of rejecting the payload.

use serde::{Deserialize, Deserializer};

/// Server identity record returned by `GET {base}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireServerInfo {
    /// Name of the database the backend reports on.
    pub database: String,
}

/// Kind of monitored component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ComponentType {
    Service,
    Website,
    WebApi,
    Process,
    Batch,
    /// A type string this build does not know about.
    Unknown(String),
}

impl ComponentType {
    /// Wire spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Service => "service",
            Self::Website => "website",
            Self::WebApi => "webapi",
            Self::Process => "process",
            Self::Batch => "batch",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for ComponentType {
    fn from(raw: &str) -> Self {
        match raw {
            "service" => Self::Service,
            "website" => Self::Website,
            "webapi" => Self::WebApi,
            "process" => Self::Process,
            "batch" => Self::Batch,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for ComponentType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

/// Status vocabulary emitted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum WireStatus {
    Running,
    Ok,
    Stopped,
    Failed,
    Warning,
    /// A status string this build does not know about.
    Unknown(String),
}

impl WireStatus {
    /// Wire spelling of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Ok => "ok",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
            Self::Warning => "warning",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for WireStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "running" => Self::Running,
            "ok" => Self::Ok,
            "stopped" => Self::Stopped,
            "failed" => Self::Failed,
            "warning" => Self::Warning,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for WireStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

/// One monitored component as returned by `GET {base}allstatuses`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireComponent {
    /// Stable identifier, used as the row key
    pub id: String,

    /// Name shown in the first column
    pub display_name: String,

    /// Component kind, drives the icon
    #[serde(rename = "type")]
    pub kind: ComponentType,

    /// Raw backend status
    pub status: WireStatus,

    /// Free-form details; missing or null decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_details: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the body of the server identity endpoint.
pub fn decode_server_info(body: &[u8]) -> Result<WireServerInfo, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Decode the body of the component list endpoint.
///
/// A single malformed element fails the whole list.
pub fn decode_components(body: &[u8]) -> Result<Vec<WireComponent>, serde_json::Error> {
    serde_json::from_slice(body)
}
