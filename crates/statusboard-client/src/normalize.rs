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

//! Status normalization.
//!
//! Maps the backend's status vocabulary onto the four display states that
//! drive badge rendering. Anything not confirmed healthy degrades to `Down`.

use std::fmt;

use crate::wire::WireStatus;

/// Normalized status shown on a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    Up,
    Ok,
    Down,
    Warn,
}

impl DisplayStatus {
    /// Every display status, in badge order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Ok, Self::Down, Self::Warn];

    /// Badge label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Ok => "OK",
            Self::Down => "DOWN",
            Self::Warn => "WARN",
        }
    }

    /// Parse a badge label back into a status.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&WireStatus> for DisplayStatus {
    fn from(status: &WireStatus) -> Self {
        match status {
            WireStatus::Running => Self::Up,
            WireStatus::Ok => Self::Ok,
            WireStatus::Warning => Self::Warn,
            WireStatus::Failed | WireStatus::Stopped | WireStatus::Unknown(_) => Self::Down,
        }
    }
}

/// Normalize a raw wire status string.
///
/// Total: unrecognized input (including different casing) yields `Down`.
#[must_use]
pub fn normalize(wire_status: &str) -> DisplayStatus {
    DisplayStatus::from(&WireStatus::from(wire_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_wire_statuses() {
        assert_eq!(normalize("running"), DisplayStatus::Up);
        assert_eq!(normalize("ok"), DisplayStatus::Ok);
        assert_eq!(normalize("warning"), DisplayStatus::Warn);
        assert_eq!(normalize("failed"), DisplayStatus::Down);
        assert_eq!(normalize("stopped"), DisplayStatus::Down);
    }

    #[test]
    fn test_unknown_degrades_to_down() {
        for raw in ["bogus-value", "", "Running", "OK", "degraded", " running"] {
            assert_eq!(normalize(raw), DisplayStatus::Down, "input {raw:?}");
        }
    }

    #[test]
    fn test_normalize_is_deterministic() {
        for raw in ["running", "ok", "warning", "failed", "stopped", "whatever"] {
            assert_eq!(normalize(raw), normalize(raw));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DisplayStatus::Warn.to_string(), "WARN");
        assert_eq!(DisplayStatus::from_label("DOWN"), Some(DisplayStatus::Down));
        assert_eq!(DisplayStatus::from_label("down"), None);
        assert_eq!(DisplayStatus::from_label("UNKNOWN"), None);
    }
}
