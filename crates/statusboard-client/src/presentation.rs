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

//! Display metadata for components.
//!
//! Two independent lookups: badge label and style from a display status, and
//! icon identity from a component type. Both are called for every row on
//! every frame, so they stay allocation-free.

use crate::normalize::DisplayStatus;
use crate::wire::ComponentType;

/// Visual treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Success,
    Danger,
    Warning,
    Neutral,
}

/// Text and style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge {
    pub label: &'static str,
    pub style: BadgeStyle,
}

impl Badge {
    /// Badge for anything outside the display vocabulary.
    pub const UNKNOWN: Self = Self {
        label: "UNKNOWN",
        style: BadgeStyle::Neutral,
    };
}

/// Icon identity for a component row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Gear,
    Datastore,
    Briefcase,
    Globe,
    Link,
}

impl Icon {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gear => "gear",
            Self::Datastore => "datastore",
            Self::Briefcase => "briefcase",
            Self::Globe => "globe",
            Self::Link => "link",
        }
    }
}

/// Badge for a display status.
///
/// `Up` and `Ok` share the success treatment.
#[must_use]
pub const fn style_for(status: DisplayStatus) -> Badge {
    let style = match status {
        DisplayStatus::Up | DisplayStatus::Ok => BadgeStyle::Success,
        DisplayStatus::Down => BadgeStyle::Danger,
        DisplayStatus::Warn => BadgeStyle::Warning,
    };
    Badge {
        label: status.label(),
        style,
    }
}

/// Badge for a status label, falling back to [`Badge::UNKNOWN`].
#[must_use]
pub fn style_for_label(label: &str) -> Badge {
    DisplayStatus::from_label(label).map_or(Badge::UNKNOWN, style_for)
}

/// Icon for a component type. Unknown types get the datastore icon.
#[must_use]
pub fn icon_for(kind: &ComponentType) -> Icon {
    match kind {
        ComponentType::Service => Icon::Gear,
        ComponentType::Batch => Icon::Briefcase,
        ComponentType::Website => Icon::Globe,
        ComponentType::WebApi => Icon::Link,
        ComponentType::Process | ComponentType::Unknown(_) => Icon::Datastore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_for_each_status() {
        assert_eq!(style_for(DisplayStatus::Up), Badge { label: "UP", style: BadgeStyle::Success });
        assert_eq!(style_for(DisplayStatus::Ok), Badge { label: "OK", style: BadgeStyle::Success });
        assert_eq!(style_for(DisplayStatus::Down), Badge { label: "DOWN", style: BadgeStyle::Danger });
        assert_eq!(style_for(DisplayStatus::Warn), Badge { label: "WARN", style: BadgeStyle::Warning });
    }

    #[test]
    fn test_up_and_ok_share_style() {
        assert_eq!(style_for(DisplayStatus::Up).style, style_for(DisplayStatus::Ok).style);
        assert_ne!(style_for(DisplayStatus::Up).label, style_for(DisplayStatus::Ok).label);
    }

    #[test]
    fn test_style_for_unknown_label() {
        assert_eq!(style_for_label("MAINTENANCE"), Badge::UNKNOWN);
        assert_eq!(style_for_label(""), Badge::UNKNOWN);
        assert_eq!(style_for_label("WARN"), style_for(DisplayStatus::Warn));
    }

    #[test]
    fn test_badges_are_never_blank() {
        for status in DisplayStatus::ALL {
            assert!(!style_for(status).label.is_empty());
            assert_eq!(style_for(status), style_for(status));
        }
    }

    #[test]
    fn test_icon_for_each_type() {
        assert_eq!(icon_for(&ComponentType::Service), Icon::Gear);
        assert_eq!(icon_for(&ComponentType::Process), Icon::Datastore);
        assert_eq!(icon_for(&ComponentType::Batch), Icon::Briefcase);
        assert_eq!(icon_for(&ComponentType::Website), Icon::Globe);
        assert_eq!(icon_for(&ComponentType::WebApi), Icon::Link);
    }

    #[test]
    fn test_unknown_type_falls_back_to_datastore() {
        let kind = ComponentType::Unknown("mainframe".to_owned());
        assert_eq!(icon_for(&kind), Icon::Datastore);
        assert_eq!(icon_for(&kind), icon_for(&kind));
        assert_eq!(icon_for(&kind).name(), "datastore");
    }
}
