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

//! Colors and glyphs for badges, icons and panels.

use egui::Color32;
use statusboard_client::{BadgeStyle, Icon};

pub const HEADING_TEXT: Color32 = Color32::from_rgb(55, 65, 81);
pub const BODY_TEXT: Color32 = Color32::from_rgb(75, 85, 99);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175);

pub const ERROR_FILL: Color32 = Color32::from_rgb(254, 226, 226);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(248, 113, 113);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(185, 28, 28);

/// Badge background and text colors for a style
pub fn badge_colors(style: BadgeStyle) -> (Color32, Color32) {
    match style {
        BadgeStyle::Success => (Color32::from_rgb(34, 197, 94), Color32::WHITE),
        BadgeStyle::Danger => (Color32::from_rgb(239, 68, 68), Color32::WHITE),
        // Dark text, white is unreadable on yellow
        BadgeStyle::Warning => (Color32::from_rgb(234, 179, 8), Color32::from_rgb(31, 41, 55)),
        BadgeStyle::Neutral => (Color32::from_rgb(156, 163, 175), Color32::WHITE),
    }
}

/// Glyph drawn for an icon (covered by egui's bundled emoji font)
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Gear => "⚙",
        Icon::Datastore => "🗄",
        Icon::Briefcase => "💼",
        Icon::Globe => "🌐",
        Icon::Link => "🔗",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_success_danger_warning_are_distinct() {
        let fills: HashSet<Color32> = [
            BadgeStyle::Success,
            BadgeStyle::Danger,
            BadgeStyle::Warning,
            BadgeStyle::Neutral,
        ]
        .into_iter()
        .map(|style| badge_colors(style).0)
        .collect();
        assert_eq!(fills.len(), 4);
    }

    #[test]
    fn test_warning_uses_dark_text() {
        let (_, text) = badge_colors(BadgeStyle::Warning);
        assert_ne!(text, Color32::WHITE);
    }

    #[test]
    fn test_every_icon_has_a_glyph() {
        let glyphs: HashSet<&str> = [Icon::Gear, Icon::Datastore, Icon::Briefcase, Icon::Globe, Icon::Link]
            .into_iter()
            .map(icon_glyph)
            .collect();
        assert_eq!(glyphs.len(), 5);
        assert!(glyphs.iter().all(|g| !g.is_empty()));
    }
}
