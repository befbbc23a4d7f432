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

//! Toolkit-independent render model.
//!
//! [`screen`] turns a [`ViewState`] into exactly what should be painted. The
//! desktop UI only lays this out; every text and style decision lives here.

use crate::presentation::{icon_for, style_for, Badge, Icon};
use crate::view::{DisplayComponent, ViewState};
use crate::wire::WireServerInfo;

pub const LOADING_MESSAGE: &str = "Loading service statuses...";
pub const ERROR_HEADING: &str = "Error:";
pub const STATUS_HEADING: &str = "Status";
pub const DETAILS_HEADING: &str = "Details";
pub const DETAILS_PLACEHOLDER: &str = "No detailed information available for this component.";

/// What the dashboard shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading { message: &'static str },
    /// Replaces the whole dashboard, header included.
    Error { heading: &'static str, message: String },
    Table(DashboardTable),
}

/// Header plus one row per component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTable {
    pub title: String,
    pub status_heading: &'static str,
    pub details_heading: &'static str,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row identity key (the component id)
    pub id: String,
    pub icon: Icon,
    pub name: String,
    pub badge: Badge,
    pub details: String,
    /// True when `details` is the placeholder rather than backend text
    pub details_is_placeholder: bool,
}

impl Row {
    #[must_use]
    pub fn from_component(component: &DisplayComponent) -> Self {
        let details_is_placeholder = component.details.is_empty();
        let details = if details_is_placeholder {
            DETAILS_PLACEHOLDER.to_owned()
        } else {
            component.details.clone()
        };

        Self {
            id: component.id.clone(),
            icon: icon_for(&component.kind),
            name: component.name.clone(),
            badge: style_for(component.status),
            details,
            details_is_placeholder,
        }
    }
}

/// Header title embedding the database name.
#[must_use]
pub fn title_for(server_info: &WireServerInfo) -> String {
    format!("Monitoring Component ({})", server_info.database)
}

/// Render model for a view state.
#[must_use]
pub fn screen(state: &ViewState) -> Screen {
    match state {
        ViewState::Loading(_) => Screen::Loading {
            message: LOADING_MESSAGE,
        },
        ViewState::Error(message) => Screen::Error {
            heading: ERROR_HEADING,
            message: message.clone(),
        },
        ViewState::Ready(dashboard) => Screen::Table(DashboardTable {
            title: title_for(&dashboard.server_info),
            status_heading: STATUS_HEADING,
            details_heading: DETAILS_HEADING,
            rows: dashboard.components.iter().map(Row::from_component).collect(),
        }),
    }
}
