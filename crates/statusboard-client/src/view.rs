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

//! Dashboard view state and the reducer that advances it.
//!
//! The state is a tagged variant rather than a bag of flags. Each fetch
//! outcome is a [`FetchEvent`] and [`reduce`] is the only way to move between
//! variants, which is what makes an error terminal: there is no arm leading
//! out of [`ViewState::Error`].

use std::fmt;

use crate::http::FetchError;
use crate::normalize::DisplayStatus;
use crate::wire::{ComponentType, WireComponent, WireServerInfo};

/// The two backend resources the dashboard loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    ServerInfo,
    Components,
}

impl Resource {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServerInfo => "service info",
            Self::Components => "service data",
        }
    }

    /// Fixed message shown to the user when this resource fails to load.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::ServerInfo => "Failed to fetch service info. Please check the network or server status.",
            Self::Components => "Failed to load service data. Please check the network or server status.",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component as shown in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayComponent {
    pub id: String,
    pub name: String,
    pub kind: ComponentType,
    pub status: DisplayStatus,
    pub details: String,
}

impl From<WireComponent> for DisplayComponent {
    fn from(wire: WireComponent) -> Self {
        Self {
            status: DisplayStatus::from(&wire.status),
            id: wire.id,
            name: wire.display_name,
            kind: wire.kind,
            details: wire.status_details,
        }
    }
}

/// Top-level lifecycle of a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// Results collected while at least one fetch is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingLoad {
    server_info: Option<WireServerInfo>,
    components: Option<Vec<DisplayComponent>>,
}

impl PendingLoad {
    /// Whether the given resource has not reported yet.
    #[must_use]
    pub fn is_pending(&self, resource: Resource) -> bool {
        match resource {
            Resource::ServerInfo => self.server_info.is_none(),
            Resource::Components => self.components.is_none(),
        }
    }

    /// Promote to `Ready` once both halves are present.
    fn settle(self) -> ViewState {
        match self {
            Self {
                server_info: Some(server_info),
                components: Some(components),
            } => ViewState::Ready(Dashboard {
                server_info,
                components,
            }),
            pending => ViewState::Loading(pending),
        }
    }
}

/// Everything the table needs once both fetches succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub server_info: WireServerInfo,
    pub components: Vec<DisplayComponent>,
}

/// Dashboard session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading(PendingLoad),
    Error(String),
    Ready(Dashboard),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Loading(PendingLoad::default())
    }
}

impl ViewState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Loading(_) => Phase::Loading,
            Self::Error(_) => Phase::Error,
            Self::Ready(_) => Phase::Ready,
        }
    }

    /// Components received so far, in backend order.
    #[must_use]
    pub fn components(&self) -> &[DisplayComponent] {
        match self {
            Self::Loading(pending) => pending.components.as_deref().unwrap_or_default(),
            Self::Error(_) => &[],
            Self::Ready(dashboard) => &dashboard.components,
        }
    }

    #[must_use]
    pub fn server_info(&self) -> Option<&WireServerInfo> {
        match self {
            Self::Loading(pending) => pending.server_info.as_ref(),
            Self::Error(_) => None,
            Self::Ready(dashboard) => Some(&dashboard.server_info),
        }
    }

    /// Whether further fetch outcomes are ignored.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Outcome of one of the two retrievals.
#[derive(Debug)]
pub enum FetchEvent {
    ServerInfo(Result<WireServerInfo, FetchError>),
    Components(Result<Vec<WireComponent>, FetchError>),
}

impl FetchEvent {
    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            Self::ServerInfo(_) => Resource::ServerInfo,
            Self::Components(_) => Resource::Components,
        }
    }

    /// The underlying error, if this outcome is a failure.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::ServerInfo(Err(e)) | Self::Components(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// Advance the view state by one fetch outcome.
///
/// Error wins: once the state is `Error` every further event is ignored, and
/// a failure from either resource replaces whatever was there. Successful
/// outcomes replace their half of the data wholesale.
#[must_use]
pub fn reduce(state: ViewState, event: FetchEvent) -> ViewState {
    match (state, event) {
        (ViewState::Error(message), _) => ViewState::Error(message),

        (_, FetchEvent::ServerInfo(Err(_))) => {
            ViewState::Error(Resource::ServerInfo.failure_message().to_owned())
        }
        (_, FetchEvent::Components(Err(_))) => {
            ViewState::Error(Resource::Components.failure_message().to_owned())
        }

        (ViewState::Loading(mut pending), FetchEvent::ServerInfo(Ok(info))) => {
            pending.server_info = Some(info);
            pending.settle()
        }
        (ViewState::Loading(mut pending), FetchEvent::Components(Ok(list))) => {
            pending.components = Some(to_display(list));
            pending.settle()
        }

        (ViewState::Ready(mut dashboard), FetchEvent::ServerInfo(Ok(info))) => {
            dashboard.server_info = info;
            ViewState::Ready(dashboard)
        }
        (ViewState::Ready(mut dashboard), FetchEvent::Components(Ok(list))) => {
            dashboard.components = to_display(list);
            ViewState::Ready(dashboard)
        }
    }
}

fn to_display(list: Vec<WireComponent>) -> Vec<DisplayComponent> {
    list.into_iter().map(DisplayComponent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireStatus;
    use reqwest::StatusCode;

    fn component(id: &str, status: &str) -> WireComponent {
        WireComponent {
            id: id.to_owned(),
            display_name: id.to_uppercase(),
            kind: ComponentType::Service,
            status: WireStatus::from(status),
            status_details: String::new(),
        }
    }

    fn info(database: &str) -> FetchEvent {
        FetchEvent::ServerInfo(Ok(WireServerInfo {
            database: database.to_owned(),
        }))
    }

    fn list(components: Vec<WireComponent>) -> FetchEvent {
        FetchEvent::Components(Ok(components))
    }

    fn info_failed() -> FetchEvent {
        FetchEvent::ServerInfo(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)))
    }

    fn list_failed() -> FetchEvent {
        let decode = serde_json::from_str::<Vec<WireComponent>>("{").unwrap_err();
        FetchEvent::Components(Err(FetchError::Decode(decode)))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::default();
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.components().is_empty());
        assert!(state.server_info().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_one_success_stays_loading() {
        let state = reduce(ViewState::default(), info("prod"));
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.server_info().map(|i| i.database.as_str()), Some("prod"));

        let ViewState::Loading(pending) = &state else {
            panic!("expected loading");
        };
        assert!(!pending.is_pending(Resource::ServerInfo));
        assert!(pending.is_pending(Resource::Components));
    }

    #[test]
    fn test_both_successes_reach_ready_in_either_order() {
        let a = reduce(reduce(ViewState::default(), info("prod")), list(vec![component("svc1", "running")]));
        let b = reduce(reduce(ViewState::default(), list(vec![component("svc1", "running")])), info("prod"));

        assert_eq!(a.phase(), Phase::Ready);
        assert_eq!(a, b);
        assert_eq!(a.components()[0].status, DisplayStatus::Up);
    }

    #[test]
    fn test_components_are_mapped_field_by_field() {
        let mut wire = component("svc1", "warning");
        wire.status_details = "disk at 91%".to_owned();
        wire.kind = ComponentType::Batch;

        let state = reduce(ViewState::default(), list(vec![wire]));
        let shown = &state.components()[0];
        assert_eq!(shown.id, "svc1");
        assert_eq!(shown.name, "SVC1");
        assert_eq!(shown.kind, ComponentType::Batch);
        assert_eq!(shown.status, DisplayStatus::Warn);
        assert_eq!(shown.details, "disk at 91%");
    }

    #[test]
    fn test_order_is_preserved() {
        let components = vec![component("c", "ok"), component("a", "ok"), component("b", "ok")];
        let state = reduce(reduce(ViewState::default(), list(components)), info("prod"));

        let ids: Vec<&str> = state.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_failure_sets_resource_message() {
        let state = reduce(ViewState::default(), info_failed());
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.error_message(), Some(Resource::ServerInfo.failure_message()));

        let state = reduce(ViewState::default(), list_failed());
        assert_eq!(state.error_message(), Some(Resource::Components.failure_message()));
    }

    #[test]
    fn test_error_is_terminal() {
        let failed = reduce(ViewState::default(), info_failed());
        let state = reduce(failed, list(vec![component("svc1", "running")]));
        assert_eq!(state.phase(), Phase::Error);
        assert!(state.components().is_empty());

        // First error message is kept
        let state = reduce(state, list_failed());
        assert_eq!(state.error_message(), Some(Resource::ServerInfo.failure_message()));
    }

    #[test]
    fn test_failure_after_ready_still_errors() {
        let ready = reduce(reduce(ViewState::default(), info("prod")), list(vec![]));
        assert_eq!(ready.phase(), Phase::Ready);

        let state = reduce(ready, list_failed());
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_empty_list_is_ready() {
        let state = reduce(reduce(ViewState::default(), list(vec![])), info("prod"));
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.components().is_empty());
        assert_eq!(state.server_info().map(|i| i.database.as_str()), Some("prod"));
    }

    #[test]
    fn test_duplicate_ids_are_kept_as_rows() {
        let state = reduce(ViewState::default(), list(vec![component("dup", "ok"), component("dup", "failed")]));
        assert_eq!(state.components().len(), 2);
    }

    #[test]
    fn test_only_error_is_terminal() {
        assert!(!ViewState::default().is_terminal());

        let ready = reduce(reduce(ViewState::default(), info("prod")), list(vec![]));
        assert!(!ready.is_terminal());

        assert!(reduce(ready, info_failed()).is_terminal());
    }

    #[test]
    fn test_event_error_accessor() {
        assert!(info_failed().error().is_some());
        assert!(info("prod").error().is_none());
        assert_eq!(list_failed().resource(), Resource::Components);
    }
}
