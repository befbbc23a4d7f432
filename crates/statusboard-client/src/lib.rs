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

//! Client library for the statusboard dashboard.
//!
//! Loads a server identity record and a component list from a status
//! backend, normalizes the backend's status vocabulary and turns the result
//! into a render model. The layers can be used on their own:
//!
//! - **Wire layer** ([`wire`]): JSON records as the backend sends them
//! - **Normalizer** ([`normalize`]): wire status to display status
//! - **Presentation** ([`presentation`]): badge and icon lookups
//! - **View state** ([`view`]): the load lifecycle and its reducer
//! - **HTTP layer** ([`http`]): the [`StatusSource`] seam and its reqwest implementation
//! - **Render model** ([`render`]): what to paint for a given state
//!
//! # Quick Start
//!
//! ```no_run
//! use statusboard_client::{render, DashboardController, Endpoints, HttpStatusSource};
//!
//! let endpoints = Endpoints::new("http://status.example.com/api/").unwrap();
//! let controller = DashboardController::spawn(HttpStatusSource::new(endpoints), || {}).unwrap();
//!
//! match render::screen(&controller.snapshot()) {
//!     render::Screen::Loading { message } => println!("{message}"),
//!     render::Screen::Error { message, .. } => eprintln!("{message}"),
//!     render::Screen::Table(table) => println!("{} rows", table.rows.len()),
//! }
//! ```

pub mod http;
pub mod normalize;
pub mod presentation;
pub mod render;
pub mod view;
pub mod wire;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info};

pub use http::{EndpointError, Endpoints, FetchError, HttpStatusSource, StatusSource};
pub use normalize::{normalize, DisplayStatus};
pub use presentation::{icon_for, style_for, style_for_label, Badge, BadgeStyle, Icon};
pub use view::{reduce, DisplayComponent, FetchEvent, Phase, Resource, ViewState};
pub use wire::{ComponentType, WireComponent, WireServerInfo, WireStatus};

type ChangeNotifier = Arc<dyn Fn() + Send + Sync>;

/// Owns the dashboard load lifecycle.
///
/// Both retrievals run concurrently and each outcome is folded into the
/// shared [`ViewState`] through [`reduce`] as soon as it arrives. Clones
/// share the same state.
#[derive(Clone, Default)]
pub struct DashboardController {
    state: Arc<Mutex<ViewState>>,
    on_change: Option<ChangeNotifier>,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Create a controller in the `Loading` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `on_change` after every applied fetch outcome.
    #[must_use]
    pub fn with_notifier<F>(mut self, on_change: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Start loading on a background thread.
    ///
    /// The thread runs a single-threaded tokio runtime, issues both requests
    /// and exits once both have completed. There is no retry and no
    /// cancellation.
    pub fn spawn<S, F>(source: S, on_change: F) -> std::io::Result<Self>
    where
        S: StatusSource + Send + 'static,
        F: Fn() + Send + Sync + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let controller = Self::new().with_notifier(on_change);
        let worker = controller.clone();

        std::thread::Builder::new()
            .name("status-fetch".to_owned())
            .spawn(move || runtime.block_on(worker.load(&source)))?;

        Ok(controller)
    }

    /// Issue both retrievals back-to-back and apply each outcome on arrival.
    pub async fn load<S: StatusSource>(&self, source: &S) {
        info!("Loading server identity and component list");
        tokio::join!(
            async {
                let outcome = source.fetch_server_info().await;
                self.apply(FetchEvent::ServerInfo(outcome));
            },
            async {
                let outcome = source.fetch_components().await;
                self.apply(FetchEvent::Components(outcome));
            },
        );
    }

    /// Fold one fetch outcome into the state and return the resulting phase.
    pub fn apply(&self, event: FetchEvent) -> Phase {
        let phase = {
            let mut state = self.lock();
            log_outcome(&state, &event);

            let previous = std::mem::take(&mut *state);
            let before = previous.phase();
            *state = reduce(previous, event);
            let after = state.phase();
            if before != after {
                debug!("Dashboard phase {:?} -> {:?}", before, after);
            }
            after
        };

        if let Some(on_change) = &self.on_change {
            on_change();
        }

        phase
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    // Every write replaces the whole value, so a poisoned lock still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_outcome(state: &ViewState, event: &FetchEvent) {
    let resource = event.resource();

    if let Some(e) = event.error() {
        error!("Failed to load {}: {}", resource, e);
        return;
    }

    if state.is_terminal() {
        debug!("Ignoring {} outcome, dashboard already failed", resource);
        return;
    }

    match event {
        FetchEvent::ServerInfo(Ok(server_info)) => {
            info!("Loaded {}: database '{}'", resource, server_info.database);
        }
        FetchEvent::Components(Ok(components)) => {
            info!("Loaded {}: {} components", resource, components.len());
            for component in components {
                debug!(
                    "  {} [{}] {}",
                    component.id,
                    component.kind.as_str(),
                    component.status.as_str()
                );
            }
        }
        FetchEvent::ServerInfo(Err(_)) | FetchEvent::Components(Err(_)) => {}
    }
}
