//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The selector signals mirror the filter state
//! of the browser's session in the registry; effects push every change into
//! the registry and redraw the slots it recomputed.

use climate_bindings::{SessionId, SessionRegistry};
use climate_views::{DashboardConfig, DashboardData};
use dioxus::prelude::*;
use std::sync::Arc;

/// Session id of the single viewer in a browser tab.
pub const BROWSER_SESSION: &str = "browser";

/// Starting value of both city selectors; the binding graph starts its
/// selectors from the same config field.
pub fn initial_city(config: &DashboardConfig) -> String {
    config.default_city.name().to_string()
}

#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard registry (None until the datasets are loaded)
    pub registry: Signal<Option<Arc<SessionRegistry<DashboardData>>>>,
    /// This tab's session in the registry
    pub session: Signal<Option<SessionId>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// Value of the `dropdown1` selector
    pub dropdown_city: Signal<String>,
    /// Value of the `city` radio selector
    pub radio_city: Signal<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        let default = initial_city(config);
        Self {
            registry: Signal::new(None),
            session: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dropdown_city: Signal::new(default.clone()),
            radio_city: Signal::new(default),
        }
    }

    /// Registry and session id, once both are ready.
    pub fn active(&self) -> Option<(Arc<SessionRegistry<DashboardData>>, SessionId)> {
        let registry = self.registry.read().clone()?;
        let session = self.session.read().clone()?;
        Some((registry, session))
    }
}
