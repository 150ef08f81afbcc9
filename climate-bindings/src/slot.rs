use climate_views::View;
use std::{fmt, sync::Arc};

/// Name of a selector, e.g. `dropdown1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(pub &'static str);

/// Name of an output slot, e.g. `bar-chart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutputId(pub &'static str);

impl InputId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Lifecycle of one output slot: `Stale -> Computing -> Rendered`.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    /// An input changed; the slot must be recomputed
    Stale,
    /// The update function is running
    Computing,
    Rendered(Arc<View>),
}

impl SlotState {
    pub fn view(&self) -> Option<&Arc<View>> {
        match self {
            SlotState::Rendered(view) => Some(view),
            SlotState::Stale | SlotState::Computing => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, SlotState::Stale)
    }
}
