//! Reactive binding graph for the city climate dashboard.
//!
//! Inputs are named selectors, outputs are named slots. A [`BindingGraph`]
//! holds one static [`Binding`] per output declaring which selectors it reads
//! and which update function recomputes it. A [`Session`] holds one viewer's
//! filter values and rendered slots; changing a selector recomputes exactly
//! the slots bound to it. A [`SessionRegistry`] keys sessions by id so
//! concurrent viewers never share filter state.
//!
//! - `slot`: input/output ids and the slot state machine
//! - `graph`: selectors, binding declarations and graph validation
//! - `session`: per-viewer filter state and rendering
//! - `registry`: sessions keyed by id over one shared graph and data set
//! - `dashboard`: the concrete wiring of the climate dashboard
//! - `concurrent` (feature `tokio`): render pending slots on worker tasks

pub mod dashboard;
pub mod error;
pub mod graph;
pub mod registry;
pub mod session;
pub mod slot;

#[cfg(feature = "tokio")]
pub mod concurrent;

pub use error::BindingError;
pub use graph::{Binding, BindingGraph, BindingGraphBuilder, Selector, UpdateFn};
pub use registry::SessionRegistry;
pub use session::{FilterState, RenderJob, Session, SessionId};
pub use slot::{InputId, OutputId, SlotState};
