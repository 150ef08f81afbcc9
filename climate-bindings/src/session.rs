//! Per-viewer filter state and slot rendering.
//!
//! A [`Session`] owns the current selector values of one viewer and the
//! state of every output slot. Rendering is split in two halves so callers
//! can run update functions off the session lock:
//! [`begin_render`](Session::begin_render) moves stale slots to `Computing`
//! and hands out [`RenderJob`]s, [`finish_render`](Session::finish_render)
//! stores their views. A result for a slot that was invalidated again while
//! its job ran is discarded, so the last selection always wins.

use crate::{
    error::{BindingError, Result},
    graph::{BindingGraph, UpdateFn},
    slot::{InputId, OutputId, SlotState},
};
use climate_views::View;
use std::{collections::BTreeMap, fmt, sync::Arc};

/// Opaque id of one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        SessionId(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current value of every selector for one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState(BTreeMap<InputId, String>);

impl FilterState {
    /// Every selector at its startup default.
    pub fn defaults<D>(graph: &BindingGraph<D>) -> Self {
        FilterState(
            graph
                .selectors()
                .iter()
                .map(|s| (s.id(), s.default_value().to_string()))
                .collect(),
        )
    }

    pub fn get(&self, input: InputId) -> Option<&str> {
        self.0.get(&input).map(String::as_str)
    }

    pub fn set(&mut self, input: InputId, value: impl Into<String>) {
        self.0.insert(input, value.into());
    }
}

/// One pending slot computation, detached from the session.
///
/// Holds a snapshot of the input values the update function will see, so it
/// can run on another thread while the session keeps accepting selections.
pub struct RenderJob<D> {
    output: OutputId,
    update: UpdateFn<D>,
    values: Vec<String>,
    epoch: u64,
}

impl<D> RenderJob<D> {
    pub fn output(&self) -> OutputId {
        self.output
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn run(&self, data: &D) -> Arc<View> {
        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        log::debug!("recomputing {} with {:?}", self.output, values);
        Arc::new((self.update)(data, &values))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    filters: FilterState,
    slots: BTreeMap<OutputId, SlotState>,
    /// Bumped each time a slot is invalidated; stale job results are dropped
    epochs: BTreeMap<OutputId, u64>,
}

impl Session {
    /// Open a session with every selector at its default and every slot
    /// rendered.
    pub fn open<D>(id: SessionId, graph: &BindingGraph<D>, data: &D) -> Self {
        let mut session = Session::pending(id, graph);
        session.render_pending(graph, data);
        session
    }

    /// Open a session with every slot `Stale`. Used by callers that render
    /// the initial views themselves.
    pub fn pending<D>(id: SessionId, graph: &BindingGraph<D>) -> Self {
        let outputs = graph.bindings().iter().map(|b| b.output());
        Session {
            id,
            filters: FilterState::defaults(graph),
            slots: outputs.clone().map(|o| (o, SlotState::Stale)).collect(),
            epochs: outputs.map(|o| (o, 0)).collect(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn filter(&self, input: InputId) -> Option<&str> {
        self.filters.get(input)
    }

    pub fn state(&self, output: OutputId) -> Option<&SlotState> {
        self.slots.get(&output)
    }

    pub fn view(&self, output: OutputId) -> Option<&Arc<View>> {
        self.slots.get(&output).and_then(SlotState::view)
    }

    /// Slots waiting for a render, in id order.
    pub fn stale(&self) -> Vec<OutputId> {
        self.slots
            .iter()
            .filter(|(_, state)| state.is_stale())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Store a selector value and mark every slot bound to it `Stale`.
    ///
    /// Values outside the selector's options are accepted and logged; the
    /// bound views render them as empty charts. Returns the invalidated
    /// slots in declaration order.
    pub fn invalidate<D>(
        &mut self,
        graph: &BindingGraph<D>,
        input: &str,
        value: &str,
    ) -> Result<Vec<OutputId>> {
        let id = graph
            .input_named(input)
            .ok_or_else(|| BindingError::UnknownInput(input.to_string()))?;
        if let Some(selector) = graph.selector(id) {
            if !selector.accepts(value) {
                log::warn!("session {}: {} set to unknown value {:?}", self.id, id, value);
            }
        }
        self.filters.set(id, value);

        let outputs: Vec<OutputId> = graph.dependents(id).map(|b| b.output()).collect();
        for output in &outputs {
            self.mark_stale(*output);
        }
        Ok(outputs)
    }

    /// Move every `Stale` slot to `Computing` and return the jobs that
    /// recompute them, in declaration order.
    pub fn begin_render<D>(&mut self, graph: &BindingGraph<D>) -> Vec<RenderJob<D>> {
        let mut jobs = Vec::new();
        for binding in graph.bindings() {
            let output = binding.output();
            let Some(state) = self.slots.get_mut(&output) else {
                continue;
            };
            if !state.is_stale() {
                continue;
            }
            *state = SlotState::Computing;
            let values = binding
                .inputs()
                .iter()
                .map(|input| self.filters.get(*input).unwrap_or_default().to_string())
                .collect();
            jobs.push(RenderJob {
                output,
                update: binding.update(),
                values,
                epoch: self.epochs.get(&output).copied().unwrap_or_default(),
            });
        }
        jobs
    }

    /// Store the view computed by `job`. Returns `false` and leaves the slot
    /// alone if the slot was invalidated after the job was handed out.
    pub fn finish_render<D>(&mut self, job: &RenderJob<D>, view: Arc<View>) -> bool {
        let current = self.epochs.get(&job.output).copied() == Some(job.epoch);
        match self.slots.get_mut(&job.output) {
            Some(state) if current && matches!(state, SlotState::Computing) => {
                *state = SlotState::Rendered(view);
                true
            }
            _ => {
                log::debug!("session {}: dropping outdated render of {}", self.id, job.output);
                false
            }
        }
    }

    /// Put a slot whose job never produced a view back to `Stale`, so the
    /// next dispatch picks it up again. Returns `false` if the slot moved on
    /// since the job was handed out.
    pub fn abandon_render<D>(&mut self, job: &RenderJob<D>) -> bool {
        let current = self.epochs.get(&job.output).copied() == Some(job.epoch);
        match self.slots.get_mut(&job.output) {
            Some(state) if current && matches!(state, SlotState::Computing) => {
                log::warn!("session {}: render of {} abandoned", self.id, job.output);
                *state = SlotState::Stale;
                true
            }
            _ => false,
        }
    }

    /// Render every `Stale` slot in place. Returns the slots rendered.
    pub fn render_pending<D>(&mut self, graph: &BindingGraph<D>, data: &D) -> Vec<OutputId> {
        let jobs = self.begin_render(graph);
        let mut rendered = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let view = job.run(data);
            if self.finish_render(job, view) {
                rendered.push(job.output);
            }
        }
        rendered
    }

    /// Change one selector and recompute the slots bound to it.
    pub fn select<D>(
        &mut self,
        graph: &BindingGraph<D>,
        data: &D,
        input: &str,
        value: &str,
    ) -> Result<Vec<OutputId>> {
        self.invalidate(graph, input, value)?;
        Ok(self.render_pending(graph, data))
    }

    /// Recompute one slot with the current selector values.
    pub fn refresh<D>(
        &mut self,
        graph: &BindingGraph<D>,
        data: &D,
        output: &str,
    ) -> Result<Arc<View>> {
        let id = graph
            .output_named(output)
            .ok_or_else(|| BindingError::UnknownOutput(output.to_string()))?;
        self.mark_stale(id);
        self.render_pending(graph, data);
        self.view(id).cloned().ok_or(BindingError::NotRendered(id))
    }

    fn mark_stale(&mut self, output: OutputId) {
        if let Some(state) = self.slots.get_mut(&output) {
            *state = SlotState::Stale;
        }
        *self.epochs.entry(output).or_default() += 1;
    }
}
