//! Concurrent slot dispatch on tokio's blocking pool.
//!
//! Slots invalidated by one selection are independent, so their update
//! functions run as separate blocking tasks. The session lock is only held
//! while jobs are handed out and while results are written back; results are
//! written in declaration order whatever order the tasks finish in.

use crate::{
    error::Result,
    graph::BindingGraph,
    registry::SessionRegistry,
    session::{RenderJob, Session, SessionId},
    slot::OutputId,
};
use climate_views::View;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinSet;

/// Render every `Stale` slot of `session` concurrently. Returns the slots
/// whose views were stored.
///
/// A slot whose task panics goes back to `Stale` and is retried by the next
/// dispatch.
pub async fn render_pending_concurrently<D>(
    session: &Mutex<Session>,
    graph: &BindingGraph<D>,
    data: Arc<D>,
) -> Vec<OutputId>
where
    D: Send + Sync + 'static,
{
    let jobs: Vec<Arc<RenderJob<D>>> = session
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .begin_render(graph)
        .into_iter()
        .map(Arc::new)
        .collect();

    let mut tasks = JoinSet::new();
    for (index, job) in jobs.iter().enumerate() {
        let job = Arc::clone(job);
        let data = Arc::clone(&data);
        tasks.spawn_blocking(move || (index, job.run(&data)));
    }

    let mut views: Vec<Option<Arc<View>>> = vec![None; jobs.len()];
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok((index, view)) => views[index] = Some(view),
            Err(err) => log::error!("slot render task failed: {}", err),
        }
    }

    let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
    let mut rendered = Vec::with_capacity(jobs.len());
    for (job, view) in jobs.iter().zip(views) {
        match view {
            Some(view) => {
                if session.finish_render(job, view) {
                    rendered.push(job.output());
                }
            }
            None => {
                session.abandon_render(job);
            }
        }
    }
    rendered
}

impl<D> SessionRegistry<D>
where
    D: Send + Sync + 'static,
{
    /// Like [`select`](SessionRegistry::select), but recomputes the bound
    /// slots on blocking worker tasks.
    pub async fn select_concurrently(
        &self,
        id: &SessionId,
        input: &str,
        value: &str,
    ) -> Result<Vec<OutputId>> {
        let graph: &BindingGraph<D> = self.graph();
        let session = self.session(id)?;
        session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .invalidate(graph, input, value)?;
        Ok(render_pending_concurrently(&session, graph, Arc::clone(self.data())).await)
    }
}
