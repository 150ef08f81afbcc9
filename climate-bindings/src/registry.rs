use crate::{
    error::{BindingError, Result},
    graph::BindingGraph,
    session::{Session, SessionId},
    slot::OutputId,
};
use climate_views::View;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

/// Sessions keyed by id over one shared graph and one shared data set.
///
/// The graph and data are immutable and shared behind `Arc`. Each session
/// sits behind its own lock, so selections in different sessions never
/// contend and never see each other's filter values.
pub struct SessionRegistry<D> {
    graph: Arc<BindingGraph<D>>,
    data: Arc<D>,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl<D> SessionRegistry<D> {
    pub fn new(graph: BindingGraph<D>, data: D) -> Self {
        SessionRegistry {
            graph: Arc::new(graph),
            data: Arc::new(data),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn graph(&self) -> &Arc<BindingGraph<D>> {
        &self.graph
    }

    pub fn data(&self) -> &Arc<D> {
        &self.data
    }

    /// Open (or reopen) a session with every slot rendered from defaults.
    pub fn open(&self, id: impl Into<SessionId>) -> SessionId {
        let id = id.into();
        let session = Session::open(id.clone(), &*self.graph, &*self.data);
        let replaced = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        if replaced.is_some() {
            log::info!("session {} reopened", id);
        } else {
            log::info!("session {} opened", id);
        }
        id
    }

    pub fn close(&self, id: &SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle to one session's lock.
    pub fn session(&self, id: &SessionId) -> Result<Arc<Mutex<Session>>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| BindingError::UnknownSession(id.clone()))
    }

    fn with_session<T>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let session = self.session(id)?;
        let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut guard))
    }

    /// Change one selector in one session. Returns the recomputed slots.
    pub fn select(&self, id: &SessionId, input: &str, value: &str) -> Result<Vec<OutputId>> {
        self.with_session(id, |s| s.select(&*self.graph, &*self.data, input, value))?
    }

    pub fn refresh(&self, id: &SessionId, output: &str) -> Result<Arc<View>> {
        self.with_session(id, |s| s.refresh(&*self.graph, &*self.data, output))?
    }

    /// The rendered view of one slot.
    pub fn view(&self, id: &SessionId, output: &str) -> Result<Arc<View>> {
        let output = self
            .graph
            .output_named(output)
            .ok_or_else(|| BindingError::UnknownOutput(output.to_string()))?;
        self.with_session(id, |s| s.view(output).cloned())?
            .ok_or(BindingError::NotRendered(output))
    }

    /// Current value of one selector.
    pub fn filter(&self, id: &SessionId, input: &str) -> Result<String> {
        let input_id = self
            .graph
            .input_named(input)
            .ok_or_else(|| BindingError::UnknownInput(input.to_string()))?;
        self.with_session(id, |s| s.filter(input_id).unwrap_or_default().to_string())
    }
}
