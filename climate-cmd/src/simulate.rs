//! Replay of selector events against a session registry.

use anyhow::{anyhow, bail};
use climate_bindings::{dashboard::dashboard_registry, OutputId, SessionId};
use climate_views::DashboardData;
use std::{collections::HashSet, str::FromStr};

/// One selection: `session:input=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEvent {
    pub session: String,
    pub input: String,
    pub value: String,
}

impl FromStr for SelectEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (session, rest) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Event {:?} is not session:input=value", s))?;
        let (input, value) = rest
            .split_once('=')
            .ok_or_else(|| anyhow!("Event {:?} is not session:input=value", s))?;
        if session.is_empty() || input.is_empty() {
            bail!("Event {:?} needs a session and an input", s);
        }
        Ok(SelectEvent {
            session: session.to_string(),
            input: input.to_string(),
            value: value.to_string(),
        })
    }
}

/// Replay `events` in order. Sessions are opened on first use. Returns one
/// line per event naming the slots it recomputed.
pub async fn run_simulate(data: DashboardData, events: &[SelectEvent]) -> anyhow::Result<Vec<String>> {
    let registry = dashboard_registry(data)?;
    let mut opened = HashSet::new();
    let mut lines = Vec::with_capacity(events.len());

    for event in events {
        let session = SessionId::from(event.session.as_str());
        if opened.insert(session.clone()) {
            registry.open(session.clone());
        }
        let outputs = registry
            .select_concurrently(&session, &event.input, &event.value)
            .await?;
        let names: Vec<&str> = outputs.iter().map(OutputId::as_str).collect();
        lines.push(format!(
            "{}: {}={} -> {}",
            session,
            event.input,
            event.value,
            names.join(", ")
        ));
    }
    Ok(lines)
}
