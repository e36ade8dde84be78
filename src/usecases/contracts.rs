use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

use super::submit_query::PendingQuery;

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Sends a query without blocking the caller.
///
/// The outcome comes back later as `AppEvent::ReplyReceived`.
pub trait QueryDispatcher {
    fn dispatch(&mut self, pending: PendingQuery);
}
