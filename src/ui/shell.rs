use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        endpoint = context.gateway.endpoint(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(
        |state| terminal.draw(|frame| view::render(frame, state, context.gateway.endpoint())),
        event_source,
        orchestrator,
    )?;

    tracing::info!(
        messages = orchestrator.state().conversation().messages().len(),
        "TUI shell stopped"
    );
    Ok(())
}

/// Draws, reads one event, dispatches it; repeats until the shell stops.
fn run_loop<D>(
    mut draw: D,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()>
where
    D: FnMut(&mut crate::domain::shell_state::ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
