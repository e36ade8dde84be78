use std::process::ExitCode;

use anyhow::{bail, Result};

use crate::{
    cli::{Cli, Command},
    domain::{
        self,
        events::{ReplyFailure, ReplyOutcome},
    },
    infra, query, ui,
    usecases::{self, bootstrap, context::AppContext},
};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let context = bootstrap::bootstrap(cli.config.as_deref(), cli.overrides())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        query = query::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask { query } => ask_once(&context, &query),
    }
}

fn ask_once(context: &AppContext, words: &[String]) -> Result<ExitCode> {
    let Some(query) = normalize_query(words) else {
        bail!("query must not be empty");
    };

    tracing::info!(chars = query.chars().count(), "sending one-shot query");

    match context.gateway.ask_blocking(&query) {
        ReplyOutcome::Answer(answer) => {
            println!("{answer}");
            Ok(ExitCode::SUCCESS)
        }
        ReplyOutcome::Failed(failure) => {
            eprintln!("{}", failure_text(&context.config.ui.error_message, failure));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn normalize_query(words: &[String]) -> Option<String> {
    let query = words.join(" ");
    let query = query.trim();

    if query.is_empty() {
        None
    } else {
        Some(query.to_owned())
    }
}

/// The user sees the configured apology; the failure code only goes to the log.
fn failure_text(error_message: &str, failure: ReplyFailure) -> String {
    tracing::debug!(code = failure.code(), "one-shot query failed");
    error_message.to_owned()
}
