use std::{path::Path, sync::mpsc};

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{
        self,
        config::{AppConfig, ConfigOverrides, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        storage_layout::StorageLayout,
    },
    query::QueryGateway,
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path, overrides);
    let config = load_config(&config_adapter)?;
    let log_guard = init_logging(&config)?;

    tracing::info!(
        endpoint = %config.server.endpoint_url(),
        user_id = %config.server.user_id,
        "configuration loaded"
    );

    let gateway = QueryGateway::new(&config.server)?;
    Ok(AppContext::new(config, gateway, Some(log_guard)))
}

/// Wires the keyboard, the reply channel and the orchestrator together.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let (reply_tx, reply_rx) = mpsc::channel();
    let dispatcher = context.gateway.dispatcher(reply_tx);

    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(reply_rx)),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            dispatcher,
            context.chat_settings(),
        )),
    }
}

fn load_config(adapter: &dyn ConfigAdapter) -> Result<AppConfig, AppError> {
    adapter.load().map_err(AppError::Other)
}

fn init_logging(config: &AppConfig) -> Result<WorkerGuard, AppError> {
    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    infra::logging::init(&config.logging, &layout.log_dir)
}
