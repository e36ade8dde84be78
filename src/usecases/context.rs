use tracing_appender::non_blocking::WorkerGuard;

use crate::{infra::config::AppConfig, query::QueryGateway};

/// Everything the shell and the one-shot command need after startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub gateway: QueryGateway,
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, gateway: QueryGateway, log_guard: Option<WorkerGuard>) -> Self {
        Self {
            config,
            gateway,
            _log_guard: log_guard,
        }
    }

    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings::from_config(&self.config)
    }
}

/// Per-session values used when submitting queries and applying replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub user_id: String,
    pub placeholder: String,
    pub error_message: String,
}

impl ChatSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            user_id: config.server.user_id.clone(),
            placeholder: config.ui.placeholder.clone(),
            error_message: config.ui.error_message.clone(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
