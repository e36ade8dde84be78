use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub base_url: String,
    pub query_path: String,
    pub user_id: String,
    /// Whole-request deadline; 0 waits forever.
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_owned(),
            query_path: "/query".to_owned(),
            user_id: "web-ui-user".to_owned(),
            request_timeout_ms: 0,
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    /// Joins base URL and path with exactly one slash between them.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.query_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub placeholder: String,
    pub error_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: "...".to_owned(),
            error_message: "Lo siento, ocurrió un error. Por favor, inténtalo de nuevo.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_web_widget() {
        let config = AppConfig::default();

        assert_eq!(config.server.user_id, "web-ui-user");
        assert_eq!(config.server.endpoint_url(), "http://127.0.0.1:8000/query");
        assert_eq!(
            config.ui.error_message,
            "Lo siento, ocurrió un error. Por favor, inténtalo de nuevo."
        );
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let config = ServerConfig {
            base_url: "http://localhost:8000/".to_owned(),
            query_path: "/query".to_owned(),
            ..ServerConfig::default()
        };

        assert_eq!(config.endpoint_url(), "http://localhost:8000/query");
    }

    #[test]
    fn endpoint_url_adds_missing_slash() {
        let config = ServerConfig {
            base_url: "https://bot.example.com/api".to_owned(),
            query_path: "query".to_owned(),
            ..ServerConfig::default()
        };

        assert_eq!(config.endpoint_url(), "https://bot.example.com/api/query");
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        assert_eq!(ServerConfig::default().request_timeout(), None);

        let config = ServerConfig {
            request_timeout_ms: 2_500,
            ..ServerConfig::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2_500)));
    }
}
