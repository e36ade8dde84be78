use anyhow::Result;

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::{contracts::QueryDispatcher, submit_query::PendingQuery},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter {
    pub config: AppConfig,
}

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.config.clone())
    }
}

/// Keeps dispatched queries instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    pub dispatched: Vec<PendingQuery>,
}

impl QueryDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, pending: PendingQuery) {
        self.dispatched.push(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::message::MessageId, query::wire::QueryRequest};

    #[test]
    fn stub_config_returns_given_config() {
        let adapter = StubConfigAdapter::default();
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_dispatcher_keeps_order() {
        let mut dispatcher = RecordingDispatcher::default();
        for id in 1..=2 {
            dispatcher.dispatch(PendingQuery {
                placeholder_id: MessageId(id),
                request: QueryRequest::new("u", format!("q{id}")),
            });
        }

        let ids: Vec<_> = dispatcher.dispatched.iter().map(|p| p.placeholder_id).collect();
        assert_eq!(ids, vec![MessageId(1), MessageId(2)]);
    }
}
