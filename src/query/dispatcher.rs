use std::sync::{mpsc::Sender, Arc};

use tokio::runtime::Handle;

use crate::{
    domain::events::{AppEvent, ReplyEvent, ReplyOutcome},
    usecases::{contracts::QueryDispatcher, submit_query::PendingQuery},
};

use super::{client::HttpQueryClient, wire::QueryRequest};

const QUERY_REQUEST_FAILED: &str = "QUERY_REQUEST_FAILED";
const QUERY_REPLY_DROPPED: &str = "QUERY_REPLY_DROPPED";

/// Runs every query as its own task and posts the outcome back to the UI loop.
pub struct BackgroundQueryDispatcher {
    runtime: Handle,
    client: Arc<HttpQueryClient>,
    reply_tx: Sender<AppEvent>,
}

impl BackgroundQueryDispatcher {
    pub fn new(runtime: Handle, client: Arc<HttpQueryClient>, reply_tx: Sender<AppEvent>) -> Self {
        Self {
            runtime,
            client,
            reply_tx,
        }
    }
}

impl QueryDispatcher for BackgroundQueryDispatcher {
    fn dispatch(&mut self, pending: PendingQuery) {
        let client = Arc::clone(&self.client);
        let reply_tx = self.reply_tx.clone();

        tracing::debug!(
            message_id = pending.placeholder_id.0,
            query_chars = pending.request.query.chars().count(),
            "dispatching query"
        );

        self.runtime.spawn(async move {
            let outcome = fetch_outcome(&client, &pending.request).await;
            let event = AppEvent::ReplyReceived(ReplyEvent {
                message_id: pending.placeholder_id,
                outcome,
            });

            if reply_tx.send(event).is_err() {
                tracing::debug!(
                    code = QUERY_REPLY_DROPPED,
                    message_id = pending.placeholder_id.0,
                    "reply arrived after the shell stopped"
                );
            }
        });
    }
}

/// Asks the server and folds any failure into a `ReplyOutcome`, logging the cause.
pub async fn fetch_outcome(client: &HttpQueryClient, request: &QueryRequest) -> ReplyOutcome {
    match client.ask(request).await {
        Ok(answer) => ReplyOutcome::Answer(answer),
        Err(error) => {
            let failure = error.failure();
            tracing::warn!(
                code = QUERY_REQUEST_FAILED,
                cause = failure.code(),
                endpoint = client.endpoint(),
                error = %error,
                "query request failed"
            );
            ReplyOutcome::Failed(failure)
        }
    }
}
