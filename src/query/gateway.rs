use std::sync::{mpsc::Sender, Arc};

use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::events::{AppEvent, ReplyOutcome},
    infra::{config::ServerConfig, error::AppError},
};

use super::{
    client::HttpQueryClient,
    dispatcher::{fetch_outcome, BackgroundQueryDispatcher},
    wire::QueryRequest,
};

const QUERY_WORKER_THREADS: usize = 2;

/// Owns the async runtime and HTTP client used to reach the query endpoint.
#[derive(Debug)]
pub struct QueryGateway {
    runtime: Runtime,
    client: Arc<HttpQueryClient>,
    user_id: String,
}

impl QueryGateway {
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(QUERY_WORKER_THREADS)
            .thread_name("qchat-query")
            .enable_all()
            .build()
            .map_err(AppError::RuntimeBuild)?;

        let client = HttpQueryClient::new(config).map_err(AppError::HttpClientBuild)?;

        tracing::debug!(endpoint = client.endpoint(), "query gateway ready");

        Ok(Self {
            runtime,
            client: Arc::new(client),
            user_id: config.user_id.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn dispatcher(&self, reply_tx: Sender<AppEvent>) -> BackgroundQueryDispatcher {
        BackgroundQueryDispatcher::new(
            self.runtime.handle().clone(),
            Arc::clone(&self.client),
            reply_tx,
        )
    }

    /// Sends one query and waits for it on the calling thread.
    pub fn ask_blocking(&self, query: &str) -> ReplyOutcome {
        let request = QueryRequest::new(self.user_id.clone(), query);
        self.runtime.block_on(fetch_outcome(&self.client, &request))
    }
}
