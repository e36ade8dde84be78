use reqwest::{header, Client};

use crate::infra::config::ServerConfig;

use super::{
    error::QueryClientError,
    wire::{QueryRequest, QueryResponse},
};

/// Async client for the `/query` endpoint.
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    http: Client,
    endpoint: String,
}

impl HttpQueryClient {
    pub fn new(config: &ServerConfig) -> Result<Self, QueryClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|err| QueryClientError::Build(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one query and returns the `answer` field of the reply.
    ///
    /// Any non-2xx status is an error, whatever the body says.
    pub async fn ask(&self, request: &QueryRequest) -> Result<String, QueryClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let reply: QueryResponse = serde_json::from_slice(&body)?;

        Ok(reply.into_answer())
    }
}
