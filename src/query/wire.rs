use serde::{Deserialize, Serialize};

/// Body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub user_id: String,
    pub query: String,
}

impl QueryRequest {
    pub fn new(user_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            query: query.into(),
        }
    }
}

/// Successful reply of `POST /query`. Extra fields are ignored.
///
/// A missing or null `answer` is an empty reply, not a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl QueryResponse {
    pub fn into_answer(self) -> String {
        self.answer.unwrap_or_default()
    }
}
