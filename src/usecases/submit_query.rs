//! Use case for submitting the typed query.
//!
//! Turns the input line into a user bubble plus a placeholder bot bubble and
//! returns the request that must be sent for that placeholder.

use crate::{
    domain::{
        conversation_state::ConversationState, message::MessageId,
        message_input_state::MessageInputState,
    },
    query::wire::QueryRequest,
};

use super::context::ChatSettings;

/// A request in flight, tied to the placeholder bubble its reply will overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub placeholder_id: MessageId,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitQueryError {
    /// Input is empty after trimming whitespace.
    EmptyQuery,
}

/// Submits the current input.
///
/// On success the input is cleared and exactly two bubbles are appended: the
/// user's query and a pending bot placeholder.
///
/// # Errors
/// Returns `SubmitQueryError::EmptyQuery` when the input is empty or
/// whitespace-only. Nothing is appended and the input is left untouched.
pub fn submit_query(
    conversation: &mut ConversationState,
    input: &mut MessageInputState,
    settings: &ChatSettings,
) -> Result<PendingQuery, SubmitQueryError> {
    let query = input.take_submission().ok_or(SubmitQueryError::EmptyQuery)?;

    conversation.push_user(query.clone());
    let placeholder_id = conversation.push_placeholder(settings.placeholder.clone());

    Ok(PendingQuery {
        placeholder_id,
        request: QueryRequest::new(settings.user_id.clone(), query),
    })
}
