use crate::domain::{
    conversation_state::ConversationState,
    events::{ReplyEvent, ReplyOutcome},
    message::MessageStatus,
};

const REPLY_TARGET_MISSING: &str = "QUERY_REPLY_TARGET_MISSING";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyApplied {
    Answered,
    Failed,
    /// No pending placeholder matched the reply.
    Ignored,
}

/// Overwrites the placeholder named by `event`.
///
/// Every failure cause shows the same `error_message`.
pub fn receive_reply(
    conversation: &mut ConversationState,
    event: ReplyEvent,
    error_message: &str,
) -> ReplyApplied {
    let (text, status, applied) = match event.outcome {
        ReplyOutcome::Answer(answer) => (answer, MessageStatus::Delivered, ReplyApplied::Answered),
        ReplyOutcome::Failed(_) => (
            error_message.to_owned(),
            MessageStatus::Failed,
            ReplyApplied::Failed,
        ),
    };

    if conversation.resolve(event.message_id, text, status) {
        applied
    } else {
        tracing::debug!(
            code = REPLY_TARGET_MISSING,
            message_id = event.message_id.0,
            "reply has no pending placeholder"
        );
        ReplyApplied::Ignored
    }
}
