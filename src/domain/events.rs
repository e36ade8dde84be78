use super::message::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    ReplyReceived(ReplyEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

/// Server reply addressed to the placeholder bubble that awaits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEvent {
    pub message_id: MessageId,
    pub outcome: ReplyOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Answer(String),
    Failed(ReplyFailure),
}

/// Cause of a failed query. Only used for logging; users see one generic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFailure {
    Transport,
    Timeout,
    Status(u16),
    InvalidBody,
}

impl ReplyFailure {
    pub fn code(self) -> &'static str {
        match self {
            Self::Transport => "QUERY_TRANSPORT_FAILED",
            Self::Timeout => "QUERY_TIMEOUT",
            Self::Status(_) => "QUERY_STATUS_NOT_OK",
            Self::InvalidBody => "QUERY_INVALID_BODY",
        }
    }
}
