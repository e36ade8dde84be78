/// Identifier of a chat bubble, unique within one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// Who a bubble belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
        }
    }
}

/// Lifecycle of a bubble. Only bot bubbles ever leave `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Delivered,
    /// Placeholder waiting for the server reply.
    Pending,
    /// Placeholder overwritten with the generic error text.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub status: MessageStatus,
    pub timestamp_ms: i64,
}

const EMPTY_REPLY_LABEL: &str = "[Empty reply]";

impl ChatMessage {
    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }

    /// Returns the text to show in the bubble.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() && self.sender == Sender::Bot && !self.is_pending() {
            EMPTY_REPLY_LABEL
        } else {
            &self.text
        }
    }
}
