use super::message::{ChatMessage, MessageId, MessageStatus, Sender};
use super::status::now_unix_ms;

/// Bubbles of the current session plus the scroll position of the panel.
///
/// Scrolling is tracked as a distance from the newest line so the view stays
/// pinned to the bottom without knowing the rendered height.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
    next_id: u64,
    scroll_from_bottom: usize,
}

impl ConversationState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_pending()).count()
    }

    /// Lines between the bottom of the view and the newest line.
    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Sender::User, text.into(), MessageStatus::Delivered)
    }

    pub fn push_placeholder(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Sender::Bot, text.into(), MessageStatus::Pending)
    }

    /// Overwrites a pending bubble in place.
    ///
    /// Returns false without touching anything when `id` is unknown or the
    /// bubble was already resolved.
    pub fn resolve(&mut self, id: MessageId, text: impl Into<String>, status: MessageStatus) -> bool {
        let Some(message) = self
            .messages
            .iter_mut()
            .find(|message| message.id == id && message.is_pending())
        else {
            return false;
        };

        message.text = text.into();
        message.status = status;
        self.scroll_to_bottom();
        true
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    /// Clamps the scroll distance to what the rendered content allows.
    pub fn clamp_scroll(&mut self, max_from_bottom: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.min(max_from_bottom);
    }

    fn push(&mut self, sender: Sender, text: String, status: MessageStatus) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);

        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            status,
            timestamp_ms: now_unix_ms() as i64,
        });
        self.scroll_to_bottom();

        id
    }
}
