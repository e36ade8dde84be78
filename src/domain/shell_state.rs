use super::{
    conversation_state::ConversationState, message_input_state::MessageInputState,
    status::RequestStatus,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    conversation: ConversationState,
    message_input: MessageInputState,
    request_status: RequestStatus,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            conversation: ConversationState::default(),
            message_input: MessageInputState::default(),
            request_status: RequestStatus::Idle,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationState {
        &mut self.conversation
    }

    pub fn message_input(&self) -> &MessageInputState {
        &self.message_input
    }

    pub fn message_input_mut(&mut self) -> &mut MessageInputState {
        &mut self.message_input
    }

    /// Splits the borrow so a submission can read the input and append bubbles.
    pub fn conversation_and_input_mut(
        &mut self,
    ) -> (&mut ConversationState, &mut MessageInputState) {
        (&mut self.conversation, &mut self.message_input)
    }

    pub fn request_status(&self) -> RequestStatus {
        self.request_status
    }

    pub fn set_request_status(&mut self, status: RequestStatus) {
        self.request_status = status;
    }
}
