use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput, ReplyEvent},
    shell_state::ShellState,
    status::RequestStatus,
};

use super::{
    context::ChatSettings,
    contracts::{QueryDispatcher, ShellOrchestrator},
    receive_reply::{receive_reply, ReplyApplied},
    submit_query::{submit_query, SubmitQueryError},
};

/// Lines moved by PageUp/PageDown.
const PAGE_SCROLL_LINES: usize = 10;

pub struct DefaultShellOrchestrator<D>
where
    D: QueryDispatcher,
{
    state: ShellState,
    dispatcher: D,
    settings: ChatSettings,
}

impl<D> DefaultShellOrchestrator<D>
where
    D: QueryDispatcher,
{
    pub fn new(dispatcher: D, settings: ChatSettings) -> Self {
        Self {
            state: ShellState::default(),
            dispatcher,
            settings,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "c" => self.state.stop(),
                "u" => self.state.message_input_mut().clear(),
                "end" => self.state.conversation_mut().scroll_to_bottom(),
                _ => {}
            }
            return;
        }

        match key.key.as_str() {
            "enter" => self.submit(),
            "esc" => self.state.stop(),
            "backspace" => self.state.message_input_mut().delete_char_before(),
            "delete" => self.state.message_input_mut().delete_char_at(),
            "left" => self.state.message_input_mut().move_cursor_left(),
            "right" => self.state.message_input_mut().move_cursor_right(),
            "home" => self.state.message_input_mut().move_cursor_home(),
            "end" => self.state.message_input_mut().move_cursor_end(),
            "up" => self.state.conversation_mut().scroll_up(1),
            "down" => self.state.conversation_mut().scroll_down(1),
            "pageup" => self.state.conversation_mut().scroll_up(PAGE_SCROLL_LINES),
            "pagedown" => self.state.conversation_mut().scroll_down(PAGE_SCROLL_LINES),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    self.state.message_input_mut().insert_char(ch);
                }
            }
        }
    }

    fn submit(&mut self) {
        let (conversation, input) = self.state.conversation_and_input_mut();

        match submit_query(conversation, input, &self.settings) {
            Ok(pending) => {
                self.state.set_request_status(RequestStatus::Waiting);
                self.dispatcher.dispatch(pending);
            }
            Err(SubmitQueryError::EmptyQuery) => {
                tracing::debug!("ignoring empty submission");
            }
        }
    }

    fn apply_reply(&mut self, event: ReplyEvent) {
        let applied = receive_reply(
            self.state.conversation_mut(),
            event,
            &self.settings.error_message,
        );

        let still_waiting = self.state.conversation().pending_count() > 0;
        let status = match applied {
            ReplyApplied::Ignored => return,
            ReplyApplied::Failed => RequestStatus::Failed,
            ReplyApplied::Answered if still_waiting => RequestStatus::Waiting,
            ReplyApplied::Answered => RequestStatus::Ok,
        };
        self.state.set_request_status(status);
    }
}

impl<D> ShellOrchestrator for DefaultShellOrchestrator<D>
where
    D: QueryDispatcher,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::ReplyReceived(reply) => self.apply_reply(reply),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            events::{ReplyFailure, ReplyOutcome},
            message::{MessageStatus, Sender},
        },
        infra::stubs::RecordingDispatcher,
    };

    fn orchestrator() -> DefaultShellOrchestrator<RecordingDispatcher> {
        DefaultShellOrchestrator::new(RecordingDispatcher::default(), ChatSettings::default())
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    fn type_text(orchestrator: &mut DefaultShellOrchestrator<RecordingDispatcher>, text: &str) {
        for ch in text.chars() {
            orchestrator
                .handle_event(key(&ch.to_string()))
                .expect("key must be handled");
        }
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn esc_and_ctrl_c_stop_the_shell() {
        let mut by_esc = orchestrator();
        by_esc.handle_event(key("esc")).expect("esc must be handled");
        assert!(!by_esc.state().is_running());

        let mut by_ctrl_c = orchestrator();
        by_ctrl_c
            .handle_event(AppEvent::InputKey(KeyInput::new("c", true)))
            .expect("ctrl+c must be handled");
        assert!(!by_ctrl_c.state().is_running());
    }

    #[test]
    fn typing_q_is_text_not_quit() {
        let mut orchestrator = orchestrator();

        type_text(&mut orchestrator, "q");

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().message_input().text(), "q");
    }

    #[test]
    fn enter_submits_and_dispatches_query() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "precio del plan pro");

        orchestrator.handle_event(key("enter")).expect("enter must be handled");

        let messages = orchestrator.state().conversation().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].status, MessageStatus::Pending);
        assert_eq!(orchestrator.dispatcher.dispatched.len(), 1);
        assert_eq!(
            orchestrator.dispatcher.dispatched[0].request.query,
            "precio del plan pro"
        );
        assert_eq!(
            orchestrator.dispatcher.dispatched[0].placeholder_id,
            messages[1].id
        );
        assert!(orchestrator.state().message_input().is_empty());
        assert_eq!(orchestrator.state().request_status(), RequestStatus::Waiting);
    }

    #[test]
    fn enter_on_blank_input_does_nothing() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "   ");

        orchestrator.handle_event(key("enter")).expect("enter must be handled");

        assert!(orchestrator.state().conversation().is_empty());
        assert!(orchestrator.dispatcher.dispatched.is_empty());
        assert_eq!(orchestrator.state().request_status(), RequestStatus::Idle);
    }

    #[test]
    fn reply_event_fills_placeholder() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "hola");
        orchestrator.handle_event(key("enter")).expect("enter must be handled");
        let placeholder_id = orchestrator.dispatcher.dispatched[0].placeholder_id;

        orchestrator
            .handle_event(AppEvent::ReplyReceived(ReplyEvent {
                message_id: placeholder_id,
                outcome: ReplyOutcome::Answer("¡Hola! ¿En qué te ayudo?".to_owned()),
            }))
            .expect("reply must be handled");

        let reply = orchestrator
            .state()
            .conversation()
            .get(placeholder_id)
            .expect("placeholder must exist");
        assert_eq!(reply.text, "¡Hola! ¿En qué te ayudo?");
        assert_eq!(orchestrator.state().request_status(), RequestStatus::Ok);
    }

    #[test]
    fn failed_reply_shows_configured_error() {
        let settings = ChatSettings {
            error_message: "Lo siento, ocurrió un error.".to_owned(),
            ..ChatSettings::default()
        };
        let mut orchestrator = DefaultShellOrchestrator::new(RecordingDispatcher::default(), settings);
        type_text(&mut orchestrator, "hola");
        orchestrator.handle_event(key("enter")).expect("enter must be handled");
        let placeholder_id = orchestrator.dispatcher.dispatched[0].placeholder_id;

        orchestrator
            .handle_event(AppEvent::ReplyReceived(ReplyEvent {
                message_id: placeholder_id,
                outcome: ReplyOutcome::Failed(ReplyFailure::Status(500)),
            }))
            .expect("reply must be handled");

        let reply = orchestrator
            .state()
            .conversation()
            .get(placeholder_id)
            .expect("placeholder must exist");
        assert_eq!(reply.text, "Lo siento, ocurrió un error.");
        assert_eq!(orchestrator.state().request_status(), RequestStatus::Failed);
    }

    #[test]
    fn status_keeps_waiting_while_other_queries_are_pending() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "one");
        orchestrator.handle_event(key("enter")).expect("enter must be handled");
        type_text(&mut orchestrator, "two");
        orchestrator.handle_event(key("enter")).expect("enter must be handled");
        let first = orchestrator.dispatcher.dispatched[0].placeholder_id;

        orchestrator
            .handle_event(AppEvent::ReplyReceived(ReplyEvent {
                message_id: first,
                outcome: ReplyOutcome::Answer("1".to_owned()),
            }))
            .expect("reply must be handled");

        assert_eq!(orchestrator.state().conversation().messages().len(), 4);
        assert_eq!(orchestrator.state().request_status(), RequestStatus::Waiting);
    }

    #[test]
    fn scroll_keys_move_view_and_new_messages_return_to_bottom() {
        let mut orchestrator = orchestrator();

        orchestrator.handle_event(key("pageup")).expect("pageup must be handled");
        orchestrator.handle_event(key("up")).expect("up must be handled");
        assert_eq!(
            orchestrator.state().conversation().scroll_from_bottom(),
            PAGE_SCROLL_LINES + 1
        );

        orchestrator.handle_event(key("down")).expect("down must be handled");
        assert_eq!(
            orchestrator.state().conversation().scroll_from_bottom(),
            PAGE_SCROLL_LINES
        );

        type_text(&mut orchestrator, "hi");
        orchestrator.handle_event(key("enter")).expect("enter must be handled");
        assert_eq!(orchestrator.state().conversation().scroll_from_bottom(), 0);
    }

    #[test]
    fn editing_keys_update_input() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "abc");

        orchestrator.handle_event(key("left")).expect("left must be handled");
        orchestrator.handle_event(key("backspace")).expect("backspace must be handled");
        orchestrator.handle_event(key("home")).expect("home must be handled");
        orchestrator.handle_event(key("delete")).expect("delete must be handled");

        assert_eq!(orchestrator.state().message_input().text(), "c");

        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new("u", true)))
            .expect("ctrl+u must be handled");
        assert!(orchestrator.state().message_input().is_empty());
    }

    #[test]
    fn tick_changes_nothing() {
        let mut orchestrator = orchestrator();
        let before = orchestrator.state().clone();

        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        assert_eq!(orchestrator.state(), &before);
    }
}
