use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{shell_state::ShellState, status::RequestStatus};

use super::message_input::render_message_input;
use super::message_rendering::build_conversation_lines;
use super::styles;

const EMPTY_CONVERSATION_HINT: &str = "No messages yet. Ask something below.";

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, endpoint: &str) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    // 3 lines for input: 1 border + 1 text + 1 border
    let [messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(content_area);

    render_conversation_panel(frame, messages_area, state, endpoint);
    render_message_input(frame, input_area, state.message_input());

    let status = Paragraph::new(status_line(state)).style(styles::status_bar_style());
    frame.render_widget(status, status_area);
}

fn render_conversation_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ShellState,
    endpoint: &str,
) {
    let block = Block::default()
        .title(conversation_title(endpoint))
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style());

    if state.conversation().is_empty() {
        let hint = Paragraph::new(EMPTY_CONVERSATION_HINT)
            .style(styles::empty_hint_style())
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    // Inner size = area minus borders
    let inner_width = area.width.saturating_sub(2) as usize;
    let viewport_height = area.height.saturating_sub(2) as usize;

    let lines = build_conversation_lines(state.conversation().messages(), inner_width);
    let total = lines.len();

    state
        .conversation_mut()
        .clamp_scroll(total.saturating_sub(viewport_height));
    let offset = scroll_offset(
        total,
        viewport_height,
        state.conversation().scroll_from_bottom(),
    );

    let panel = Paragraph::new(lines)
        .block(block)
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(panel, area);
}

/// First visible line so that the view ends `from_bottom` lines above the newest one.
fn scroll_offset(total_lines: usize, viewport_height: usize, from_bottom: usize) -> usize {
    total_lines
        .saturating_sub(viewport_height)
        .saturating_sub(from_bottom)
}

fn conversation_title(endpoint: &str) -> String {
    format!("Chat · {endpoint}")
}

fn status_line(state: &ShellState) -> String {
    let status = state.request_status();
    let pending = state.conversation().pending_count();

    let status_part = if status == RequestStatus::Waiting && pending > 1 {
        format!("status: {} ({pending} pending)", status.as_label())
    } else {
        format!("status: {}", status.as_label())
    };

    let scroll_part = match state.conversation().scroll_from_bottom() {
        0 => String::new(),
        lines => format!(" | scrolled up {lines} lines (Ctrl+End: latest)"),
    };

    format!("{status_part}{scroll_part} | Enter: send | ↑/↓ PgUp/PgDn: scroll | Esc: quit")
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn scroll_offset_pins_to_bottom() {
        assert_eq!(scroll_offset(50, 10, 0), 40);
        assert_eq!(scroll_offset(50, 10, 5), 35);
        assert_eq!(scroll_offset(50, 10, 90), 0);
        assert_eq!(scroll_offset(4, 10, 0), 0);
    }

    #[test]
    fn status_line_shows_request_status() {
        let mut state = ShellState::default();
        state.set_request_status(RequestStatus::Failed);

        let line = status_line(&state);

        assert!(line.contains("status: failed"));
        assert!(line.contains("Esc: quit"));
    }

    #[test]
    fn status_line_counts_pending_queries() {
        let mut state = ShellState::default();
        state.conversation_mut().push_placeholder("...");
        state.conversation_mut().push_placeholder("...");
        state.set_request_status(RequestStatus::Waiting);

        assert!(status_line(&state).contains("(2 pending)"));
    }

    #[test]
    fn status_line_reports_scrollback() {
        let mut state = ShellState::default();
        state.conversation_mut().scroll_up(3);

        assert!(status_line(&state).contains("scrolled up 3 lines"));
    }

    #[test]
    fn renders_hint_for_empty_conversation() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal must build");
        let mut state = ShellState::default();

        terminal
            .draw(|frame| render(frame, &mut state, "http://127.0.0.1:8000/query"))
            .expect("frame must render");

        let text = buffer_text(&terminal);
        assert!(text.contains("No messages yet"));
        assert!(text.contains("Chat"));
    }

    #[test]
    fn newest_reply_stays_visible_in_a_short_panel() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal must build");
        let mut state = ShellState::default();
        for index in 0..6 {
            state.conversation_mut().push_user(format!("question {index}"));
        }
        let placeholder = state.conversation_mut().push_placeholder("...");
        state.conversation_mut().resolve(
            placeholder,
            "final answer",
            crate::domain::message::MessageStatus::Delivered,
        );

        terminal
            .draw(|frame| render(frame, &mut state, "http://127.0.0.1:8000/query"))
            .expect("frame must render");

        let text = buffer_text(&terminal);
        assert!(text.contains("final answer"));
        assert!(!text.contains("question 0"));
    }

    #[test]
    fn scroll_distance_is_clamped_to_content() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal must build");
        let mut state = ShellState::default();
        state.conversation_mut().push_user("only one");
        state.conversation_mut().scroll_up(100);

        terminal
            .draw(|frame| render(frame, &mut state, "endpoint"))
            .expect("frame must render");

        assert_eq!(state.conversation().scroll_from_bottom(), 0);
    }
}
