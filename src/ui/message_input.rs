//! Query input box rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

const PLACEHOLDER_TEXT: &str = "Type a question and press Enter...";

const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let text_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(PROMPT_SYMBOL.len());
    let (visible, cursor_column) =
        visible_input(input_state.text(), input_state.cursor_position(), text_width);

    let paragraph = Paragraph::new(build_input_line(&visible)).block(
        Block::default()
            .title("Ask")
            .borders(Borders::ALL)
            .border_style(styles::input_border_style()),
    );
    frame.render_widget(paragraph, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(cursor_column.min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn build_input_line(visible: &str) -> Line<'static> {
    let body = if visible.is_empty() {
        Span::styled(PLACEHOLDER_TEXT, styles::input_placeholder_style())
    } else {
        Span::styled(visible.to_owned(), styles::input_text_style())
    };

    Line::from(vec![
        Span::styled(PROMPT_SYMBOL, styles::input_prompt_style()),
        body,
    ])
}

/// Picks the slice of `text` that fits `width` columns with the cursor in view.
///
/// Returns the visible text and the cursor column inside it.
fn visible_input(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk left from the cursor until the window is full, keeping one cell for it.
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let ch_width = chars[start - 1].width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        start -= 1;
    }

    let mut visible = String::new();
    let mut visible_width = 0;
    for ch in &chars[start..] {
        let ch_width = ch.width().unwrap_or(0);
        if visible_width + ch_width > width {
            break;
        }
        visible.push(*ch);
        visible_width += ch_width;
    }

    let cursor_column = chars[start..cursor]
        .iter()
        .map(|ch| ch.width().unwrap_or(0))
        .sum();

    (visible, cursor_column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_placeholder_when_empty() {
        let text = line_text(&build_input_line(""));

        assert!(text.starts_with(PROMPT_SYMBOL));
        assert!(text.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn shows_typed_text() {
        let text = line_text(&build_input_line("Hi"));

        assert_eq!(text, "> Hi");
    }

    #[test]
    fn short_text_is_fully_visible() {
        assert_eq!(visible_input("hello", 5, 20), ("hello".to_owned(), 5));
        assert_eq!(visible_input("hello", 2, 20), ("hello".to_owned(), 2));
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let (visible, column) = visible_input("abcdefghij", 10, 5);

        assert_eq!(visible, "ghij");
        assert_eq!(column, 4);
    }

    #[test]
    fn cursor_at_start_shows_head_of_text() {
        let (visible, column) = visible_input("abcdefghij", 0, 5);

        assert_eq!(visible, "abcde");
        assert_eq!(column, 0);
    }

    #[test]
    fn zero_width_shows_nothing() {
        assert_eq!(visible_input("abc", 1, 0), (String::new(), 0));
    }
}
