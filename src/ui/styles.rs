//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Conversation styles
// =============================================================================

/// Sender line of the user's bubbles.
pub fn user_header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Sender line of the bot's bubbles.
pub fn bot_header_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Placeholder text while the reply is on its way.
pub fn pending_text_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn failed_text_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn empty_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Gray)
}

// =============================================================================
// Input and status styles
// =============================================================================

pub fn input_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_prompt_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_headers_are_bold_and_distinct() {
        let user = user_header_style();
        let bot = bot_header_style();

        assert!(user.add_modifier.contains(Modifier::BOLD));
        assert!(bot.add_modifier.contains(Modifier::BOLD));
        assert_ne!(user.fg, bot.fg);
    }

    #[test]
    fn pending_text_is_dim_italic() {
        let style = pending_text_style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn failed_text_is_red() {
        assert_eq!(failed_text_style().fg, Some(Color::Red));
    }
}
