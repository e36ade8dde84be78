//! Conversation rendering logic.
//!
//! Turns chat bubbles into pre-wrapped lines so the view knows the exact
//! height of the content and can keep the newest line in sight:
//! - user bubbles are right-aligned, bot bubbles left-aligned
//! - each bubble starts with a sender + time header
//! - pending and failed bot bubbles get their own text style

use chrono::{Local, TimeZone};
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::message::{ChatMessage, MessageStatus, Sender};

use super::styles;

/// Bubbles take at most this share of the panel width, in percent.
const BUBBLE_WIDTH_PERCENT: usize = 80;

/// Builds every line of the conversation panel for the given inner width.
pub fn build_conversation_lines(messages: &[ChatMessage], width: usize) -> Vec<Line<'static>> {
    let bubble_width = bubble_width(width);
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        let alignment = alignment_for(message.sender);
        lines.push(header_line(message).alignment(alignment));

        let body = wrap_text(message.display_text(), bubble_width);
        let body_width = body.iter().map(|line| line.width()).max().unwrap_or(0);
        let style = body_style(message);

        for text_line in body {
            let text_line = match message.sender {
                // Pad so a multi-line user bubble keeps a straight left edge.
                Sender::User => pad_to_width(text_line, body_width),
                Sender::Bot => text_line,
            };
            lines.push(Line::from(Span::styled(text_line, style)).alignment(alignment));
        }
    }

    lines
}

/// Word-wraps `text` to `width` display columns.
///
/// Explicit newlines are kept and words wider than the limit are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

fn bubble_width(width: usize) -> usize {
    (width * BUBBLE_WIDTH_PERCENT / 100).max(1)
}

fn alignment_for(sender: Sender) -> Alignment {
    match sender {
        Sender::User => Alignment::Right,
        Sender::Bot => Alignment::Left,
    }
}

fn header_line(message: &ChatMessage) -> Line<'static> {
    let sender_style = match message.sender {
        Sender::User => styles::user_header_style(),
        Sender::Bot => styles::bot_header_style(),
    };

    let mut spans = vec![
        Span::styled(message.sender.label().to_owned(), sender_style),
        Span::styled(
            format!(" · {}", format_time(message.timestamp_ms)),
            styles::timestamp_style(),
        ),
    ];

    if message.is_pending() {
        spans.push(Span::styled(" · thinking", styles::pending_text_style()));
    }

    Line::from(spans)
}

fn body_style(message: &ChatMessage) -> Style {
    match message.status {
        MessageStatus::Delivered => styles::message_text_style(),
        MessageStatus::Pending => styles::pending_text_style(),
        MessageStatus::Failed => styles::failed_text_style(),
    }
}

fn pad_to_width(mut text: String, width: usize) -> String {
    let missing = width.saturating_sub(text.width());
    text.extend(std::iter::repeat(' ').take(missing));
    text
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::None => "??:??".to_owned(),
    }
}
