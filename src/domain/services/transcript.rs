#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

// Left/right borders, inner padding, and room for the scrollbar.
const BUBBLE_PADDING: usize = 8;

#[derive(PartialEq, Eq)]
enum BubbleAlignment {
    Left,
    Right,
}

struct CacheEntry {
    text_len: usize,
    lines: Vec<Line<'static>>,
}

fn bubble_style(message: &Message) -> Style {
    if message.message_type() == MessageType::Error {
        return Style::default().fg(Color::Red);
    }
    if message.author == Author::User {
        return Style::default().fg(Color::Cyan);
    }

    return Style::default();
}

fn build_bubble(message: &Message, window_max_width: usize) -> Vec<Line<'static>> {
    let max_text_width = window_max_width.saturating_sub(BUBBLE_PADDING).max(1);
    let wrapped = message.as_string_lines(max_text_width);

    let author = message.author.to_string();
    let longest = wrapped.iter().map(|line| return line.len()).max().unwrap_or(0);
    // The title row needs "╭ author " to fit inside the border.
    let inner_width = longest.max(author.len() + 1);

    let alignment = if message.author == Author::User {
        BubbleAlignment::Right
    } else {
        BubbleAlignment::Left
    };
    let outer_width = inner_width + 4;
    let offset = if alignment == BubbleAlignment::Right {
        " ".repeat(window_max_width.saturating_sub(outer_width))
    } else {
        "".to_string()
    };

    let style = bubble_style(message);
    let mut lines: Vec<Line> = vec![];

    let title_fill = "─".repeat(inner_width - author.len());
    lines.push(Line::from(Span::styled(
        format!("{offset}╭ {author} {title_fill}╮"),
        style,
    )));

    for text in wrapped {
        let fill = " ".repeat(inner_width - text.len());
        lines.push(Line::from(Span::styled(
            format!("{offset}│ {text}{fill} │"),
            style,
        )));
    }

    let bottom_fill = "─".repeat(inner_width + 2);
    lines.push(Line::from(Span::styled(
        format!("{offset}╰{bottom_fill}╯"),
        style,
    )));

    return lines;
}

pub struct Transcript {
    cache: HashMap<usize, CacheEntry>,
    line_width: usize,
    lines_len: usize,
}

impl Default for Transcript {
    fn default() -> Transcript {
        return Transcript {
            cache: HashMap::new(),
            line_width: 0,
            lines_len: 0,
        };
    }
}

impl Transcript {
    /// Rebuilds bubbles for messages that are new or changed. A width change
    /// or a shrunk message list throws the whole cache away.
    pub fn set_messages(&mut self, messages: &[Message], line_width: u16) {
        let width = line_width as usize;
        if width != self.line_width || messages.len() < self.cache.len() {
            self.cache.clear();
            self.line_width = width;
        }

        let mut total = 0;
        for (idx, message) in messages.iter().enumerate() {
            let needs_build = match self.cache.get(&idx) {
                None => true,
                Some(entry) => entry.text_len != message.text.len(),
            };

            if needs_build {
                self.cache.insert(
                    idx,
                    CacheEntry {
                        text_len: message.text.len(),
                        lines: build_bubble(message, width),
                    },
                );
            }

            if let Some(entry) = self.cache.get(&idx) {
                total += entry.lines.len();
            }
        }

        self.lines_len = total;
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll_position: u16) {
        let mut lines: Vec<Line> = vec![];
        for idx in 0..self.cache.len() {
            if let Some(entry) = self.cache.get(&idx) {
                lines.extend(entry.lines.to_owned());
            }
        }

        frame.render_widget(Paragraph::new(lines).scroll((scroll_position, 0)), rect);
    }
}
