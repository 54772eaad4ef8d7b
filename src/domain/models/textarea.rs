use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::Mode;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(Mode::Single, 0));

        return textarea;
    }

    pub fn block(mode: Mode, pending_requests: usize) -> Block<'a> {
        let mut title = match mode {
            Mode::Single => "Ask a question".to_string(),
            Mode::Conversational => "Ask a question (conversational)".to_string(),
        };
        if pending_requests > 0 {
            title = format!("{title} | waiting on the desk");
        }

        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title)
            .padding(Padding::new(1, 1, 0, 0));
    }
}
