use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Single-line query field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search users ")
                .border_style(Style::default().fg(theme::input::BORDER)),
        );
        textarea.set_style(Style::default().fg(theme::input::TEXT));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::palette::CURSOR);

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Insert pasted text, folding line breaks into spaces
    pub fn insert_single_line(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flattened);
    }
}
