use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, OutputMode};

/// Timeout for event polling - keeps worker responses flowing while idle
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Paste is a single edit: one lookup for the whole inserted text
    pub fn handle_paste_event(&mut self, text: String) {
        let before = self.query().to_string();
        self.input.insert_single_line(&text);
        if self.query() != before {
            self.on_query_changed();
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter => {
                self.output_mode = Some(OutputMode::Results);
                self.should_quit = true;
                return;
            }
            // Line breaks would turn the field into a multi-line editor
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => return,
            _ => {}
        }

        let before = self.query().to_string();
        self.input.textarea.input(key);

        // Cursor movement is not an edit
        if self.query() != before {
            self.on_query_changed();
        } else {
            self.mark_dirty();
        }
    }
}
