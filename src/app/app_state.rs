use crate::search::{self, SearchState};

use super::input_state::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the rendered result lines after exit
    Results,
}

pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Config problem shown in the help line
    pub warning: Option<String>,
    needs_render: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            search: SearchState::new(),
            output_mode: None,
            should_quit: false,
            warning: None,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Hand the current field text to the search controller
    pub fn on_query_changed(&mut self) {
        let text = self.input.query().to_string();
        self.search.on_input(&text);
        self.mark_dirty();
    }

    /// Apply worker responses; called once per loop iteration before drawing
    pub fn poll_search(&mut self) {
        if search::search_events::poll_response_channel(&mut self.search) {
            self.mark_dirty();
        }
    }
}
