use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::search::search_render;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        frame.render_widget(&self.input.textarea, layout[0]);
        search_render::render_pane(&self.search, frame, layout[1]);
        self.render_help_line(frame, layout[2]);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.warning {
            Some(warning) => Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(theme::help_line::WARNING),
            )),
            None => {
                let key = Style::default().fg(theme::help_line::KEY);
                let description = Style::default().fg(theme::help_line::DESCRIPTION);
                Line::from(vec![
                    Span::styled(" Enter", key),
                    Span::styled(" print results  ", description),
                    Span::styled("Esc", key),
                    Span::styled(" quit", description),
                ])
            }
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
