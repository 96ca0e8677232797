//! Result list rendering
//!
//! Draws the controller's `RenderState` into the results pane. Matches show
//! the name in bold followed by the email; every other state is a single row.

use std::io::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::search_state::{
    ERROR_MESSAGE, PLACEHOLDER_MESSAGE, RenderState, SearchState, display_fields,
    no_results_message,
};
use crate::error::UsersiftError;
use crate::theme;

/// Write the plain-text form of a render state, one row per line
pub fn write_plain(out: &mut impl Write, render: &RenderState) -> Result<(), UsersiftError> {
    for line in render.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Build the list rows for a render state
pub fn build_items(render: &RenderState) -> Vec<ListItem<'static>> {
    match render {
        RenderState::Placeholder => vec![ListItem::new(Line::from(Span::styled(
            PLACEHOLDER_MESSAGE,
            theme::results::PLACEHOLDER,
        )))],
        RenderState::NoResults { query } => vec![ListItem::new(Line::from(Span::styled(
            no_results_message(query),
            Style::default().fg(theme::results::NO_RESULTS),
        )))],
        RenderState::Matches(users) => users
            .iter()
            .map(|user| {
                let (name, email) = display_fields(user);
                ListItem::new(Line::from(vec![
                    Span::styled(name, theme::results::NAME),
                    Span::styled(
                        format!(" ({})", email),
                        Style::default().fg(theme::results::EMAIL),
                    ),
                ]))
            })
            .collect(),
        RenderState::Error => vec![ListItem::new(Line::from(Span::styled(
            ERROR_MESSAGE,
            Style::default().fg(theme::results::ERROR),
        )))],
    }
}

/// Render the results pane
pub fn render_pane(search: &SearchState, frame: &mut Frame, area: Rect) {
    let border_color = if search.loading {
        theme::results::BORDER_LOADING
    } else {
        theme::results::BORDER
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::results::BACKGROUND));

    if search.loading {
        block = block.title_top(
            Line::from(Span::styled(
                " searching... ",
                Style::default().fg(theme::results::LOADING),
            ))
            .alignment(Alignment::Right),
        );
    } else if let RenderState::Matches(users) = &search.render {
        let label = if users.len() == 1 { "match" } else { "matches" };
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {} {} ", users.len(), label),
                Style::default().fg(theme::results::MATCH_COUNT),
            ))
            .alignment(Alignment::Right),
        );
    }

    let list = List::new(build_items(&search.render)).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
