//! Terminal application
//!
//! Holds the query input field and the search controller, routes key and paste
//! events to them, and lays out the input, result pane and help line.

mod app_events;
mod app_render;
mod app_state;
mod input_state;

#[cfg(test)]
mod app_events_tests;


// Re-export public types
pub use app_state::{App, OutputMode};
pub use input_state::InputState;
