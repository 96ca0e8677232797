//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` rather than hardcoded `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Query input field
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const TEXT: Color = palette::TEXT;
}

/// Result list pane
pub mod results {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_LOADING: Color = palette::PINK;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const PLACEHOLDER: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
    pub const NO_RESULTS: Color = palette::WARNING;
    pub const ERROR: Color = palette::ERROR;

    pub const NAME: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const EMAIL: Color = palette::TEXT_MUTED;

    pub const LOADING: Color = palette::PINK;
    pub const MATCH_COUNT: Color = palette::TEXT_MUTED;
}

/// Bottom help line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
}
