//! Tests for result list rendering

use super::*;
use crate::user::User;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;

fn render_to_string(search: &SearchState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| render_pane(search, f, f.area()))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_placeholder_rendered() {
    let search = SearchState::new();
    let output = render_to_string(&search, 50, 5);
    assert!(output.contains("Results will appear here..."));
    assert!(output.contains("Results"));
}

#[test]
fn test_matches_rendered_in_order() {
    let mut search = SearchState::new();
    search.render = RenderState::Matches(vec![
        User::new("Leanne Graham", "a@b.com"),
        User::new("Ervin Howell", "c@d.com"),
    ]);

    let output = render_to_string(&search, 50, 6);

    let leanne = output.find("Leanne Graham (a@b.com)").unwrap();
    let ervin = output.find("Ervin Howell (c@d.com)").unwrap();
    assert!(leanne < ervin);
    assert!(output.contains("2 matches"));
}

#[test]
fn test_single_match_label() {
    let mut search = SearchState::new();
    search.render = RenderState::Matches(vec![User::new("Ervin Howell", "c@d.com")]);

    let output = render_to_string(&search, 50, 5);
    assert!(output.contains("1 match "));
}

#[test]
fn test_no_results_rendered() {
    let mut search = SearchState::new();
    search.render = RenderState::NoResults {
        query: "zzz".to_string(),
    };

    let output = render_to_string(&search, 50, 5);
    assert!(output.contains("No results found for \"zzz\""));
}

#[test]
fn test_error_rendered() {
    let mut search = SearchState::new();
    search.render = RenderState::Error;

    let output = render_to_string(&search, 50, 5);
    assert!(output.contains("Error fetching data"));
    assert!(!output.contains("Results will appear here"));
}

#[test]
fn test_loading_indicator_keeps_previous_render() {
    let mut search = SearchState::new();
    search.render = RenderState::Matches(vec![User::new("Ervin Howell", "c@d.com")]);
    search.loading = true;

    let output = render_to_string(&search, 50, 5);
    assert!(output.contains("searching..."));
    assert!(output.contains("Ervin Howell (c@d.com)"));
    assert!(!output.contains("1 match"));
}

#[test]
fn test_match_name_is_bold() {
    let items = build_items(&RenderState::Matches(vec![User::new("Ervin Howell", "c@d.com")]));
    assert_eq!(items.len(), 1);

    let mut search = SearchState::new();
    search.render = RenderState::Matches(vec![User::new("Ervin Howell", "c@d.com")]);
    let backend = TestBackend::new(40, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| render_pane(&search, f, f.area()))
        .unwrap();

    // First cell inside the border holds the "E" of the name
    let cell = &terminal.backend().buffer()[(1, 1)];
    assert_eq!(cell.symbol(), "E");
    assert!(cell.modifier.contains(Modifier::BOLD));
}

#[test]
fn test_each_state_renders_one_row_except_matches() {
    for render in [
        RenderState::Placeholder,
        RenderState::NoResults {
            query: "q".to_string(),
        },
        RenderState::Error,
    ] {
        assert_eq!(build_items(&render).len(), 1);
    }
}

#[test]
fn test_write_plain_matches() {
    let render = RenderState::Matches(vec![
        User::new("Leanne Graham", "a@b.com"),
        User::new("Ervin Howell", "c@d.com"),
    ]);
    let mut out = Vec::new();

    write_plain(&mut out, &render).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "**Leanne Graham** (a@b.com)\n**Ervin Howell** (c@d.com)\n"
    );
}

#[test]
fn test_write_plain_placeholder() {
    let mut out = Vec::new();
    write_plain(&mut out, &RenderState::Placeholder).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @"Results will appear here...");
}

#[test]
fn test_pane_rows_match_plain_lines() {
    let mut search = SearchState::new();
    for render in [
        RenderState::NoResults {
            query: "er\u{1b}[2Jvin".to_string(),
        },
        RenderState::Matches(vec![
            User::new("Ervin\u{7} Howell", "c@d.com"),
            User::new("Leanne Graham", "a@b\u{1b}.com"),
        ]),
    ] {
        search.render = render;
        let output = render_to_string(&search, 60, 6);

        for line in search.render.lines() {
            assert!(
                output.contains(&line.replace("**", "")),
                "pane is missing {:?}",
                line
            );
        }
    }
}
