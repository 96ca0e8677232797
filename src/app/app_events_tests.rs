//! Tests for app key and paste handling

use super::*;
use crate::search::{RenderState, SearchRequest, SearchResponse};
use crate::user::User;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn app_with_channels() -> (App, mpsc::Receiver<SearchRequest>, mpsc::Sender<SearchResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut app = App::new();
    app.search.set_channels(request_tx, response_rx);
    (app, request_rx, response_tx)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn sent_queries(rx: &mpsc::Receiver<SearchRequest>) -> Vec<String> {
    rx.try_iter()
        .map(|SearchRequest::Lookup { query, .. }| query)
        .collect()
}

#[test]
fn test_each_keystroke_issues_a_lookup() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    type_text(&mut app, "Erv");

    assert_eq!(app.query(), "Erv");
    assert_eq!(sent_queries(&request_rx), vec!["e", "er", "erv"]);
}

#[test]
fn test_cursor_movement_does_not_issue_lookup() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    type_text(&mut app, "ab");
    sent_queries(&request_rx);

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Home));

    assert!(sent_queries(&request_rx).is_empty());
}

#[test]
fn test_backspace_to_empty_shows_placeholder() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    type_text(&mut app, "a");
    sent_queries(&request_rx);

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.query(), "");
    assert!(sent_queries(&request_rx).is_empty());
    assert_eq!(app.search.render, RenderState::Placeholder);
    assert!(!app.search.loading);
}

#[test]
fn test_typing_space_after_word_reissues_same_query() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    type_text(&mut app, "a ");

    assert_eq!(sent_queries(&request_rx), vec!["a", "a"]);
}

#[test]
fn test_paste_issues_single_lookup() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    app.handle_paste_event("Ervin\nHowell".to_string());

    assert_eq!(app.query(), "Ervin Howell");
    assert_eq!(sent_queries(&request_rx), vec!["ervin howell"]);
}

#[test]
fn test_empty_paste_is_ignored() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    app.handle_paste_event(String::new());

    assert!(sent_queries(&request_rx).is_empty());
}

#[test]
fn test_enter_quits_with_results_output() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();

    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), Some(OutputMode::Results));
    assert_eq!(app.query(), "");
}

#[test]
fn test_esc_quits_without_output() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();

    app.handle_key_event(key(KeyCode::Esc));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_ctrl_c_quits_without_output() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();

    app.handle_key_event(ctrl('c'));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_ctrl_m_does_not_insert_line_break() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();
    type_text(&mut app, "ab");

    app.handle_key_event(ctrl('m'));

    assert_eq!(app.input.textarea.lines().len(), 1);
    assert!(!app.should_quit());
}

#[test]
fn test_poll_search_applies_results_and_marks_dirty() {
    let (mut app, request_rx, response_tx) = app_with_channels();
    type_text(&mut app, "ervin");
    let request_id = app.search.request_id;
    sent_queries(&request_rx);
    app.clear_dirty();

    response_tx
        .send(SearchResponse::Results {
            request_id,
            query: "ervin".to_string(),
            matches: vec![User::new("Ervin Howell", "c@d.com")],
        })
        .unwrap();
    app.poll_search();

    assert!(app.should_render());
    assert_eq!(
        app.search.render.lines(),
        vec!["**Ervin Howell** (c@d.com)".to_string()]
    );
}

#[test]
fn test_poll_search_without_responses_stays_clean() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();
    app.clear_dirty();

    app.poll_search();

    assert!(!app.should_render());
}

#[test]
fn test_poll_search_after_worker_exit_stops_redrawing() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    drop(response_tx);
    app.clear_dirty();

    app.poll_search();
    assert!(app.should_render());

    app.clear_dirty();
    app.poll_search();
    assert!(!app.should_render());
}
