//! Search response handling
//!
//! Drains the worker's response channel once per frame and applies only the
//! outcome of the lookup the controller is still waiting for.

use std::sync::mpsc::TryRecvError;

use super::search_state::{RenderState, SearchResponse, SearchState};

/// Poll the response channel for incoming search responses
///
/// Uses try_recv() for non-blocking polling.
/// Returns true if any state changed (responses received or the worker just
/// disconnected).
pub fn poll_response_channel(search: &mut SearchState) -> bool {
    let mut responses = Vec::new();
    let mut disconnected = false;

    match search.response_rx {
        Some(ref rx) => loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        },
        None => return false,
    }

    let had_responses = !responses.is_empty();

    for response in responses {
        process_response(search, response);
    }

    if disconnected {
        // Reported once; later polls have nothing to drain
        search.response_rx = None;
        if search.loading {
            log::error!("Search worker disconnected unexpectedly");
            search.set_error();
        }
    }

    had_responses || disconnected
}

/// Process a single search response message
///
/// Any response whose request_id is not the in-flight one belongs to a
/// superseded lookup and is dropped.
pub fn process_response(search: &mut SearchState, response: SearchResponse) {
    match response {
        SearchResponse::Results {
            request_id,
            query,
            matches,
        } => {
            if !search.is_current(request_id) {
                log::debug!(
                    "Ignoring stale results from request {} (in flight: {:?})",
                    request_id,
                    search.in_flight_request_id
                );
                return;
            }
            log::debug!("Request {} matched {} users", request_id, matches.len());
            search.complete_request(RenderState::from_matches(query, matches));
        }
        SearchResponse::Failed {
            request_id,
            message,
        } => {
            if !search.is_current(request_id) {
                log::debug!(
                    "Ignoring stale failure from request {}: {}",
                    request_id,
                    message
                );
                return;
            }
            log::error!("Request {} failed: {}", request_id, message);
            search.set_error();
        }
        SearchResponse::Cancelled { request_id, query } => {
            log::debug!("Request aborted for: {}", query);
            // Normally already forgotten by cancel_in_flight_request
            if search.is_current(request_id) {
                search.loading = false;
                search.in_flight_request_id = None;
                search.current_cancel_token = None;
            }
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
