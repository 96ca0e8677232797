//! Search controller state
//!
//! Owns the single cancellation-token slot, the request id counter and the
//! render state. All mutation happens on the UI thread; the worker only ever
//! sees the messages sent through the request channel.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use crate::query::normalize_query;
use crate::user::{User, sanitize_display};

/// Shown while the query field is empty
pub const PLACEHOLDER_MESSAGE: &str = "Results will appear here...";
/// Shown for any lookup failure other than cancellation
pub const ERROR_MESSAGE: &str = "Error fetching data";

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Fetch the collection and filter it by `query`
    Lookup {
        /// Normalized query text
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// The lookup completed; `matches` is already filtered
    Results {
        request_id: u64,
        query: String,
        matches: Vec<User>,
    },
    /// Transport or decode failure
    Failed { request_id: u64, message: String },
    /// The lookup was superseded before it completed
    Cancelled { request_id: u64, query: String },
}

/// What the result list currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Placeholder,
    NoResults { query: String },
    Matches(Vec<User>),
    Error,
}

impl RenderState {
    /// Render state for a completed lookup
    pub fn from_matches(query: String, matches: Vec<User>) -> Self {
        if matches.is_empty() {
            RenderState::NoResults { query }
        } else {
            RenderState::Matches(matches)
        }
    }

    /// Plain-text form of the displayed items, one entry per list row
    pub fn lines(&self) -> Vec<String> {
        match self {
            RenderState::Placeholder => vec![PLACEHOLDER_MESSAGE.to_string()],
            RenderState::NoResults { query } => vec![no_results_message(query)],
            RenderState::Matches(users) => users
                .iter()
                .map(|user| {
                    let (name, email) = display_fields(user);
                    format!("**{}** ({})", name, email)
                })
                .collect(),
            RenderState::Error => vec![ERROR_MESSAGE.to_string()],
        }
    }
}

/// Text of the row shown when a lookup matched nobody
pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{}\"", sanitize_display(query))
}

/// Name and email of a match as they are displayed
pub fn display_fields(user: &User) -> (String, String) {
    (sanitize_display(&user.name), sanitize_display(&user.email))
}

/// Incremental search controller
pub struct SearchState {
    /// What the result list shows
    pub render: RenderState,
    /// Whether a lookup is in flight
    pub loading: bool,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<SearchResponse>>,
    /// Incremented for each issued lookup
    pub request_id: u64,
    /// ID of the lookup whose outcome may still reach the render state
    pub in_flight_request_id: Option<u64>,
    /// Token of the in-flight lookup, cancelled when superseded
    pub current_cancel_token: Option<CancellationToken>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            render: RenderState::Placeholder,
            loading: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            current_cancel_token: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// React to a change of the input field text
    ///
    /// An empty (or whitespace-only) query shows the placeholder and cancels
    /// whatever was in flight, so a late result cannot replace it. Any other
    /// query supersedes the in-flight lookup with a new one.
    ///
    /// Returns true if a lookup was sent to the worker.
    pub fn on_input(&mut self, text: &str) -> bool {
        match normalize_query(text) {
            None => {
                self.cancel_in_flight_request();
                self.render = RenderState::Placeholder;
                false
            }
            Some(query) => self.send_request(query),
        }
    }

    /// Send a lookup for an already normalized query
    ///
    /// This method:
    /// 1. Cancels any existing in-flight request first
    /// 2. Creates a new CancellationToken and request id
    /// 3. Stores the token in current_cancel_token
    /// 4. Sends the request with the token
    pub fn send_request(&mut self, query: String) -> bool {
        if self.request_tx.is_none() {
            log::error!("No search worker available for query {:?}", query);
            self.cancel_in_flight_request();
            self.render = RenderState::Error;
            return false;
        }

        self.cancel_in_flight_request();

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());
        self.in_flight_request_id = Some(request_id);
        self.loading = true;

        if let Some(ref tx) = self.request_tx
            && tx
                .send(SearchRequest::Lookup {
                    query,
                    request_id,
                    cancel_token,
                })
                .is_ok()
        {
            return true;
        }

        log::error!("Search worker disconnected, request {} dropped", request_id);
        self.current_cancel_token = None;
        self.in_flight_request_id = None;
        self.loading = false;
        self.render = RenderState::Error;
        false
    }

    /// Cancel any in-flight request
    ///
    /// Calls cancel() on the CancellationToken so the transport aborts, then
    /// forgets the request id so its outcome is treated as stale.
    /// Returns true if there was an in-flight request to cancel.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        self.loading = false;
        if let Some(token) = self.current_cancel_token.take() {
            log::debug!(
                "Cancelling in-flight request {:?}",
                self.in_flight_request_id
            );
            token.cancel();
            self.in_flight_request_id = None;
            return true;
        }
        self.in_flight_request_id = None;
        false
    }

    /// Check whether `request_id` is the lookup currently awaited
    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight_request_id == Some(request_id)
    }

    /// Apply the outcome of the current lookup
    pub fn complete_request(&mut self, render: RenderState) {
        self.render = render;
        self.loading = false;
        self.in_flight_request_id = None;
        self.current_cancel_token = None;
    }

    /// Set the error state after a failed lookup or lost worker
    pub fn set_error(&mut self) {
        self.complete_request(RenderState::Error);
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
