//! Search worker thread
//!
//! Runs lookups off the UI thread. Receives requests via channel, fetches the
//! user collection through a `UserSource`, filters it, and sends exactly one
//! response per request back to the main thread.
//!
//! Uses a current-thread tokio runtime; cancellation of a superseded lookup is
//! driven by the `CancellationToken` carried in each request.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use tokio_util::sync::CancellationToken;

use super::search_state::{RenderState, SearchRequest, SearchResponse};
use crate::query::{filter_users, normalize_query};
use crate::source::{FetchError, UserSource};
use crate::user::User;

/// Fetch the collection and keep the users matching `query`
///
/// `query` must already be normalized.
pub async fn lookup<S: UserSource>(
    source: &S,
    query: &str,
    cancel_token: &CancellationToken,
) -> Result<Vec<User>, FetchError> {
    let users = source.fetch_users(cancel_token).await?;
    if cancel_token.is_cancelled() {
        return Err(FetchError::Cancelled);
    }
    Ok(filter_users(users, query))
}

/// Run a single lookup to completion on a private runtime
///
/// Used for non-interactive mode. Nothing can supersede this lookup, so the
/// outcome is always rendered.
pub fn run_once<S: UserSource>(source: &S, text: &str) -> RenderState {
    let Some(query) = normalize_query(text) else {
        return RenderState::Placeholder;
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to create tokio runtime: {}", e);
            return RenderState::Error;
        }
    };

    match rt.block_on(lookup(source, &query, &CancellationToken::new())) {
        Ok(matches) => RenderState::from_matches(query, matches),
        Err(e) => {
            log::error!("Lookup for {:?} failed: {}", query, e);
            RenderState::Error
        }
    }
}

/// Name of the worker thread, used to route its panics to the log
pub const WORKER_THREAD_NAME: &str = "usersift-search";

/// Spawn the search worker thread
///
/// The thread exits once the request channel is closed. A panic inside the
/// worker is logged instead of printed, and the dropped response channel is
/// reported to the UI as a disconnect. Panics on any other thread still go to
/// the previously installed hook, which restores the terminal.
pub fn spawn_worker<S: UserSource>(
    source: S,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    install_worker_panic_hook();

    let spawned = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(source, request_rx, response_tx));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Search worker thread panicked: {}", panic_msg);
            }
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn search worker: {}", e);
    }
}

/// Chain a hook that keeps worker panics off stderr
///
/// The default hook prints to stderr which corrupts the TUI.
fn install_worker_panic_hook() {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if thread::current().name() == Some(WORKER_THREAD_NAME) {
            log::error!("Search worker panic at {:?}", panic_info.location());
        } else {
            prev_hook(panic_info);
        }
    }));
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Using blocking `recv()` is fine here since we're in a dedicated thread.
async fn worker_loop<S: UserSource>(
    source: S,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SearchRequest::Lookup {
                query,
                request_id,
                cancel_token,
            } => {
                let response = handle_lookup_async(&source, query, request_id, cancel_token).await;
                if response_tx.send(response).is_err() {
                    // Main thread gone
                    break;
                }
            }
        }
    }
    log::debug!("Search worker shutting down");
}

/// Run one lookup and turn its outcome into a response
async fn handle_lookup_async<S: UserSource>(
    source: &S,
    query: String,
    request_id: u64,
    cancel_token: CancellationToken,
) -> SearchResponse {
    // Superseded while queued
    if cancel_token.is_cancelled() {
        return SearchResponse::Cancelled { request_id, query };
    }

    match lookup(source, &query, &cancel_token).await {
        Ok(matches) => SearchResponse::Results {
            request_id,
            query,
            matches,
        },
        Err(FetchError::Cancelled) => SearchResponse::Cancelled { request_id, query },
        Err(e) => SearchResponse::Failed {
            request_id,
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
