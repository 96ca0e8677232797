//! Incremental search controller
//!
//! Every edit of the query field supersedes the outstanding lookup: its
//! cancellation token is signaled, a new lookup is sent to the worker thread,
//! and only the newest lookup's outcome may reach the result list.

pub mod search_events;
pub mod search_render;
mod search_state;
pub mod worker;

pub use search_state::{
    ERROR_MESSAGE, PLACEHOLDER_MESSAGE, RenderState, SearchRequest, SearchResponse, SearchState,
};
