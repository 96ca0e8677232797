//! Remote user source
//!
//! Defines the `UserSource` seam the search worker fetches through, the
//! `FetchError` taxonomy, and the reqwest-backed HTTP implementation.
//! Every fetch takes a `CancellationToken` so a superseded lookup can be
//! aborted mid-flight.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::user::User;

mod http;

pub use http::{DEFAULT_ENDPOINT, HttpUserSource};

/// Errors that can occur while fetching the user collection
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Connection or body transfer failed
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Body was not a JSON array of user records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Lookup was superseded before it completed
    #[error("Request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Something that can produce the full user collection
///
/// Implementations must observe `cancel_token` and return
/// `FetchError::Cancelled` once it fires.
pub trait UserSource: Send + 'static {
    fn fetch_users(
        &self,
        cancel_token: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}
