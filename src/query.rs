//! Query normalization and local filtering
//!
//! The remote source always returns the full collection; narrowing it down to
//! the typed query happens here.

use crate::user::User;

/// Normalize raw input text into a lookup query
///
/// Trims surrounding whitespace and lowercases. Returns `None` when nothing is
/// left, which callers treat as "show the placeholder, do not fetch".
pub fn normalize_query(input: &str) -> Option<String> {
    let query = input.trim().to_lowercase();
    if query.is_empty() { None } else { Some(query) }
}

/// Keep users whose lowercased name contains `query`
///
/// `query` is expected to be normalized already. Order of `users` is preserved.
pub fn filter_users(users: Vec<User>, query: &str) -> Vec<User> {
    users
        .into_iter()
        .filter(|user| user.name.to_lowercase().contains(query))
        .collect()
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
