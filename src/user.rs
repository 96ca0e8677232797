//! User records
//!
//! The remote directory returns a JSON array of user objects. Only `name` and
//! `email` matter here; every other field is ignored.

use serde::Deserialize;

/// A single entry of the remote user collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Decode a response body into user records
///
/// The body must be a JSON array whose entries all carry string `name` and
/// `email` fields. Anything else is rejected as a whole.
pub fn parse_users(body: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Strip control characters before text reaches the terminal
///
/// Query text and remote fields are untrusted; an embedded escape sequence
/// would otherwise be interpreted by the terminal.
pub fn sanitize_display(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod user_tests;
