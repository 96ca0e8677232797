//! usersift library - incremental search over a remote user directory
//!
//! This library exposes the core functionality of usersift for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod query;
pub mod search;
pub mod source;
pub mod theme;
pub mod user;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
