use thiserror::Error;

use ephemere_core::RosterError;

/// Errors produced while loading the story feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network-level failure reaching the feed.
    #[error("Feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("Feed returned HTTP {0}")]
    Status(u16),

    /// The body is not the expected `{ "users": [...] }` document.
    #[error("Invalid feed document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The document decoded but violates a roster invariant.
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FeedError>;
