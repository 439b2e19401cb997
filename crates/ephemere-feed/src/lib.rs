//! # ephemere-feed
//!
//! The external loader for the Éphémère stories viewer: fetches the JSON
//! feed document over HTTP, decodes it and validates the roster
//! invariants before handing a [`ephemere_core::StoryRoster`] to the
//! shell. No retry policy and no caching; a load failure is reported
//! upward exactly once.

pub mod document;
pub mod fetch;

mod error;

pub use document::{roster_from_slice, FeedDocument, UserEntry};
pub use error::{FeedError, Result};
pub use fetch::fetch_roster;
