//! HTTP loading of the story feed.

use tracing::info;

use ephemere_core::StoryRoster;

use crate::document::roster_from_slice;
use crate::error::{FeedError, Result};

/// Fetch the feed document from `url` and validate it into a roster.
/// One attempt only; the caller decides what to tell the user.
pub async fn fetch_roster(url: &str) -> Result<StoryRoster> {
    let response = reqwest::get(url).await?;

    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }

    let body = response.bytes().await?;
    let roster = roster_from_slice(&body)?;

    info!(url = %url, users = roster.len(), "Feed loaded");

    Ok(roster)
}
