//! Feed document model, mirroring the published JSON shape.

use serde::{Deserialize, Serialize};

use ephemere_core::{StoryRoster, User, UserId};

use crate::error::Result;

/// Top-level feed document: `{ "users": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDocument {
    pub users: Vec<UserEntry>,
}

/// One user entry as the feed publishes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub story: String,
}

impl FeedDocument {
    /// Validate into the core roster, preserving feed order.
    pub fn into_roster(self) -> Result<StoryRoster> {
        let users = self
            .users
            .into_iter()
            .map(|entry| User {
                id: UserId(entry.id),
                name: entry.name,
                avatar: entry.avatar,
                story: entry.story,
            })
            .collect();
        Ok(StoryRoster::new(users)?)
    }
}

/// Decode and validate a feed document from raw bytes.
pub fn roster_from_slice(bytes: &[u8]) -> Result<StoryRoster> {
    let document: FeedDocument = serde_json::from_slice(bytes)?;
    document.into_roster()
}
