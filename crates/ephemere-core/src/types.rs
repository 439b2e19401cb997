use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

// User identity = the feed's integer id
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single feed user and their one story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,

    /// Display name shown under the avatar and in the story header.
    pub name: String,

    /// Avatar image URI, rendered in the rail and the story header.
    pub avatar: String,

    /// Story image URI, rendered full screen.
    pub story: String,
}

/// Ordered sequence of users. Position in the roster is the navigation
/// sequence; order is insertion order from the feed. Ids are unique,
/// enforced at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryRoster(Vec<User>);

impl StoryRoster {
    /// Build a roster from feed order, rejecting duplicate ids.
    pub fn new(users: Vec<User>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id) {
                return Err(RosterError::DuplicateId(user.id));
            }
        }
        Ok(Self(users))
    }

    /// The roster of a player that has nothing to show.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.0.get(index)
    }

    /// Position of `id` in the navigation sequence.
    pub fn index_of(&self, id: UserId) -> Option<usize> {
        self.0.iter().position(|user| user.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.0
    }
}

/// Which half of the full-bleed tap surface was hit. The surface is split
/// at its horizontal midpoint: strictly left of centre navigates back,
/// the centre and everything right of it navigates forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TapSide {
    Left,
    Right,
}

impl TapSide {
    pub fn from_position(x: f64, width: f64) -> Self {
        if x < width / 2.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}
