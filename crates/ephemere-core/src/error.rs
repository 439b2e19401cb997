use thiserror::Error;

use crate::types::UserId;

/// Errors produced by the story player.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// `open` was called with an id that is not in the roster.
    /// The player state is left untouched.
    #[error("No user with id {0} in the roster")]
    UnknownUser(UserId),

    /// `open` was called before a roster was installed (or the feed
    /// failed to load and the roster stayed empty).
    #[error("Cannot open a story: the roster is empty")]
    EmptyRoster,
}

/// Errors produced while validating a feed roster.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// Two feed entries share the same id.
    #[error("Duplicate user id {0} in the feed")]
    DuplicateId(UserId),
}
