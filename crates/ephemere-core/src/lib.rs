//! # ephemere-core
//!
//! Domain model and playback state machine for the Éphémère stories
//! viewer. The crate is pure and synchronous: it owns the ordered roster
//! of users and the viewer state, and exposes the transitions the shell
//! drives (open, close, navigate, tick). Timers, I/O and rendering live
//! in the surrounding crates.

pub mod constants;
pub mod player;
pub mod types;

mod error;

pub use error::{PlayerError, RosterError};
pub use player::{NavOutcome, PlaybackConfig, PlayerState, StoryPlayer, TickOutcome};
pub use types::{StoryRoster, TapSide, User, UserId};
