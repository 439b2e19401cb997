//! The story playback state machine.
//!
//! [`StoryPlayer`] owns the roster and the current [`PlayerState`] and is
//! driven entirely from the outside: taps arrive as `advance`/`retreat`/
//! `tap`, the playback timer arrives as `tick`. The player never sleeps,
//! spawns or renders; it only transitions, and every operation reports its
//! outcome so the driver knows when to start or stop the timer.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TICK_INTERVAL_MS, DEFAULT_TICK_STEP_PERCENT, PROGRESS_COMPLETE};
use crate::error::PlayerError;
use crate::types::{StoryRoster, TapSide, User, UserId};

/// Playback timing. A rate, not a law: the driver reads it when starting
/// a timer and feeds the step back in through [`StoryPlayer::tick`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackConfig {
    /// Milliseconds between two timer ticks.
    pub tick_interval_ms: u64,

    /// Percentage points added to `progress` per tick.
    pub step_percent: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step_percent: DEFAULT_TICK_STEP_PERCENT,
        }
    }
}

impl PlaybackConfig {
    /// Full playback duration of one story at this rate, in milliseconds.
    pub fn story_duration_ms(&self) -> u64 {
        let steps = u64::from(PROGRESS_COMPLETE).div_ceil(u64::from(self.step_percent.max(1)));
        steps * self.tick_interval_ms
    }
}

/// Where the viewer currently is. Serialized for the IPC boundary so the
/// renderer consumes it as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlayerState {
    /// No story is displayed; the avatar rail is visible.
    Closed,

    /// A story is displayed full screen.
    #[serde(rename_all = "camelCase")]
    Open {
        /// Position of the displayed story in the roster. In bounds by
        /// construction: only `open`/`advance`/`retreat` produce it.
        current_index: usize,
        /// Playback progress in percent, 0..=100. Resets to 0 on every
        /// index change and on every `Closed -> Open` transition.
        progress: u8,
    },
}

/// Result of one manual navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Moved to another story; the timer must be restarted.
    Moved(usize),

    /// Walked off a roster boundary; the viewer is now closed and the
    /// timer must be cancelled.
    Closed,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The player is closed; nothing to progress. A driver receiving this
    /// has outlived its session and must stop.
    Idle,

    /// Progress grew without reaching the completion threshold.
    Progressed(u8),

    /// The threshold was crossed and playback moved to the next story.
    Advanced(usize),

    /// The threshold was crossed on the last story; the viewer closed.
    Finished,
}

/// The story playback state machine.
pub struct StoryPlayer {
    roster: StoryRoster,
    state: PlayerState,
}

impl StoryPlayer {
    /// A player over `roster`, starting closed.
    pub fn new(roster: StoryRoster) -> Self {
        Self {
            roster,
            state: PlayerState::Closed,
        }
    }

    /// Replace the roster. Forces `Closed`: indices into the old roster
    /// mean nothing in the new one.
    pub fn install_roster(&mut self, roster: StoryRoster) {
        self.roster = roster;
        self.state = PlayerState::Closed;
    }

    pub fn roster(&self) -> &StoryRoster {
        &self.roster
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PlayerState::Open { .. })
    }

    /// Open the story of `id` with progress 0. Re-opening the currently
    /// displayed id resets its progress. An unknown id (or an empty
    /// roster) reports an error and leaves the state untouched.
    pub fn open(&mut self, id: UserId) -> Result<usize, PlayerError> {
        if self.roster.is_empty() {
            return Err(PlayerError::EmptyRoster);
        }
        let index = self
            .roster
            .index_of(id)
            .ok_or(PlayerError::UnknownUser(id))?;
        self.state = PlayerState::Open {
            current_index: index,
            progress: 0,
        };
        Ok(index)
    }

    /// Close the viewer. Total: valid from any state, including `Closed`.
    pub fn close(&mut self) {
        self.state = PlayerState::Closed;
    }

    /// Move forward one story. On the last story this closes the viewer
    /// instead of wrapping; this is the sole exit of forward play.
    pub fn advance(&mut self) -> NavOutcome {
        match self.state {
            PlayerState::Open { current_index, .. }
                if current_index + 1 < self.roster.len() =>
            {
                let next = current_index + 1;
                self.state = PlayerState::Open {
                    current_index: next,
                    progress: 0,
                };
                NavOutcome::Moved(next)
            }
            _ => {
                self.state = PlayerState::Closed;
                NavOutcome::Closed
            }
        }
    }

    /// Move back one story. On the first story this closes the viewer
    /// rather than wrapping to the last one.
    pub fn retreat(&mut self) -> NavOutcome {
        match self.state {
            PlayerState::Open { current_index, .. } if current_index > 0 => {
                let prev = current_index - 1;
                self.state = PlayerState::Open {
                    current_index: prev,
                    progress: 0,
                };
                NavOutcome::Moved(prev)
            }
            _ => {
                self.state = PlayerState::Closed;
                NavOutcome::Closed
            }
        }
    }

    /// Dispatch a tap on the full-bleed story surface by the midpoint
    /// rule: left half retreats, the rest advances.
    pub fn tap(&mut self, x: f64, width: f64) -> NavOutcome {
        match TapSide::from_position(x, width) {
            TapSide::Left => self.retreat(),
            TapSide::Right => self.advance(),
        }
    }

    /// One playback timer tick: grow progress by `step_percent`. Crossing
    /// the completion threshold advances exactly once, which may close the
    /// viewer when the last story completes.
    pub fn tick(&mut self, step_percent: u8) -> TickOutcome {
        let PlayerState::Open {
            current_index,
            progress,
        } = self.state
        else {
            return TickOutcome::Idle;
        };

        let next = progress.saturating_add(step_percent);
        if next >= PROGRESS_COMPLETE {
            return match self.advance() {
                NavOutcome::Moved(index) => TickOutcome::Advanced(index),
                NavOutcome::Closed => TickOutcome::Finished,
            };
        }

        self.state = PlayerState::Open {
            current_index,
            progress: next,
        };
        TickOutcome::Progressed(next)
    }

    /// The displayed user, if any.
    pub fn current_story(&self) -> Option<&User> {
        match self.state {
            PlayerState::Open { current_index, .. } => self.roster.get(current_index),
            PlayerState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            avatar: format!("https://cdn.example/avatars/{id}.png"),
            story: format!("https://cdn.example/stories/{id}.jpg"),
        }
    }

    fn player_of(ids: &[(u64, &str)]) -> StoryPlayer {
        let users = ids.iter().map(|(id, name)| user(*id, name)).collect();
        StoryPlayer::new(StoryRoster::new(users).unwrap())
    }

    fn two_story_player() -> StoryPlayer {
        player_of(&[(1, "Ana"), (2, "Bruno")])
    }

    #[test]
    fn open_shows_the_requested_user_with_zero_progress() {
        let mut player = two_story_player();
        assert_eq!(player.open(UserId(2)), Ok(1));
        assert_eq!(player.current_story().map(|u| u.id), Some(UserId(2)));
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 1,
                progress: 0
            }
        );
    }

    #[test]
    fn reopening_the_same_user_resets_progress() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();
        for _ in 0..10 {
            player.tick(2);
        }
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 0,
                progress: 20
            }
        );

        player.open(UserId(1)).unwrap();
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 0,
                progress: 0
            }
        );
    }

    #[test]
    fn open_with_unknown_id_reports_and_leaves_state_untouched() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();
        player.tick(2);
        let before = player.state();

        assert_eq!(
            player.open(UserId(42)),
            Err(PlayerError::UnknownUser(UserId(42)))
        );
        assert_eq!(player.state(), before);
    }

    #[test]
    fn open_on_empty_roster_is_rejected() {
        let mut player = StoryPlayer::new(StoryRoster::empty());
        assert_eq!(player.open(UserId(1)), Err(PlayerError::EmptyRoster));
        assert_eq!(player.state(), PlayerState::Closed);
    }

    #[test]
    fn tick_accumulates_until_the_threshold() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();

        for expected in (2..100).step_by(2) {
            assert_eq!(player.tick(2), TickOutcome::Progressed(expected as u8));
        }
    }

    #[test]
    fn fifty_ticks_advance_exactly_once() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();

        let mut advances = 0;
        for n in 1..=50 {
            match player.tick(2) {
                TickOutcome::Advanced(index) => {
                    advances += 1;
                    assert_eq!(n, 50, "advance must fire on the 50th tick");
                    assert_eq!(index, 1);
                }
                TickOutcome::Progressed(_) => {}
                other => panic!("unexpected outcome {other:?} at tick {n}"),
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 1,
                progress: 0
            }
        );
    }

    #[test]
    fn completing_the_last_story_closes_the_viewer() {
        let mut player = two_story_player();
        player.open(UserId(2)).unwrap();

        let mut last = TickOutcome::Idle;
        for _ in 0..50 {
            last = player.tick(2);
        }
        assert_eq!(last, TickOutcome::Finished);
        assert_eq!(player.state(), PlayerState::Closed);
        assert!(player.current_story().is_none());
    }

    #[test]
    fn tick_while_closed_is_idle() {
        let mut player = two_story_player();
        assert_eq!(player.tick(2), TickOutcome::Idle);
        assert_eq!(player.state(), PlayerState::Closed);
    }

    #[test]
    fn oversized_step_still_advances_exactly_once() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();
        assert_eq!(player.tick(100), TickOutcome::Advanced(1));
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 1,
                progress: 0
            }
        );
    }

    #[test]
    fn forward_walk_exits_at_the_end() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();

        assert_eq!(player.advance(), NavOutcome::Moved(1));
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 1,
                progress: 0
            }
        );
        assert_eq!(player.advance(), NavOutcome::Closed);
        assert_eq!(player.state(), PlayerState::Closed);
    }

    #[test]
    fn backward_walk_exits_at_the_start_without_wrapping() {
        let mut player = two_story_player();
        player.open(UserId(2)).unwrap();

        assert_eq!(player.retreat(), NavOutcome::Moved(0));
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 0,
                progress: 0
            }
        );
        assert_eq!(player.retreat(), NavOutcome::Closed);
        assert_eq!(player.state(), PlayerState::Closed);
    }

    #[test]
    fn navigation_resets_progress() {
        let mut player = player_of(&[(1, "Ana"), (2, "Bruno"), (3, "Chloé")]);
        player.open(UserId(2)).unwrap();
        for _ in 0..5 {
            player.tick(2);
        }

        player.advance();
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 2,
                progress: 0
            }
        );

        player.retreat();
        for _ in 0..5 {
            player.tick(2);
        }
        player.retreat();
        assert_eq!(
            player.state(),
            PlayerState::Open {
                current_index: 0,
                progress: 0
            }
        );
    }

    #[test]
    fn close_is_total() {
        let mut player = two_story_player();
        player.close();
        assert_eq!(player.state(), PlayerState::Closed);

        player.open(UserId(1)).unwrap();
        player.close();
        assert_eq!(player.state(), PlayerState::Closed);
    }

    #[test]
    fn tap_left_retreats_tap_right_advances() {
        let mut player = player_of(&[(1, "Ana"), (2, "Bruno"), (3, "Chloé")]);
        player.open(UserId(2)).unwrap();

        assert_eq!(player.tap(100.0, 400.0), NavOutcome::Moved(0));
        assert_eq!(player.tap(300.0, 400.0), NavOutcome::Moved(1));
        // Exactly on the midpoint counts as forward.
        assert_eq!(player.tap(200.0, 400.0), NavOutcome::Moved(2));
    }

    #[test]
    fn installing_a_roster_closes_the_viewer() {
        let mut player = two_story_player();
        player.open(UserId(2)).unwrap();

        player.install_roster(StoryRoster::new(vec![user(7, "Diego")]).unwrap());
        assert_eq!(player.state(), PlayerState::Closed);
        assert_eq!(player.open(UserId(7)), Ok(0));
    }

    #[test]
    fn state_serializes_for_the_ipc_boundary() {
        let mut player = two_story_player();
        player.open(UserId(1)).unwrap();
        player.tick(2);

        let json = serde_json::to_value(player.state()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "open", "currentIndex": 0, "progress": 2 })
        );
        player.close();
        assert_eq!(
            serde_json::to_value(player.state()).unwrap(),
            serde_json::json!({ "kind": "closed" })
        );
    }

    #[test]
    fn default_rate_plays_a_story_in_five_seconds() {
        assert_eq!(PlaybackConfig::default().story_duration_ms(), 5_000);
    }
}
