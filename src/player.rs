//! Player identity and per-player move accounting.

use crate::tracker::PointTracker;
use crate::types::SlotIndex;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player identity: a stable slot plus a mutable display name.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct Player {
    /// Stable position in the turn order.
    slot: SlotIndex,
    /// Display name, defaults to "Player N" at roster construction.
    name: String,
}

impl Player {
    /// Replaces the display name. The slot never changes.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Binds a [`Player`] to its [`PointTracker`] and translates moves into
/// tally updates. No state beyond the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerManager {
    player: Player,
    tracker: PointTracker,
}

impl PlayerManager {
    /// Creates a manager for the given slot with the draft-conventional
    /// "Player N" default name and a zeroed tracker.
    pub fn for_slot(slot: SlotIndex, board_size: usize) -> Self {
        Self {
            player: Player::new(slot, format!("Player {}", slot + 1)),
            tracker: PointTracker::new(board_size),
        }
    }

    /// The player's slot in the turn order.
    pub fn slot(&self) -> SlotIndex {
        *self.player.slot()
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        self.player.name()
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.player.set_name(name);
    }

    /// Records a mark at the given coordinates in the owned tracker.
    #[instrument(skip(self), fields(slot = self.slot()))]
    pub fn apply_move(&mut self, row: usize, col: usize) {
        self.tracker.record_mark(row, col);
        debug!(max_line = self.tracker.max_line(), "tallies updated");
    }

    /// The player's best line fill, straight from the tracker cache.
    pub fn score(&self) -> u16 {
        self.tracker.max_line()
    }

    /// Zeroes the tracker. Identity (slot and name) is untouched.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
