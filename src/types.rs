//! Core domain types shared across the engine.

use serde::{Deserialize, Serialize};

/// Stable position of a player within the engine's turn order.
///
/// Slots are assigned at construction and never move, even when the
/// player behind a slot is renamed. Win counts attach to slots.
pub type SlotIndex = usize;

/// Contents of a single board tile.
///
/// One tagged representation for every occupancy check in the crate;
/// earlier drafts of this game compared loose string markers and paid
/// for it with silent `'1' != 1` bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// No mark has been placed here since the last reset.
    Empty,
    /// Marked by the player holding the given slot.
    Occupied(SlotIndex),
}

impl Occupant {
    /// Returns true if no player has marked this tile.
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the occupying slot, if any.
    pub fn slot(&self) -> Option<SlotIndex> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(slot) => Some(*slot),
        }
    }
}

/// Lifecycle state of a game round.
///
/// Transitions: `Stopped → Ongoing → {Win, Tie}`, and any state back to
/// `Stopped` via [`GameEngine::reset`](crate::GameEngine::reset). Only
/// `Ongoing` accepts moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameStatus {
    /// Constructed or reset; waiting for `start()`.
    Stopped,
    /// Accepting moves.
    Ongoing,
    /// The last accepted move completed a line.
    Win,
    /// The last accepted move filled the board with no line completed.
    Tie,
}

impl GameStatus {
    /// Returns true if the game has reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Tie)
    }
}
