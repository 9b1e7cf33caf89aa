//! Error types for the engine.
//!
//! None of these are fatal: rejected moves and bad slot indices are
//! ordinary gameplay conditions surfaced through `Result`. Only
//! construction-time configuration problems fail fast.

use crate::types::GameStatus;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A move rejected by [`GameEngine::play_round`](crate::GameEngine::play_round).
///
/// The engine stays exactly as it was: no tile, tally, cursor, or status
/// change accompanies any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The game is not currently accepting moves.
    #[display("game is not accepting moves (status: {status})")]
    InactiveGame {
        /// Status at the time of the rejected call.
        status: GameStatus,
    },
    /// Coordinates fall outside the board.
    #[display("coordinates ({row}, {col}) are outside the {size}x{size} board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension.
        size: usize,
    },
    /// The target tile already carries a mark.
    #[display("tile ({row}, {col}) is already occupied")]
    OccupiedTile {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// A slot index outside the configured roster.
///
/// Signaled rather than swallowed: silently dropping a win credit would
/// corrupt the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
#[display("slot {slot} is outside the roster of {player_count} players")]
pub struct SlotError {
    /// The offending slot index.
    pub slot: usize,
    /// Number of configured player slots.
    pub player_count: usize,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Umbrella error for callers that drive the whole engine through one type.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// Construction-time configuration problem.
    Config(ConfigError),
    /// Slot index outside the configured roster.
    Slot(SlotError),
    /// Rejected move.
    Move(MoveError),
}
