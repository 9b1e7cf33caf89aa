//! Tally-based tic-tac-toe engine.
//!
//! The engine covers the board model, per-player scoring, and the
//! round/turn state machine of an N-player square-board tic-tac-toe
//! game. Rendering and input belong to the caller, which drives the
//! engine through [`GameEngine`].
//!
//! Win detection is O(1) per move: each player carries running tallies
//! of their marks per row, column, and diagonal, and a move wins exactly
//! when one tally reaches the board dimension. No line scanning ever
//! happens after construction.
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{EngineError, GameConfig, GameEngine, GameStatus, RoundOutcome};
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut game = GameEngine::new(GameConfig::default())?;
//!     game.start();
//!
//!     // Player 1 takes the top row while Player 2 plays the middle.
//!     game.play_round(0, 0)?;
//!     game.play_round(1, 1)?;
//!     game.play_round(0, 1)?;
//!     game.play_round(2, 2)?;
//!     let outcome = game.play_round(0, 2)?;
//!
//!     assert_eq!(outcome, RoundOutcome::Win { winner: 0 });
//!     assert_eq!(game.status(), GameStatus::Win);
//!     assert_eq!(game.wins_for(0)?, 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod engine;
mod error;
mod player;
mod tracker;
mod types;
mod wins;

// Crate-level exports - board model
pub use board::{Board, Tile};

// Crate-level exports - configuration
pub use config::GameConfig;

// Crate-level exports - engine state machine
pub use engine::{GameEngine, RoundOutcome};

// Crate-level exports - errors
pub use error::{ConfigError, EngineError, MoveError, SlotError};

// Crate-level exports - players and scoring
pub use player::{Player, PlayerManager};
pub use tracker::PointTracker;
pub use wins::{WinCarryPolicy, WinLedger};

// Crate-level exports - shared types
pub use types::{GameStatus, Occupant, SlotIndex};
