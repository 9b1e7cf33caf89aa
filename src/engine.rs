//! Round and turn state machine.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError, SlotError};
use crate::player::PlayerManager;
use crate::types::{GameStatus, Occupant, SlotIndex};
use crate::wins::{WinCarryPolicy, WinLedger};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Play continues; the given slot moves next.
    Continued {
        /// Slot holding the next turn.
        next_slot: SlotIndex,
    },
    /// The move completed a line. The cursor stays on the winner.
    Win {
        /// Slot that completed the line.
        winner: SlotIndex,
    },
    /// The move filled the last tile with no line completed.
    Tie,
}

/// The game engine: board, roster, win ledger, and turn cursor behind a
/// `Stopped → Ongoing → {Win, Tie}` state machine.
///
/// One instance is one session. There is no ambient state; callers own
/// the engine and hand out references as they see fit. All mutation goes
/// through `&mut self`, so a server-hosted variant only needs to wrap
/// the instance in a mutex to serialize rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    players: Vec<PlayerManager>,
    wins: WinLedger,
    active: SlotIndex,
    marked_tiles: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a stopped engine for the given configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid configuration (zero dimension or fewer
    /// than two player slots); nothing else about construction can fail.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dimension = *config.dimension();
        let player_count = *config.player_count();
        info!(dimension, player_count, "Creating game engine");
        Ok(Self {
            board: Board::new(dimension),
            players: (0..player_count)
                .map(|slot| PlayerManager::for_slot(slot, dimension))
                .collect(),
            wins: WinLedger::new(player_count),
            active: 0,
            marked_tiles: 0,
            status: GameStatus::Stopped,
            config,
        })
    }

    /// Begins accepting moves.
    ///
    /// Only transitions from `Stopped`; calling this mid-game or on a
    /// finished board is a no-op so it can never re-arm win tracking.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.status != GameStatus::Stopped {
            debug!(status = %self.status, "start ignored");
            return;
        }
        info!("Game started");
        self.status = GameStatus::Ongoing;
    }

    /// Plays one move for the active player.
    ///
    /// On success the mark is placed, the active player's tallies are
    /// updated, and the game either continues (cursor advances in turn
    /// order), ends in a win (ledger credited, cursor frozen), or ends in
    /// a tie (board full, cursor frozen). A move that completes a line
    /// while filling the last tile is a win, never a tie.
    ///
    /// # Errors
    ///
    /// Rejected moves ([`MoveError`]) leave the engine untouched: the
    /// game is not `Ongoing`, the coordinates are off the board, or the
    /// tile is occupied. None of these are fatal.
    #[instrument(skip(self), fields(slot = self.active))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<RoundOutcome, MoveError> {
        if self.status != GameStatus::Ongoing {
            warn!(status = %self.status, "move while game inactive");
            return Err(MoveError::InactiveGame {
                status: self.status,
            });
        }

        let size = self.board.size();
        if row >= size || col >= size {
            warn!(row, col, size, "move out of bounds");
            return Err(MoveError::InvalidCoordinate { row, col, size });
        }
        if !self.board.place(row, col, self.active) {
            warn!(row, col, "move onto occupied tile");
            return Err(MoveError::OccupiedTile { row, col });
        }

        self.marked_tiles += 1;
        let manager = &mut self.players[self.active];
        manager.apply_move(row, col);
        debug!(
            player = manager.name(),
            row,
            col,
            score = manager.score(),
            "mark placed"
        );

        // Win before tie: a move that completes a line and fills the
        // board is a win.
        if usize::from(manager.score()) >= size {
            self.status = GameStatus::Win;
            let winner = self.active;
            self.wins
                .record_win(winner)
                .expect("active slot is always within the roster");
            info!(winner, "line completed");
            return Ok(RoundOutcome::Win { winner });
        }

        if self.marked_tiles == size * size {
            self.status = GameStatus::Tie;
            info!("board full with no line completed");
            return Ok(RoundOutcome::Tie);
        }

        self.active = (self.active + 1) % self.players.len();
        Ok(RoundOutcome::Continued {
            next_slot: self.active,
        })
    }

    /// Returns the engine to `Stopped` with a clear board, zeroed
    /// trackers, and the cursor on slot 0. Idempotent.
    ///
    /// Player names always survive. Win counts survive unless the
    /// configuration says [`WinCarryPolicy::ClearOnReset`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        for manager in &mut self.players {
            manager.reset();
        }
        if *self.config.win_carry() == WinCarryPolicy::ClearOnReset {
            self.wins.reset();
        }
        self.marked_tiles = 0;
        self.active = 0;
        self.status = GameStatus::Stopped;
        info!("Engine reset");
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Slot holding the current turn. After a win this stays on the
    /// winner; after a tie, on whoever moved last.
    pub fn active_slot(&self) -> SlotIndex {
        self.active
    }

    /// Board dimension.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Occupant of the tile at the given coordinates, or `None` when the
    /// coordinates fall outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Occupant> {
        self.board.get(row, col)
    }

    /// Number of occupied tiles.
    pub fn marked_tiles(&self) -> usize {
        self.marked_tiles
    }

    /// Win count for the given slot.
    ///
    /// # Errors
    ///
    /// [`SlotError`] when the slot is outside the roster.
    pub fn wins_for(&self, slot: SlotIndex) -> Result<u32, SlotError> {
        self.wins.wins_for(slot)
    }

    /// Display name of the player in the given slot.
    ///
    /// # Errors
    ///
    /// [`SlotError`] when the slot is outside the roster.
    pub fn player_name(&self, slot: SlotIndex) -> Result<&str, SlotError> {
        self.manager(slot).map(PlayerManager::name)
    }

    /// Renames the player in the given slot. Wins stay attached to the
    /// slot, not the name.
    ///
    /// # Errors
    ///
    /// [`SlotError`] when the slot is outside the roster.
    #[instrument(skip(self, name))]
    pub fn set_player_name(
        &mut self,
        slot: SlotIndex,
        name: impl Into<String>,
    ) -> Result<(), SlotError> {
        let player_count = self.players.len();
        let manager = self.players.get_mut(slot).ok_or(SlotError {
            slot,
            player_count,
        })?;
        manager.set_name(name);
        debug!(slot, name = manager.name(), "player renamed");
        Ok(())
    }

    fn manager(&self, slot: SlotIndex) -> Result<&PlayerManager, SlotError> {
        self.players.get(slot).ok_or(SlotError {
            slot,
            player_count: self.players.len(),
        })
    }
}
