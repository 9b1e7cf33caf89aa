//! Board and tile state.

use crate::types::{Occupant, SlotIndex};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A single board cell.
///
/// Once occupied, a tile is immutable until an explicit [`Tile::reset`];
/// [`Tile::place`] refuses to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    occupant: Occupant,
}

impl Tile {
    /// Creates an empty tile.
    pub fn new() -> Self {
        Self {
            occupant: Occupant::Empty,
        }
    }

    /// Returns the current occupant.
    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// Marks the tile for the given slot. Returns false if already occupied.
    pub fn place(&mut self, slot: SlotIndex) -> bool {
        if !self.occupant.is_empty() {
            return false;
        }
        self.occupant = Occupant::Occupied(slot);
        true
    }

    /// Returns the tile to the empty state.
    pub fn reset(&mut self) {
        self.occupant = Occupant::Empty;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-size square grid of tiles, stored row-major.
///
/// The board owns its tiles exclusively and is created once per engine;
/// [`Board::reset`] clears it in place without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// Callers validate `size >= 1` before construction; the engine does
    /// so through [`GameConfig::validate`](crate::GameConfig::validate).
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            tiles: vec![Tile::new(); size * size],
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the occupant at the given coordinates, or `None` when the
    /// coordinates fall outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Occupant> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.tiles[self.index(row, col)].occupant())
    }

    /// Marks the tile at the given coordinates for the given slot.
    ///
    /// Returns false with no mutation when the coordinates are out of
    /// range or the tile is already occupied.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: usize, col: usize, slot: SlotIndex) -> bool {
        if !self.in_bounds(row, col) {
            trace!("placement out of bounds");
            return false;
        }
        let idx = self.index(row, col);
        self.tiles[idx].place(slot)
    }

    /// Clears every tile in place. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            tile.reset();
        }
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}
