//! Session win ledger.

use crate::error::SlotError;
use crate::types::SlotIndex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// What happens to the win ledger when the engine resets for a new round.
///
/// The drafts disagreed on this, with most keeping the tally across
/// rounds, so it is policy rather than hard-coded behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCarryPolicy {
    /// Win counts survive `reset()`; cleared only at session end.
    #[default]
    Persist,
    /// Win counts are zeroed on every `reset()`.
    ClearOnReset,
}

/// Per-slot win counts for the session.
///
/// Indexed by turn-order slot, not by player identity: renaming a player
/// never moves their wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLedger {
    wins: Vec<u32>,
}

impl WinLedger {
    /// Creates a zeroed ledger with one counter per player slot.
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: vec![0; player_count],
        }
    }

    /// Credits one win to the given slot.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, slot: SlotIndex) -> Result<(), SlotError> {
        let player_count = self.wins.len();
        let counter = self.wins.get_mut(slot).ok_or_else(|| {
            warn!(slot, "win credit for unknown slot");
            SlotError { slot, player_count }
        })?;
        *counter += 1;
        info!(slot, total = *counter, "win recorded");
        Ok(())
    }

    /// Win count for the given slot.
    pub fn wins_for(&self, slot: SlotIndex) -> Result<u32, SlotError> {
        self.wins.get(slot).copied().ok_or(SlotError {
            slot,
            player_count: self.wins.len(),
        })
    }

    /// Zeroes every slot.
    pub fn reset(&mut self) {
        self.wins.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read_wins() {
        let mut ledger = WinLedger::new(2);
        ledger.record_win(1).unwrap();
        ledger.record_win(1).unwrap();
        assert_eq!(ledger.wins_for(0).unwrap(), 0);
        assert_eq!(ledger.wins_for(1).unwrap(), 2);
    }

    #[test]
    fn test_unknown_slot_is_signaled() {
        let mut ledger = WinLedger::new(2);
        let err = ledger.record_win(2).unwrap_err();
        assert_eq!(
            err,
            SlotError {
                slot: 2,
                player_count: 2
            }
        );
        assert!(ledger.wins_for(9).is_err());
    }

    #[test]
    fn test_reset_zeroes_all_slots() {
        let mut ledger = WinLedger::new(3);
        ledger.record_win(0).unwrap();
        ledger.record_win(2).unwrap();
        ledger.reset();
        for slot in 0..3 {
            assert_eq!(ledger.wins_for(slot).unwrap(), 0);
        }
    }
}
