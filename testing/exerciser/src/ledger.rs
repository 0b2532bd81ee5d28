//! In-process record of stakes created by the bond task.

use std::sync::Mutex;

use alloy_primitives::{Address, U256};
use rand::Rng;

/// Ordered record of (validator, amount) stakes, appended by `bond` and
/// drawn from by `unbond`.
///
/// Entries are retained after an unbond is submitted, matching the reference
/// behavior: a fully released stake can be drawn again, and the follow-up
/// unbond is then expected to revert on chain with an insufficient-stake
/// error.
#[derive(Debug, Default)]
pub struct BondingLedger {
    stakes: Mutex<Vec<(Address, U256)>>,
}

impl BondingLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a stake created by a confirmed bond.
    pub fn record(&self, validator: Address, amount: U256) {
        self.stakes.lock().expect("bonding ledger lock poisoned").push((validator, amount));
    }

    /// Draws a recorded stake uniformly at random without removing it.
    pub fn pick(&self) -> Option<(Address, U256)> {
        let stakes = self.stakes.lock().expect("bonding ledger lock poisoned");
        if stakes.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..stakes.len());
        Some(stakes[idx])
    }

    /// Number of recorded stakes.
    pub fn len(&self) -> usize {
        self.stakes.lock().expect("bonding ledger lock poisoned").len()
    }

    /// Returns true if no stakes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_on_empty_ledger_returns_none() {
        let ledger = BondingLedger::new();
        assert!(ledger.pick().is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn pick_returns_a_recorded_stake() {
        let ledger = BondingLedger::new();
        let validator = Address::repeat_byte(0x11);
        let amount = U256::from(100_000_000_000_000_000u64);
        ledger.record(validator, amount);

        assert_eq!(ledger.pick(), Some((validator, amount)));
    }

    #[test]
    fn entries_survive_picks() {
        // The ledger never forgets a stake, even once it has been drawn for
        // an unbond; repeated draws of the same entry are expected.
        let ledger = BondingLedger::new();
        ledger.record(Address::repeat_byte(0x11), U256::from(1u64));
        ledger.record(Address::repeat_byte(0x22), U256::from(2u64));

        for _ in 0..10 {
            assert!(ledger.pick().is_some());
        }
        assert_eq!(ledger.len(), 2);
    }
}
