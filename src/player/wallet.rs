//! Wallet - the player's gold and shard balances.
//!
//! Balances never go negative: a debit either fully succeeds or leaves
//! the wallet untouched.

use serde::{Deserialize, Serialize};

/// Gold and shard balances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    gold: i64,
    shards: i64,
}

impl Wallet {
    /// Create a wallet with starting balances.
    #[must_use]
    pub fn new(gold: i64, shards: i64) -> Self {
        debug_assert!(gold >= 0 && shards >= 0, "balances must be non-negative");
        Self { gold, shards }
    }

    /// Current `(gold, shards)` balances.
    #[must_use]
    pub fn balance(&self) -> (i64, i64) {
        (self.gold, self.shards)
    }

    /// Current gold balance.
    #[must_use]
    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Current shard balance.
    #[must_use]
    pub fn shards(&self) -> i64 {
        self.shards
    }

    /// Check whether both amounts are covered.
    #[must_use]
    pub fn can_afford(&self, gold: i64, shards: i64) -> bool {
        self.gold >= gold && self.shards >= shards
    }

    /// Atomically check and subtract both amounts.
    ///
    /// Returns `false` and leaves the wallet untouched if either
    /// balance is insufficient.
    pub fn try_debit(&mut self, gold: i64, shards: i64) -> bool {
        debug_assert!(gold >= 0 && shards >= 0, "debit amounts must be non-negative");
        if !self.can_afford(gold, shards) {
            return false;
        }
        self.gold -= gold;
        self.shards -= shards;
        true
    }

    /// Add to both balances.
    pub fn credit(&mut self, gold: i64, shards: i64) {
        debug_assert!(gold >= 0 && shards >= 0, "credit amounts must be non-negative");
        self.gold += gold;
        self.shards += shards;
    }
}
