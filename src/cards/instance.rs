//! Card instances - a player's owned, leveled copy of a card.
//!
//! `CardInstance` tracks the only mutable per-card state in the
//! progression system: the current level. Instances are created on the
//! first successful upgrade or by an explicit grant, and are mutated
//! only by `UpgradeService`.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// A player's owned copy of a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Reference to the card definition.
    pub card_id: CardId,

    /// Current level, always in `1..=max_level`.
    pub level: u32,
}

impl CardInstance {
    /// Create an instance at level 1.
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self { card_id, level: 1 }
    }

    /// Create an instance at a specific level.
    #[must_use]
    pub fn at_level(card_id: CardId, level: u32) -> Self {
        debug_assert!(level >= 1, "card level must be at least 1");
        Self { card_id, level }
    }
}
