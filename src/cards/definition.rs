//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its kind,
//! base stats, and rarity. For example, "Fireball" is an Attack card
//! with a base power of 10 and Normal rarity.
//!
//! A player's leveled copy of a card is stored separately in
//! `CardInstance` - the definition never changes at runtime.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the card "type" (e.g., "fireball"), not a player's
/// owned copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when played.
///
/// The kind decides which base stat effective-value resolution reads:
/// Attack and Special read power, Heal reads heal amount, Move reads
/// move distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Deals damage; primary stat is power.
    Attack,
    /// Moves the player; primary stat is move distance.
    Move,
    /// Restores health; primary stat is heal amount.
    Heal,
    /// Special effect card; primary stat is power.
    Special,
}

/// Rarity tier of a card.
///
/// Every card of one rarity shares the same `RarityCurve` of upgrade
/// costs and success rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Normal,
    Rare,
    Epic,
    Legendary,
}

/// Static card definition.
///
/// Immutable catalog entry, created at load time and never mutated.
///
/// ## Example
///
/// ```
/// use card_forge::cards::{CardDefinition, CardKind, Rarity};
///
/// let fireball = CardDefinition::new("fireball", "Fireball", CardKind::Attack, Rarity::Normal)
///     .with_power(10);
///
/// assert_eq!(fireball.base_power, 10);
/// assert_eq!(fireball.linear_value_at(3), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// What the card does; selects the primary stat.
    pub kind: CardKind,

    /// Base damage at level 1.
    pub base_power: i64,

    /// Base heal amount at level 1.
    pub base_heal: i64,

    /// Base move distance at level 1.
    pub base_move_distance: i64,

    /// Rarity tier; selects the upgrade cost/success curve.
    pub rarity: Rarity,

    /// Level assumed when the player owns no instance of this card.
    pub fallback_level: u32,
}

impl CardDefinition {
    /// Create a new card definition with all base stats at zero.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        kind: CardKind,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            base_power: 0,
            base_heal: 0,
            base_move_distance: 0,
            rarity,
            fallback_level: 1,
        }
    }

    /// Set the base power (builder pattern).
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.base_power = power;
        self
    }

    /// Set the base heal amount.
    #[must_use]
    pub fn with_heal(mut self, heal: i64) -> Self {
        self.base_heal = heal;
        self
    }

    /// Set the base move distance.
    #[must_use]
    pub fn with_move_distance(mut self, distance: i64) -> Self {
        self.base_move_distance = distance;
        self
    }

    /// Set the fallback level used when no instance exists.
    #[must_use]
    pub fn with_fallback_level(mut self, level: u32) -> Self {
        debug_assert!(level >= 1, "fallback level must be at least 1");
        self.fallback_level = level;
        self
    }

    /// Base stat for this card's kind.
    #[must_use]
    pub fn base_value(&self) -> i64 {
        match self.kind {
            CardKind::Attack | CardKind::Special => self.base_power,
            CardKind::Heal => self.base_heal,
            CardKind::Move => self.base_move_distance,
        }
    }

    /// Legacy per-level stat formula, used when no per-card growth
    /// curve is attached:
    ///
    /// - power: `base + (level-1) * 5`
    /// - heal: `base + (level-1) * 3`
    /// - move distance: `base + (level-1) / 2`
    #[must_use]
    pub fn linear_value_at(&self, level: u32) -> i64 {
        debug_assert!(level >= 1, "card level must be at least 1");
        let steps = i64::from(level.max(1)) - 1;
        match self.kind {
            CardKind::Attack | CardKind::Special => self.base_power + steps * 5,
            CardKind::Heal => self.base_heal + steps * 3,
            CardKind::Move => self.base_move_distance + steps / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("fireball");
        assert_eq!(id.as_str(), "fireball");
        assert_eq!(format!("{}", id), "Card(fireball)");
        assert_eq!(CardId::from("fireball"), id);
    }

    #[test]
    fn test_definition_builder() {
        let card = CardDefinition::new("slash", "Slash", CardKind::Attack, Rarity::Rare)
            .with_power(7)
            .with_fallback_level(2);

        assert_eq!(card.id, CardId::new("slash"));
        assert_eq!(card.base_power, 7);
        assert_eq!(card.base_heal, 0);
        assert_eq!(card.rarity, Rarity::Rare);
        assert_eq!(card.fallback_level, 2);
    }

    #[test]
    fn test_linear_power_growth() {
        let card = CardDefinition::new("slash", "Slash", CardKind::Attack, Rarity::Normal)
            .with_power(10);

        assert_eq!(card.linear_value_at(1), 10);
        assert_eq!(card.linear_value_at(2), 15);
        assert_eq!(card.linear_value_at(5), 30);
    }

    #[test]
    fn test_linear_heal_growth() {
        let card = CardDefinition::new("mend", "Mend", CardKind::Heal, Rarity::Normal)
            .with_heal(6);

        assert_eq!(card.linear_value_at(1), 6);
        assert_eq!(card.linear_value_at(2), 9);
        assert_eq!(card.linear_value_at(4), 15);
    }

    #[test]
    fn test_linear_move_growth_every_other_level() {
        let card = CardDefinition::new("dash", "Dash", CardKind::Move, Rarity::Normal)
            .with_move_distance(2);

        assert_eq!(card.linear_value_at(1), 2);
        assert_eq!(card.linear_value_at(2), 2);
        assert_eq!(card.linear_value_at(3), 3);
        assert_eq!(card.linear_value_at(4), 3);
        assert_eq!(card.linear_value_at(5), 4);
    }

    #[test]
    fn test_special_uses_power() {
        let card = CardDefinition::new("warp", "Warp", CardKind::Special, Rarity::Epic)
            .with_power(4)
            .with_heal(99);

        assert_eq!(card.base_value(), 4);
        assert_eq!(card.linear_value_at(2), 9);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new("slash", "Slash", CardKind::Attack, Rarity::Normal)
            .with_power(10);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
