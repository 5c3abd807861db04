//! Card catalog - definition lookup.
//!
//! The `CardCatalog` stores every card definition plus the optional
//! per-card growth curves. It is built once at load time and read-only
//! afterwards.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::curves::CardCurve;

/// Read-only table of card definitions.
///
/// ## Example
///
/// ```
/// use card_forge::cards::{CardCatalog, CardDefinition, CardId, CardKind, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardDefinition::new("fireball", "Fireball", CardKind::Attack, Rarity::Normal)
///         .with_power(10),
/// );
///
/// let found = catalog.definition(&CardId::new("fireball")).unwrap();
/// assert_eq!(found.name, "Fireball");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    curves: FxHashMap<CardId, CardCurve>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists - duplicate
    /// ids are a content-authoring error caught at load time.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Attach a per-card growth curve, overriding the legacy linear
    /// formulas for that card.
    ///
    /// Panics if the target card is not registered.
    pub fn attach_curve(&mut self, curve: CardCurve) {
        if !self.cards.contains_key(&curve.card_id) {
            panic!("Curve targets unregistered card {}", curve.card_id);
        }
        self.curves.insert(curve.card_id.clone(), curve);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn definition(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Get the per-card curve attached to a card, if any.
    #[must_use]
    pub fn curve(&self, id: &CardId) -> Option<&CardCurve> {
        self.curves.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;

    fn fireball() -> CardDefinition {
        CardDefinition::new("fireball", "Fireball", CardKind::Attack, Rarity::Normal)
            .with_power(10)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = CardCatalog::new();
        catalog.register(fireball());

        let found = catalog.definition(&CardId::new("fireball"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Fireball");

        assert!(catalog.definition(&CardId::new("missing")).is_none());
        assert!(catalog.contains(&CardId::new("fireball")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(fireball());
        catalog.register(fireball());
    }

    #[test]
    fn test_attach_curve() {
        let mut catalog = CardCatalog::new();
        catalog.register(fireball());

        assert!(catalog.curve(&CardId::new("fireball")).is_none());

        catalog.attach_curve(CardCurve::new("fireball", 10));
        assert!(catalog.curve(&CardId::new("fireball")).is_some());
    }

    #[test]
    #[should_panic(expected = "unregistered card")]
    fn test_curve_for_unknown_card_panics() {
        let mut catalog = CardCatalog::new();
        catalog.attach_curve(CardCurve::new("ghost", 10));
    }

    #[test]
    fn test_find_by_kind() {
        let mut catalog = CardCatalog::new();
        catalog.register(fireball());
        catalog.register(CardDefinition::new("mend", "Mend", CardKind::Heal, Rarity::Normal));
        catalog.register(CardDefinition::new("dash", "Dash", CardKind::Move, Rarity::Rare));
        catalog.register(CardDefinition::new(
            "slash",
            "Slash",
            CardKind::Attack,
            Rarity::Normal,
        ));

        let attacks: Vec<_> = catalog.find_by_kind(CardKind::Attack).collect();
        assert_eq!(attacks.len(), 2);

        let heals: Vec<_> = catalog.find_by_kind(CardKind::Heal).collect();
        assert_eq!(heals.len(), 1);
    }
}
