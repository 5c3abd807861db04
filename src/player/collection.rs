//! Player card collection - the owned card instances.
//!
//! Instances are keyed by card id. A card with no instance is treated
//! as being at its fallback level for all computations; the instance
//! is only materialized on the first successful upgrade or an explicit
//! grant.
//!
//! Mutations report their outcome through return values; there are no
//! change-notification callbacks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};

use super::wallet::Wallet;

/// The set of card instances a player owns.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerCardCollection {
    cards: FxHashMap<CardId, CardInstance>,
}

impl PlayerCardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the instance for a card, if owned.
    #[must_use]
    pub fn instance(&self, id: &CardId) -> Option<&CardInstance> {
        self.cards.get(id)
    }

    /// Add a new instance. Returns `false` without replacing if one
    /// already exists for the card.
    pub fn add(&mut self, instance: CardInstance) -> bool {
        if self.cards.contains_key(&instance.card_id) {
            return false;
        }
        self.cards.insert(instance.card_id.clone(), instance);
        true
    }

    /// Replace an existing instance. Returns `false` if the card has
    /// no instance to update.
    pub fn update(&mut self, instance: CardInstance) -> bool {
        if !self.cards.contains_key(&instance.card_id) {
            return false;
        }
        self.cards.insert(instance.card_id.clone(), instance);
        true
    }

    /// Fetch the instance for a card, materializing it at level 1 if
    /// absent.
    pub fn grant(&mut self, card_id: CardId) -> &mut CardInstance {
        self.cards
            .entry(card_id.clone())
            .or_insert_with(|| CardInstance::new(card_id))
    }

    /// Remove an instance. Returns it if the card was owned.
    pub fn remove(&mut self, id: &CardId) -> Option<CardInstance> {
        self.cards.remove(id)
    }

    /// Current level of a card, or `fallback` when no instance exists.
    #[must_use]
    pub fn level_of(&self, id: &CardId, fallback: u32) -> u32 {
        self.cards.get(id).map_or(fallback, |inst| inst.level)
    }

    /// Number of owned instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all owned instances.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }
}

/// A player's progression state: owned cards plus currency.
///
/// This is the handle the upgrade service takes `&mut` per call; the
/// surrounding save system owns and persists it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerData {
    /// Owned card instances.
    pub collection: PlayerCardCollection,
    /// Gold and shard balances.
    pub wallet: Wallet,
}

impl PlayerData {
    /// Create empty player data with starting balances.
    #[must_use]
    pub fn new(gold: i64, shards: i64) -> Self {
        Self {
            collection: PlayerCardCollection::new(),
            wallet: Wallet::new(gold, shards),
        }
    }
}
