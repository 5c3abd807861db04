//! Upgrade service - preview and commit.
//!
//! The service holds the immutable rules data (catalog, rarity curves,
//! configuration) and is the single entry point through which upgrades
//! mutate player state. Commits pass `&mut PlayerData` and
//! `&mut UpgradeRng`, so the debit-roll-mutate sequence of one call
//! can never interleave with another.
//!
//! ## Economic contract
//!
//! An attempt that passes the funds check always debits the wallet in
//! full before the success roll, and nothing is refunded on a lost
//! roll. Only the level-up itself is probabilistic.

use tracing::{debug, warn};

use crate::cards::{CardCatalog, CardDefinition, CardId};
use crate::core::UpgradeRng;
use crate::curves::{EffectId, RarityCurveTable};
use crate::player::{PlayerCardCollection, PlayerData};

use super::config::UpgradeConfig;
use super::preview::{RejectReason, UpgradeOutcome, UpgradePreview, UpgradeResult};

/// Orchestrates upgrade previews and commits.
///
/// Constructed with its collaborators; nothing is resolved through
/// globals.
#[derive(Clone, Debug)]
pub struct UpgradeService {
    catalog: CardCatalog,
    curves: RarityCurveTable,
    config: UpgradeConfig,
}

impl UpgradeService {
    /// Create a service from its rules data.
    #[must_use]
    pub fn new(catalog: CardCatalog, curves: RarityCurveTable, config: UpgradeConfig) -> Self {
        Self {
            catalog,
            curves,
            config,
        }
    }

    /// The card catalog this service resolves against.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &UpgradeConfig {
        &self.config
    }

    /// Mutable configuration access, e.g. for the kill-switch.
    pub fn config_mut(&mut self) -> &mut UpgradeConfig {
        &mut self.config
    }

    /// Effective stat value of a card at the player's current level.
    ///
    /// Dispatches by card kind: Attack and Special read power, Heal
    /// reads heal amount, Move reads move distance. Returns `None` for
    /// an unknown card id.
    #[must_use]
    pub fn effective_value(
        &self,
        collection: &PlayerCardCollection,
        card_id: &CardId,
    ) -> Option<i64> {
        let Some(def) = self.catalog.definition(card_id) else {
            warn!(card = %card_id, "effective value requested for unknown card");
            return None;
        };
        let level = collection.level_of(card_id, def.fallback_level);
        Some(self.value_at_level(def, level))
    }

    /// The effect a card unlocks exactly at its current level, if its
    /// per-card curve schedules one.
    #[must_use]
    pub fn unlocked_effect(
        &self,
        collection: &PlayerCardCollection,
        card_id: &CardId,
    ) -> Option<&EffectId> {
        let def = self.catalog.definition(card_id)?;
        let curve = self.catalog.curve(card_id)?;
        let level = collection.level_of(card_id, def.fallback_level);
        curve.special_effect(level)
    }

    /// Compute what the next upgrade for `card_id` would cost and
    /// yield.
    ///
    /// Returns `None` when the card is unknown or no curve covers its
    /// rarity. At max level the preview carries zero costs, a zero
    /// success rate, and `next_level == current_level`.
    #[must_use]
    pub fn preview(
        &self,
        collection: &PlayerCardCollection,
        card_id: &CardId,
    ) -> Option<UpgradePreview> {
        let Some(def) = self.catalog.definition(card_id) else {
            warn!(card = %card_id, "upgrade preview requested for unknown card");
            return None;
        };
        let Some(curve) = self.curves.curve_for(def.rarity) else {
            warn!(card = %card_id, rarity = ?def.rarity, "no rarity curve registered and no default configured");
            return None;
        };

        let current_level = collection.level_of(card_id, def.fallback_level);
        let current_value = self.value_at_level(def, current_level);

        if curve.is_max_level(current_level) {
            return Some(UpgradePreview {
                card_id: card_id.clone(),
                current_level,
                next_level: current_level,
                current_value,
                next_value: current_value,
                required_gold: 0,
                required_shards: 0,
                success_rate: 0.0,
                is_max_level: true,
            });
        }

        let next_level = current_level + 1;
        Some(UpgradePreview {
            card_id: card_id.clone(),
            current_level,
            next_level,
            current_value,
            next_value: self.value_at_level(def, next_level),
            required_gold: curve.required_gold(current_level),
            required_shards: curve.required_shards(current_level),
            success_rate: curve.success_rate(current_level),
            is_max_level: false,
        })
    }

    /// Commit one upgrade attempt for `card_id`.
    ///
    /// The preview is recomputed fresh inside the call; a stale
    /// caller-held preview can never set the price. `use_protector`
    /// is accepted for API compatibility but has no defined behavior
    /// yet and is not consulted.
    pub fn try_upgrade(
        &self,
        player: &mut PlayerData,
        card_id: &CardId,
        use_protector: bool,
        rng: &mut UpgradeRng,
    ) -> UpgradeResult {
        let _ = use_protector;

        if !self.config.is_enabled() {
            let level = self.resolved_level(&player.collection, card_id);
            return UpgradeResult::rejected(card_id.clone(), level, RejectReason::FeatureDisabled);
        }

        let Some(preview) = self.preview(&player.collection, card_id) else {
            let reason = if self.catalog.definition(card_id).is_none() {
                RejectReason::UnknownCard
            } else {
                RejectReason::NoCurve
            };
            let level = self.resolved_level(&player.collection, card_id);
            return UpgradeResult::rejected(card_id.clone(), level, reason);
        };

        if preview.is_max_level {
            return UpgradeResult::rejected(
                card_id.clone(),
                preview.current_level,
                RejectReason::MaxLevel,
            );
        }

        if !player
            .wallet
            .can_afford(preview.required_gold, preview.required_shards)
        {
            return UpgradeResult::rejected(
                card_id.clone(),
                preview.current_level,
                RejectReason::InsufficientFunds,
            );
        }

        // The debit precedes the roll and is final whatever the roll
        // says.
        let debited = player
            .wallet
            .try_debit(preview.required_gold, preview.required_shards);
        debug_assert!(debited, "funds were checked above");

        let roll = rng.roll();
        if roll <= preview.success_rate {
            let instance = player.collection.grant(card_id.clone());
            instance.level = preview.next_level;
            debug!(
                card = %card_id,
                from = preview.current_level,
                to = preview.next_level,
                gold = preview.required_gold,
                shards = preview.required_shards,
                "upgrade succeeded"
            );
            UpgradeResult {
                card_id: card_id.clone(),
                outcome: UpgradeOutcome::Success,
                previous_level: preview.current_level,
                new_level: preview.next_level,
                gold_spent: preview.required_gold,
                shards_spent: preview.required_shards,
            }
        } else {
            debug!(
                card = %card_id,
                level = preview.current_level,
                gold = preview.required_gold,
                shards = preview.required_shards,
                "upgrade roll failed"
            );
            UpgradeResult {
                card_id: card_id.clone(),
                outcome: UpgradeOutcome::Failed,
                previous_level: preview.current_level,
                new_level: preview.current_level,
                gold_spent: preview.required_gold,
                shards_spent: preview.required_shards,
            }
        }
    }

    /// Stat value at a specific level: per-card curve override when
    /// attached, legacy linear formula otherwise.
    fn value_at_level(&self, def: &CardDefinition, level: u32) -> i64 {
        match self.catalog.curve(&def.id) {
            Some(curve) => def.base_value() + curve.increase_for(def.kind, level),
            None => def.linear_value_at(level),
        }
    }

    /// Best-effort current level for rejection records.
    fn resolved_level(&self, collection: &PlayerCardCollection, card_id: &CardId) -> u32 {
        self.catalog
            .definition(card_id)
            .map_or(1, |def| collection.level_of(card_id, def.fallback_level))
    }
}
