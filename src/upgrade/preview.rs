//! Preview and result records for upgrade attempts.
//!
//! Both are transient values: a preview is recomputed on every request
//! and never persisted, a result describes exactly one commit attempt.
//! Callers branch on these values; no domain failure is raised as a
//! panic.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Projection of what the next upgrade would cost and yield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradePreview {
    /// The card being previewed.
    pub card_id: CardId,
    /// Current level.
    pub current_level: u32,
    /// Level after a successful upgrade. Equals `current_level` at max.
    pub next_level: u32,
    /// Effective stat value at the current level.
    pub current_value: i64,
    /// Effective stat value at the next level.
    pub next_value: i64,
    /// Gold the attempt costs. Zero at max level.
    pub required_gold: i64,
    /// Shards the attempt costs. Zero at max level.
    pub required_shards: i64,
    /// Probability the attempt succeeds. Zero at max level.
    pub success_rate: f64,
    /// Whether the card can no longer be upgraded.
    pub is_max_level: bool,
}

/// Why an upgrade attempt was rejected before any currency was spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The upgrade subsystem is switched off.
    FeatureDisabled,
    /// No card definition exists for the id.
    UnknownCard,
    /// No rarity curve is registered and no default is configured.
    NoCurve,
    /// The card is already at its maximum level.
    MaxLevel,
    /// The wallet cannot cover the required gold and shards.
    InsufficientFunds,
}

impl RejectReason {
    /// Human-readable message for UI display.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::FeatureDisabled => "card upgrades are currently disabled",
            RejectReason::UnknownCard => "unknown card",
            RejectReason::NoCurve => "no upgrade curve configured for this card",
            RejectReason::MaxLevel => "card is already at max level",
            RejectReason::InsufficientFunds => "insufficient resources",
        }
    }
}

/// Outcome of one upgrade commit.
///
/// `Failed` means the roll was lost after the debit: resources are
/// spent and the level is unchanged. `Rejected` means the attempt was
/// refused before any currency was touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeOutcome {
    /// The roll succeeded; the card leveled up.
    Success,
    /// The roll failed after the debit; resources are gone.
    Failed,
    /// Refused up front; no state changed.
    Rejected(RejectReason),
}

/// Record of one upgrade attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradeResult {
    /// The card that was attempted.
    pub card_id: CardId,
    /// How the attempt ended.
    pub outcome: UpgradeOutcome,
    /// Level before the attempt.
    pub previous_level: u32,
    /// Level after the attempt. Differs from `previous_level` only on
    /// success.
    pub new_level: u32,
    /// Gold actually spent. Zero for rejections.
    pub gold_spent: i64,
    /// Shards actually spent. Zero for rejections.
    pub shards_spent: i64,
}

impl UpgradeResult {
    /// Build a rejection record: nothing spent, level unchanged.
    pub(crate) fn rejected(card_id: CardId, level: u32, reason: RejectReason) -> Self {
        Self {
            card_id,
            outcome: UpgradeOutcome::Rejected(reason),
            previous_level: level,
            new_level: level,
            gold_spent: 0,
            shards_spent: 0,
        }
    }

    /// Whether the card leveled up.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == UpgradeOutcome::Success
    }

    /// Whether the attempt was refused before spending anything.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, UpgradeOutcome::Rejected(_))
    }

    /// Human-readable message for UI display.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.outcome {
            UpgradeOutcome::Success => "upgrade succeeded",
            UpgradeOutcome::Failed => "upgrade failed",
            UpgradeOutcome::Rejected(reason) => reason.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_record_spends_nothing() {
        let result =
            UpgradeResult::rejected(CardId::new("fireball"), 3, RejectReason::InsufficientFunds);

        assert!(result.is_rejected());
        assert!(!result.is_success());
        assert_eq!(result.previous_level, 3);
        assert_eq!(result.new_level, 3);
        assert_eq!(result.gold_spent, 0);
        assert_eq!(result.shards_spent, 0);
        assert_eq!(result.message(), "insufficient resources");
    }

    #[test]
    fn test_messages_are_distinct() {
        let reasons = [
            RejectReason::FeatureDisabled,
            RejectReason::UnknownCard,
            RejectReason::NoCurve,
            RejectReason::MaxLevel,
            RejectReason::InsufficientFunds,
        ];

        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = UpgradeResult {
            card_id: CardId::new("fireball"),
            outcome: UpgradeOutcome::Failed,
            previous_level: 2,
            new_level: 2,
            gold_spent: 200,
            shards_spent: 20,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: UpgradeResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}
