//! Rarity curves - per-rarity upgrade tables.
//!
//! A `RarityCurve` holds the level-indexed tables shared by every card
//! of one rarity: value multiplier, gold cost, shard cost, and success
//! rate. Tables are validated to exact lengths at construction; there
//! is no silent clamping to the last entry afterwards.
//!
//! ## Boundary rules
//!
//! Costs and success rate describe the transition *out of* a level, so
//! they are zero/undefined at `level >= max_level` (there is no level
//! to leave the top for). The value multiplier is a value *at* a
//! level, so it is defined through `max_level` inclusive.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Rarity;

/// Errors raised while loading curve data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CurveError {
    /// `max_level` must allow at least one level.
    #[error("max level must be at least 1, got {0}")]
    InvalidMaxLevel(u32),

    /// A level-indexed table has the wrong number of entries.
    #[error("{table} table for {rarity:?} has {got} entries, expected {expected}")]
    WrongTableLength {
        table: &'static str,
        rarity: Rarity,
        got: usize,
        expected: usize,
    },

    /// A success rate is outside `[0.0, 1.0]`.
    #[error("success rate {rate} for level {level} is outside [0.0, 1.0]")]
    SuccessRateOutOfRange { level: u32, rate: f64 },

    /// A cost entry is negative.
    #[error("negative {table} cost {value} for level {level}")]
    NegativeCost {
        table: &'static str,
        level: u32,
        value: i64,
    },

    /// A growth curve was given no control points.
    #[error("growth curve has no control points")]
    EmptyGrowthCurve,
}

/// Level-indexed upgrade tables for one rarity tier.
///
/// `value_multiplier` has exactly `max_level` entries (index =
/// level-1). The cost and success tables have exactly `max_level - 1`
/// entries: entry `level-1` describes the upgrade from `level` to
/// `level + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityCurve {
    rarity: Rarity,
    max_level: u32,
    value_multiplier: Vec<f64>,
    gold_cost: Vec<i64>,
    shard_cost: Vec<i64>,
    success_rate: Vec<f64>,
}

impl RarityCurve {
    /// Build a rarity curve, validating table lengths and ranges.
    pub fn new(
        rarity: Rarity,
        max_level: u32,
        value_multiplier: Vec<f64>,
        gold_cost: Vec<i64>,
        shard_cost: Vec<i64>,
        success_rate: Vec<f64>,
    ) -> Result<Self, CurveError> {
        if max_level == 0 {
            return Err(CurveError::InvalidMaxLevel(max_level));
        }

        let at_levels = max_level as usize;
        let transitions = at_levels - 1;

        if value_multiplier.len() != at_levels {
            return Err(CurveError::WrongTableLength {
                table: "value multiplier",
                rarity,
                got: value_multiplier.len(),
                expected: at_levels,
            });
        }
        for (table, costs) in [("gold", &gold_cost), ("shard", &shard_cost)] {
            if costs.len() != transitions {
                return Err(CurveError::WrongTableLength {
                    table,
                    rarity,
                    got: costs.len(),
                    expected: transitions,
                });
            }
            for (i, &value) in costs.iter().enumerate() {
                if value < 0 {
                    return Err(CurveError::NegativeCost {
                        table,
                        level: i as u32 + 1,
                        value,
                    });
                }
            }
        }
        if success_rate.len() != transitions {
            return Err(CurveError::WrongTableLength {
                table: "success rate",
                rarity,
                got: success_rate.len(),
                expected: transitions,
            });
        }
        for (i, &rate) in success_rate.iter().enumerate() {
            if !(0.0..=1.0).contains(&rate) {
                return Err(CurveError::SuccessRateOutOfRange {
                    level: i as u32 + 1,
                    rate,
                });
            }
        }

        Ok(Self {
            rarity,
            max_level,
            value_multiplier,
            gold_cost,
            shard_cost,
            success_rate,
        })
    }

    /// The rarity this curve applies to.
    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Highest reachable level for this rarity.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Value multiplier at `level`. Out-of-range levels (0 or past
    /// `max_level`) default to `1.0`.
    #[must_use]
    pub fn value_multiplier(&self, level: u32) -> f64 {
        if level == 0 || level > self.max_level {
            return 1.0;
        }
        self.value_multiplier[(level - 1) as usize]
    }

    /// Gold required to upgrade out of `level`. Zero at or past
    /// `max_level` - there is no transition to pay for.
    #[must_use]
    pub fn required_gold(&self, level: u32) -> i64 {
        if level == 0 || level >= self.max_level {
            return 0;
        }
        self.gold_cost[(level - 1) as usize]
    }

    /// Shards required to upgrade out of `level`. Same boundary rule
    /// as gold.
    #[must_use]
    pub fn required_shards(&self, level: u32) -> i64 {
        if level == 0 || level >= self.max_level {
            return 0;
        }
        self.shard_cost[(level - 1) as usize]
    }

    /// Probability the upgrade out of `level` succeeds. Zero at or
    /// past `max_level`.
    #[must_use]
    pub fn success_rate(&self, level: u32) -> f64 {
        if level == 0 || level >= self.max_level {
            return 0.0;
        }
        self.success_rate[(level - 1) as usize]
    }

    /// Whether `level` is at (or past) the top of this curve.
    #[must_use]
    pub fn is_max_level(&self, level: u32) -> bool {
        level >= self.max_level
    }
}

/// Mapping from rarity to its curve, with an optional default.
///
/// Lookup is total when a default is set: a rarity with no registered
/// curve resolves to the default via an explicit `.or(default)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RarityCurveTable {
    curves: FxHashMap<Rarity, RarityCurve>,
    default: Option<RarityCurve>,
}

impl RarityCurveTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the curve for its rarity, replacing any previous one.
    pub fn insert(&mut self, curve: RarityCurve) {
        self.curves.insert(curve.rarity(), curve);
    }

    /// Set the fallback curve for rarities with no registered entry.
    #[must_use]
    pub fn with_default(mut self, curve: RarityCurve) -> Self {
        self.default = Some(curve);
        self
    }

    /// Resolve the curve for `rarity`, falling back to the default.
    #[must_use]
    pub fn curve_for(&self, rarity: Rarity) -> Option<&RarityCurve> {
        self.curves.get(&rarity).or(self.default.as_ref())
    }

    /// Number of registered curves (the default not included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Check if no curves are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_curve() -> RarityCurve {
        RarityCurve::new(
            Rarity::Normal,
            5,
            vec![1.0, 1.2, 1.4, 1.6, 2.0],
            vec![100, 200, 400, 800],
            vec![10, 20, 40, 80],
            vec![1.0, 0.9, 0.7, 0.5],
        )
        .unwrap()
    }

    #[test]
    fn test_value_multiplier_bounds() {
        let curve = normal_curve();

        assert_eq!(curve.value_multiplier(0), 1.0);
        assert_eq!(curve.value_multiplier(1), 1.0);
        assert_eq!(curve.value_multiplier(3), 1.4);
        assert_eq!(curve.value_multiplier(5), 2.0);
        assert_eq!(curve.value_multiplier(6), 1.0);
    }

    #[test]
    fn test_costs_zero_at_max_level() {
        let curve = normal_curve();

        assert_eq!(curve.required_gold(1), 100);
        assert_eq!(curve.required_gold(4), 800);
        assert_eq!(curve.required_gold(5), 0);
        assert_eq!(curve.required_gold(0), 0);

        assert_eq!(curve.required_shards(1), 10);
        assert_eq!(curve.required_shards(5), 0);
    }

    #[test]
    fn test_success_rate_bounds() {
        let curve = normal_curve();

        assert_eq!(curve.success_rate(0), 0.0);
        assert_eq!(curve.success_rate(1), 1.0);
        assert_eq!(curve.success_rate(4), 0.5);
        assert_eq!(curve.success_rate(5), 0.0);
    }

    #[test]
    fn test_is_max_level() {
        let curve = normal_curve();

        assert!(!curve.is_max_level(4));
        assert!(curve.is_max_level(5));
        assert!(curve.is_max_level(6));
    }

    #[test]
    fn test_wrong_table_length_rejected() {
        let err = RarityCurve::new(
            Rarity::Normal,
            5,
            vec![1.0, 1.2, 1.4, 1.6, 2.0],
            vec![100, 200, 400], // one short
            vec![10, 20, 40, 80],
            vec![1.0, 0.9, 0.7, 0.5],
        )
        .unwrap_err();

        assert_eq!(
            err,
            CurveError::WrongTableLength {
                table: "gold",
                rarity: Rarity::Normal,
                got: 3,
                expected: 4,
            }
        );
    }

    #[test]
    fn test_success_rate_out_of_range_rejected() {
        let err = RarityCurve::new(
            Rarity::Normal,
            3,
            vec![1.0, 1.2, 1.4],
            vec![100, 200],
            vec![10, 20],
            vec![1.0, 1.5],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CurveError::SuccessRateOutOfRange { level: 2, .. }
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = RarityCurve::new(
            Rarity::Normal,
            3,
            vec![1.0, 1.2, 1.4],
            vec![100, -200],
            vec![10, 20],
            vec![1.0, 0.9],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CurveError::NegativeCost {
                table: "gold",
                level: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_max_level_rejected() {
        let err = RarityCurve::new(Rarity::Normal, 0, vec![], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err, CurveError::InvalidMaxLevel(0));
    }

    #[test]
    fn test_table_fallback_to_default() {
        let mut table = RarityCurveTable::new().with_default(normal_curve());
        assert_eq!(table.curve_for(Rarity::Epic).unwrap().rarity(), Rarity::Normal);

        let epic = RarityCurve::new(
            Rarity::Epic,
            3,
            vec![1.0, 1.5, 2.0],
            vec![500, 1000],
            vec![50, 100],
            vec![0.8, 0.6],
        )
        .unwrap();
        table.insert(epic);

        assert_eq!(table.curve_for(Rarity::Epic).unwrap().rarity(), Rarity::Epic);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_without_default_misses() {
        let table = RarityCurveTable::new();
        assert!(table.curve_for(Rarity::Legendary).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_curve_serialization() {
        let curve = normal_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let deserialized: RarityCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, deserialized);
    }
}
