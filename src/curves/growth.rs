//! Per-card growth curves.
//!
//! A `CardCurve` overrides the legacy linear stat formulas for one
//! card. It carries a continuous growth curve and a base-increase
//! scalar per stat, plus a sparse schedule of level-gated special
//! effects.
//!
//! Curves are plain data: an ordered list of `(level, value)` control
//! points evaluated by clamped linear interpolation. There is no
//! executable curve asset behind them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rarity::CurveError;
use crate::cards::{CardId, CardKind};

/// Opaque identifier for a special effect.
///
/// The progression system does not interpret effects; combat assigns
/// meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub String);

impl EffectId {
    /// Create a new effect ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EffectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Continuous level-to-multiplier curve.
///
/// Stored as ordered `(level, value)` control points. Evaluation clamps
/// below the first point and above the last, and interpolates linearly
/// in between.
///
/// ## Example
///
/// ```
/// use card_forge::curves::GrowthCurve;
///
/// let curve = GrowthCurve::new(vec![(1.0, 0.0), (5.0, 2.0)]).unwrap();
///
/// assert_eq!(curve.eval(1.0), 0.0);
/// assert_eq!(curve.eval(3.0), 1.0);
/// assert_eq!(curve.eval(9.0), 2.0); // clamped past the last point
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    points: Vec<(f64, f64)>,
}

impl GrowthCurve {
    /// Create a curve from control points, sorted by level.
    ///
    /// Fails if no points are given.
    pub fn new(mut points: Vec<(f64, f64)>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::EmptyGrowthCurve);
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { points })
    }

    /// Create a flat curve that evaluates to `value` everywhere.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(1.0, value)],
        }
    }

    /// Evaluate the curve at `x` with clamped linear interpolation.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let first = self.points[0];
        if x <= first.0 {
            return first.1;
        }
        let last = self.points[self.points.len() - 1];
        if x >= last.0 {
            return last.1;
        }

        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                if x1 == x0 {
                    return y1;
                }
                let t = (x - x0) / (x1 - x0);
                return y0 + t * (y1 - y0);
            }
        }

        last.1
    }

    /// The control points, sorted by level.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// Growth settings for one stat: curve multiplier times base increase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatGrowth {
    /// Level-to-multiplier curve.
    pub curve: GrowthCurve,
    /// Scalar the curve value is multiplied by.
    pub base_increase: f64,
}

impl StatGrowth {
    /// Create growth settings for one stat.
    #[must_use]
    pub fn new(curve: GrowthCurve, base_increase: f64) -> Self {
        Self {
            curve,
            base_increase,
        }
    }

    /// No growth: the stat stays at its base value.
    #[must_use]
    pub fn none() -> Self {
        Self {
            curve: GrowthCurve::constant(0.0),
            base_increase: 0.0,
        }
    }
}

impl Default for StatGrowth {
    fn default() -> Self {
        Self::none()
    }
}

/// Per-card override growth curve.
///
/// When attached to a card in the catalog, takes priority over the
/// legacy linear formulas. Designers opt individual cards in without
/// migrating the whole catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardCurve {
    /// The card this curve applies to.
    pub card_id: CardId,

    /// Levels past this are clamped for growth evaluation.
    pub max_level: u32,

    /// Power growth.
    pub power: StatGrowth,

    /// Heal growth.
    pub heal: StatGrowth,

    /// Move distance growth.
    pub move_distance: StatGrowth,

    /// Sparse level-gated special effects. Effects trigger only on an
    /// exact level match; the schedule is not interpolated.
    pub effects: SmallVec<[(u32, EffectId); 4]>,
}

impl CardCurve {
    /// Create a curve with no growth and no effects.
    #[must_use]
    pub fn new(card_id: impl Into<CardId>, max_level: u32) -> Self {
        debug_assert!(max_level >= 1, "max level must be at least 1");
        Self {
            card_id: card_id.into(),
            max_level,
            power: StatGrowth::none(),
            heal: StatGrowth::none(),
            move_distance: StatGrowth::none(),
            effects: SmallVec::new(),
        }
    }

    /// Set power growth (builder pattern).
    #[must_use]
    pub fn with_power_growth(mut self, curve: GrowthCurve, base_increase: f64) -> Self {
        self.power = StatGrowth::new(curve, base_increase);
        self
    }

    /// Set heal growth.
    #[must_use]
    pub fn with_heal_growth(mut self, curve: GrowthCurve, base_increase: f64) -> Self {
        self.heal = StatGrowth::new(curve, base_increase);
        self
    }

    /// Set move distance growth.
    #[must_use]
    pub fn with_move_growth(mut self, curve: GrowthCurve, base_increase: f64) -> Self {
        self.move_distance = StatGrowth::new(curve, base_increase);
        self
    }

    /// Schedule a special effect at an exact level.
    #[must_use]
    pub fn with_effect(mut self, level: u32, effect: impl Into<EffectId>) -> Self {
        self.effects.push((level, effect.into()));
        self
    }

    /// Stat increase over base at `level`, for the stat `kind` reads.
    ///
    /// The level is clamped to `[1, max_level]`; at level 1 the
    /// increase is always 0.
    #[must_use]
    pub fn increase_for(&self, kind: CardKind, level: u32) -> i64 {
        let growth = match kind {
            CardKind::Attack | CardKind::Special => &self.power,
            CardKind::Heal => &self.heal,
            CardKind::Move => &self.move_distance,
        };
        self.increase(growth, level)
    }

    /// Power increase over base at `level`.
    #[must_use]
    pub fn power_increase(&self, level: u32) -> i64 {
        self.increase(&self.power, level)
    }

    /// Heal increase over base at `level`.
    #[must_use]
    pub fn heal_increase(&self, level: u32) -> i64 {
        self.increase(&self.heal, level)
    }

    /// Move distance increase over base at `level`.
    #[must_use]
    pub fn move_increase(&self, level: u32) -> i64 {
        self.increase(&self.move_distance, level)
    }

    fn increase(&self, growth: &StatGrowth, level: u32) -> i64 {
        let clamped = level.clamp(1, self.max_level);
        if clamped <= 1 {
            return 0;
        }
        let multiplier = growth.curve.eval(f64::from(clamped));
        (multiplier * growth.base_increase).round() as i64
    }

    /// The effect unlocked exactly at `level`, if any.
    #[must_use]
    pub fn special_effect(&self, level: u32) -> Option<&EffectId> {
        self.effects
            .iter()
            .find(|(required, _)| *required == level)
            .map(|(_, effect)| effect)
    }
}
