//! Upgrade curves: per-rarity tables and per-card growth overrides.
//!
//! ## Key Types
//!
//! - `RarityCurve`: Level-indexed cost/success/multiplier tables
//! - `RarityCurveTable`: Rarity lookup with a default fallback
//! - `GrowthCurve`: Control-point curve with linear interpolation
//! - `CardCurve`: Per-card override growth and effect schedule
//! - `CurveError`: Load-time validation failures

pub mod growth;
pub mod rarity;

pub use growth::{CardCurve, EffectId, GrowthCurve, StatGrowth};
pub use rarity::{CurveError, RarityCurve, RarityCurveTable};
