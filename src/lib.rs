//! # card-forge
//!
//! Card progression and upgrade economy for a turn-based dungeon
//! crawler.
//!
//! ## Design Principles
//!
//! 1. **Explicit dependencies**: `UpgradeService` is constructed with
//!    its catalog, curve table, and configuration. No globals.
//!
//! 2. **Failures as values**: domain failures (unknown card, missing
//!    curve, insufficient funds) come back as `None` or rejected
//!    results, never panics.
//!
//! 3. **One source of nondeterminism**: the single success roll per
//!    commit comes from an injected seedable RNG, so every commit can
//!    be replayed deterministically.
//!
//! 4. **Curves are data**: growth curves are ordered control points
//!    plus a pure interpolation function, and rarity tables are
//!    validated to exact lengths at load time.
//!
//! ## Modules
//!
//! - `cards`: Definitions, instances, and the catalog
//! - `curves`: Per-rarity upgrade tables and per-card growth overrides
//! - `player`: Card collection, wallet, and the player-data bundle
//! - `upgrade`: Preview/commit service and its result records
//! - `core`: Deterministic RNG

pub mod cards;
pub mod core;
pub mod curves;
pub mod player;
pub mod upgrade;

// Re-export commonly used types
pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance, CardKind, Rarity};

pub use crate::curves::{
    CardCurve, CurveError, EffectId, GrowthCurve, RarityCurve, RarityCurveTable, StatGrowth,
};

pub use crate::player::{PlayerCardCollection, PlayerData, Wallet};

pub use crate::upgrade::{
    RejectReason, UpgradeConfig, UpgradeOutcome, UpgradePreview, UpgradeResult, UpgradeService,
};

pub use crate::core::{UpgradeRng, UpgradeRngState};
