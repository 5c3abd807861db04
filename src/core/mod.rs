//! Core support types shared across the progression system.

pub mod rng;

pub use rng::{UpgradeRng, UpgradeRngState};
