//! Upgrade economy: preview computation and commit.
//!
//! ## Key Types
//!
//! - `UpgradeService`: The single entry point for previews and commits
//! - `UpgradePreview`: Recomputed-on-demand cost/yield projection
//! - `UpgradeResult`: Record of one commit attempt
//! - `UpgradeOutcome` / `RejectReason`: Value-level failure reporting
//! - `UpgradeConfig`: Feature kill-switch

pub mod config;
pub mod preview;
pub mod service;

pub use config::UpgradeConfig;
pub use preview::{RejectReason, UpgradeOutcome, UpgradePreview, UpgradeResult};
pub use service::UpgradeService;
