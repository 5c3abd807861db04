//! Upgrade service configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the upgrade subsystem.
///
/// Carries the feature kill-switch used for staged rollout. The flag
/// is read on every call, so flipping it takes effect immediately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeConfig {
    enabled: bool,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl UpgradeConfig {
    /// Create a configuration with upgrades enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with upgrades disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Set the feature flag (builder pattern).
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Flip the feature flag at runtime.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the upgrade subsystem is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        assert!(UpgradeConfig::new().is_enabled());
        assert!(!UpgradeConfig::disabled().is_enabled());
    }

    #[test]
    fn test_toggle() {
        let mut config = UpgradeConfig::new().with_enabled(false);
        assert!(!config.is_enabled());

        config.set_enabled(true);
        assert!(config.is_enabled());
    }
}
