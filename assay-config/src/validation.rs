//! Guard rails applied after a configuration is loaded.

use thiserror::Error;

use crate::models::report::ReportConfig;

/// Settings that load fine but would make reports useless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigGuardRailError {
    /// Every rendered value would be cut down to the suffix alone.
    #[error("truncate_limit must be greater than zero")]
    ZeroTruncateLimit,
}

impl ReportConfig {
    /// Reject settings that can not produce a readable report.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self.truncate_limit == 0 {
            return Err(ConfigGuardRailError::ZeroTruncateLimit);
        }
        Ok(())
    }
}
