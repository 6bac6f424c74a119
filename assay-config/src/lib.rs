//! Shared configuration library for assay.
//!
//! Centralizes how assertion reports are tuned (failure mode, value
//! truncation, test-name labels), where those settings come from (env vars,
//! TOML or JSON files) and how test binaries turn on `tracing` output.

pub mod logging;
pub mod models;
pub mod util;
pub mod validation;

pub use models::report::{
    DEFAULT_TRUNCATE_LIMIT, FailureMode, ReportConfig, ReportConfigSource,
};
pub use validation::ConfigGuardRailError;
