//! Configuration models.

pub mod report;

pub use report::{FailureMode, ReportConfig, ReportConfigSource};
