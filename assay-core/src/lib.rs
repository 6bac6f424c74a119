//! Ordered-comparison assertions for Rust tests.
//!
//! Values are lifted into [`Value`]s through [`ToValue`], compared by the
//! kind-checked engine in [`compare`], and failures are rendered as labeled
//! reports (`Error Trace`, `Error`, `Test`, `Messages`) for a [`TestingT`]
//! sink.
//!
//! ```
//! use assay_core::{Assertions, RecordingT};
//!
//! let sink = RecordingT::new();
//! let check = Assertions::new(&sink).with_on_failure(|_| {});
//!
//! assert!(check.greater(2, 1));
//! assert!(!check.is_increasing([1, 3, 2]));
//! assert!(sink.output().contains("\"3\" is not less than \"2\""));
//! ```

pub mod assertions;
pub mod compare;
mod comparisons;
mod macros;
mod ordering;
pub mod report;
pub mod sink;

pub use assay_config::{FailureMode, ReportConfig};
pub use assay_contracts::{TestingT, ToValue, impl_to_value};
pub use assay_model::{CompareError, CompareType, Datum, Kind, Value};

pub use assertions::Assertions;
pub use compare::{compare, contains_value};
pub use report::truncating_format;
pub use sink::{PanicT, RecordingT};
