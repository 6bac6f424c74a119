//! Core value model shared across assay crates.
//!
//! Every value an assertion inspects is first lifted into a [`Value`]: the
//! raw datum of one orderable [`Kind`] plus the name of the Rust type it came
//! from. Comparisons only look at kinds, type names only show up in
//! diagnostics.
#![allow(missing_docs)]

pub use ::chrono;

pub mod compare_type;
pub mod error;
pub mod kind;
pub mod value;

pub use compare_type::CompareType;
pub use error::{CompareError, Result as CompareResult};
pub use kind::Kind;
pub use value::{Datum, Value};
