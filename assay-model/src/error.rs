use crate::kind::Kind;

/// Reasons the comparison engine refuses to produce a verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// The operands have different underlying kinds.
    #[error("elements should be the same kind, got {left} and {right}")]
    KindMismatch { left: Kind, right: Kind },
    /// The operands share a kind that has no order, or a float is NaN.
    #[error("can not compare type \"{type_name}\"")]
    Unorderable { type_name: &'static str },
}

/// Result of a comparison that may have no verdict.
pub type Result<T> = std::result::Result<T, CompareError>;
