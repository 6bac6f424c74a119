//! Kind-checked ordering of lifted values.

use std::cmp::Ordering;

use assay_model::{CompareError, CompareResult, CompareType, Datum, Value};

/// Order two values of the same kind.
///
/// Each kind compares in its native type, so no width, signedness or float
/// precision conversion ever happens. Byte sequences order lexicographically
/// and instants by their position on the UTC time line.
pub fn compare(left: &Value, right: &Value) -> CompareResult<CompareType> {
    let verdict = order(left, right).map(CompareType::from);
    tracing::trace!(
        left = %left,
        right = %right,
        kind = %left.kind(),
        ?verdict,
        "compared values"
    );
    verdict
}

fn order(left: &Value, right: &Value) -> CompareResult<Ordering> {
    let ordering = match (left.datum(), right.datum()) {
        (Datum::Isize(a), Datum::Isize(b)) => a.cmp(b),
        (Datum::I8(a), Datum::I8(b)) => a.cmp(b),
        (Datum::I16(a), Datum::I16(b)) => a.cmp(b),
        (Datum::I32(a), Datum::I32(b)) => a.cmp(b),
        (Datum::I64(a), Datum::I64(b)) => a.cmp(b),
        (Datum::I128(a), Datum::I128(b)) => a.cmp(b),
        (Datum::Usize(a), Datum::Usize(b)) => a.cmp(b),
        (Datum::U8(a), Datum::U8(b)) => a.cmp(b),
        (Datum::U16(a), Datum::U16(b)) => a.cmp(b),
        (Datum::U32(a), Datum::U32(b)) => a.cmp(b),
        (Datum::U64(a), Datum::U64(b)) => a.cmp(b),
        (Datum::U128(a), Datum::U128(b)) => a.cmp(b),
        // NaN has no verdict.
        (Datum::F32(a), Datum::F32(b)) => {
            a.partial_cmp(b).ok_or_else(|| unorderable(left))?
        }
        (Datum::F64(a), Datum::F64(b)) => {
            a.partial_cmp(b).ok_or_else(|| unorderable(left))?
        }
        (Datum::String(a), Datum::String(b)) => a.cmp(b),
        (Datum::Bytes(a), Datum::Bytes(b)) => a.as_slice().cmp(b.as_slice()),
        (Datum::Time(a), Datum::Time(b)) => a.cmp(b),
        (Datum::Duration(a), Datum::Duration(b)) => a.cmp(b),
        (Datum::Unordered(_), Datum::Unordered(_)) => {
            return Err(unorderable(left));
        }
        // One Rust type may lift to both an ordered and an unordered datum.
        _ if left.type_name() == right.type_name()
            && !(left.kind().is_orderable() && right.kind().is_orderable()) =>
        {
            return Err(unorderable(left));
        }
        _ => {
            return Err(CompareError::KindMismatch {
                left: left.kind(),
                right: right.kind(),
            });
        }
    };
    Ok(ordering)
}

fn unorderable(value: &Value) -> CompareError {
    CompareError::Unorderable {
        type_name: value.type_name(),
    }
}

/// Whether `value` is one of the `allowed` verdicts.
pub fn contains_value(allowed: &[CompareType], value: CompareType) -> bool {
    allowed.contains(&value)
}
