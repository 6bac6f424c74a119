use std::any::type_name;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

use crate::kind::Kind;

/// Raw data of a lifted value, one variant per [`Kind`].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Datum {
    Isize(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Time(DateTime<Utc>),
    Duration(Duration),
    /// Values without an order keep only their rendering.
    Unordered(String),
}

impl Datum {
    /// Kind this datum belongs to.
    pub const fn kind(&self) -> Kind {
        match self {
            Datum::Isize(_) => Kind::Isize,
            Datum::I8(_) => Kind::I8,
            Datum::I16(_) => Kind::I16,
            Datum::I32(_) => Kind::I32,
            Datum::I64(_) => Kind::I64,
            Datum::I128(_) => Kind::I128,
            Datum::Usize(_) => Kind::Usize,
            Datum::U8(_) => Kind::U8,
            Datum::U16(_) => Kind::U16,
            Datum::U32(_) => Kind::U32,
            Datum::U64(_) => Kind::U64,
            Datum::U128(_) => Kind::U128,
            Datum::F32(_) => Kind::F32,
            Datum::F64(_) => Kind::F64,
            Datum::String(_) => Kind::String,
            Datum::Bytes(_) => Kind::Bytes,
            Datum::Time(_) => Kind::Time,
            Datum::Duration(_) => Kind::Duration,
            Datum::Unordered(_) => Kind::Unordered,
        }
    }

    /// Zero value of the same kind, `None` for unordered data.
    ///
    /// The zero instant is the start of year one (UTC), the earliest
    /// instant a default calendar timestamp renders as.
    pub fn zero_like(&self) -> Option<Datum> {
        let zero = match self {
            Datum::Isize(_) => Datum::Isize(0),
            Datum::I8(_) => Datum::I8(0),
            Datum::I16(_) => Datum::I16(0),
            Datum::I32(_) => Datum::I32(0),
            Datum::I64(_) => Datum::I64(0),
            Datum::I128(_) => Datum::I128(0),
            Datum::Usize(_) => Datum::Usize(0),
            Datum::U8(_) => Datum::U8(0),
            Datum::U16(_) => Datum::U16(0),
            Datum::U32(_) => Datum::U32(0),
            Datum::U64(_) => Datum::U64(0),
            Datum::U128(_) => Datum::U128(0),
            Datum::F32(_) => Datum::F32(0.0),
            Datum::F64(_) => Datum::F64(0.0),
            Datum::String(_) => Datum::String(String::new()),
            Datum::Bytes(_) => Datum::Bytes(Vec::new()),
            Datum::Time(_) => Datum::Time(zero_instant()?),
            Datum::Duration(_) => Datum::Duration(Duration::ZERO),
            Datum::Unordered(_) => return None,
        };
        Some(zero)
    }
}

/// 0001-01-01T00:00:00Z
pub fn zero_instant() -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Isize(v) => write!(f, "{v}"),
            Datum::I8(v) => write!(f, "{v}"),
            Datum::I16(v) => write!(f, "{v}"),
            Datum::I32(v) => write!(f, "{v}"),
            Datum::I64(v) => write!(f, "{v}"),
            Datum::I128(v) => write!(f, "{v}"),
            Datum::Usize(v) => write!(f, "{v}"),
            Datum::U8(v) => write!(f, "{v}"),
            Datum::U16(v) => write!(f, "{v}"),
            Datum::U32(v) => write!(f, "{v}"),
            Datum::U64(v) => write!(f, "{v}"),
            Datum::U128(v) => write!(f, "{v}"),
            Datum::F32(v) => write!(f, "{v}"),
            Datum::F64(v) => write!(f, "{v}"),
            Datum::String(v) => f.write_str(v),
            Datum::Bytes(bytes) => {
                f.write_str("[")?;
                for (idx, byte) in bytes.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte}")?;
                }
                f.write_str("]")
            }
            Datum::Time(instant) => {
                write!(f, "{}", instant.format("%Y-%m-%d %H:%M:%S"))?;
                // Leap seconds carry nanos past one second.
                let nanos = instant.timestamp_subsec_nanos() % 1_000_000_000;
                if nanos > 0 {
                    let fraction = format!("{nanos:09}");
                    write!(f, ".{}", fraction.trim_end_matches('0'))?;
                }
                f.write_str(" +0000 UTC")
            }
            Datum::Duration(duration) => {
                write!(f, "{}", humantime::format_duration(*duration))
            }
            Datum::Unordered(rendered) => f.write_str(rendered),
        }
    }
}

/// A datum tagged with the name of the Rust type it was lifted from.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    datum: Datum,
    type_name: &'static str,
}

impl Value {
    /// Wrap a datum under an explicit type name.
    pub fn new(datum: Datum, type_name: &'static str) -> Self {
        Self { datum, type_name }
    }

    /// Wrap a datum under the type name of `T`.
    pub fn of<T: ?Sized>(datum: Datum) -> Self {
        Self::new(datum, type_name::<T>())
    }

    /// A value of type `T` that has no order, kept only for diagnostics.
    pub fn unordered<T: ?Sized>(rendered: impl Into<String>) -> Self {
        Self::of::<T>(Datum::Unordered(rendered.into()))
    }

    /// Raw data the engine compares.
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Kind of the wrapped datum.
    pub fn kind(&self) -> Kind {
        self.datum.kind()
    }

    /// Name of the Rust type the value was lifted from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Same datum reported under another type name; used for newtypes.
    pub fn with_type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Zero value of the same kind and type name.
    pub fn zero_like(&self) -> Option<Value> {
        self.datum
            .zero_like()
            .map(|datum| Value::new(datum, self.type_name))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.datum, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn renders_scalars_in_shortest_form() {
        assert_eq!(Value::of::<i32>(Datum::I32(-1)).to_string(), "-1");
        assert_eq!(Value::of::<f32>(Datum::F32(1.23)).to_string(), "1.23");
        assert_eq!(Value::of::<f64>(Datum::F64(2.34)).to_string(), "2.34");
        assert_eq!(Value::of::<f64>(Datum::F64(12.0)).to_string(), "12");
        assert_eq!(
            Value::of::<str>(Datum::String("a".into())).to_string(),
            "a"
        );
    }

    #[test]
    fn renders_bytes_as_space_separated_list() {
        let value = Value::of::<[u8]>(Datum::Bytes(vec![1, 2]));
        assert_eq!(value.to_string(), "[1 2]");
        assert_eq!(Value::of::<[u8]>(Datum::Bytes(vec![])).to_string(), "[]");
    }

    #[test]
    fn renders_time_with_utc_suffix() {
        let zero = zero_instant().expect("year one is representable");
        let value = Value::of::<DateTime<Utc>>(Datum::Time(zero));
        assert_eq!(value.to_string(), "0001-01-01 00:00:00 +0000 UTC");

        let later = zero + TimeDelta::hours(1);
        let value = Value::of::<DateTime<Utc>>(Datum::Time(later));
        assert_eq!(value.to_string(), "0001-01-01 01:00:00 +0000 UTC");
    }

    #[test]
    fn renders_fractions_without_trailing_zeros() {
        let zero = zero_instant().expect("year one is representable");
        let half = Value::of::<DateTime<Utc>>(Datum::Time(
            zero + TimeDelta::milliseconds(500),
        ));
        assert_eq!(half.to_string(), "0001-01-01 00:00:00.5 +0000 UTC");

        let fine = Value::of::<DateTime<Utc>>(Datum::Time(
            zero + TimeDelta::nanoseconds(1_230),
        ));
        assert_eq!(fine.to_string(), "0001-01-01 00:00:00.00000123 +0000 UTC");
    }

    #[test]
    fn renders_duration_in_human_form() {
        let value =
            Value::of::<Duration>(Datum::Duration(Duration::from_secs(3600)));
        assert_eq!(value.to_string(), "1h");
    }

    #[test]
    fn zero_like_keeps_kind_and_type_name() {
        let value = Value::new(Datum::I16(-7), "my::Celsius");
        let zero = value.zero_like().expect("integers have a zero");
        assert_eq!(zero.datum(), &Datum::I16(0));
        assert_eq!(zero.type_name(), "my::Celsius");

        assert!(Value::unordered::<bool>("true").zero_like().is_none());
    }
}
