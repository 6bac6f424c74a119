//! Lifting Rust values into [`Value`].

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use assay_model::chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use assay_model::{Datum, Value};

/// Lift a Rust value into the comparison model.
///
/// Orderable kinds are the primitive integers and floats, strings, byte
/// sequences, instants and durations. Everything else lifts to an unordered
/// value that the engine rejects with a diagnostic instead of a verdict.
pub trait ToValue {
    /// Snapshot of `self` as a [`Value`].
    fn to_value(&self) -> Value;
}

macro_rules! impl_copy_datum {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::of::<$ty>(Datum::$variant(*self))
                }
            }
        )*
    };
}

impl_copy_datum!(
    isize => Isize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    usize => Usize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    f32 => F32,
    f64 => F64,
    Duration => Duration,
);

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::of::<str>(Datum::String(self.to_owned()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::of::<String>(Datum::String(self.clone()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::of::<Self>(Datum::String(self.as_ref().to_owned()))
    }
}

impl ToValue for [u8] {
    fn to_value(&self) -> Value {
        Value::of::<[u8]>(Datum::Bytes(self.to_vec()))
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::of::<Vec<u8>>(Datum::Bytes(self.clone()))
    }
}

impl<const N: usize> ToValue for [u8; N] {
    fn to_value(&self) -> Value {
        Value::of::<[u8; N]>(Datum::Bytes(self.to_vec()))
    }
}

impl ToValue for Cow<'_, [u8]> {
    fn to_value(&self) -> Value {
        Value::of::<Self>(Datum::Bytes(self.as_ref().to_vec()))
    }
}

impl<Tz: TimeZone> ToValue for DateTime<Tz> {
    fn to_value(&self) -> Value {
        Value::of::<Self>(Datum::Time(self.with_timezone(&Utc)))
    }
}

/// Naive timestamps are read as UTC.
impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::of::<NaiveDateTime>(Datum::Time(self.and_utc()))
    }
}

/// Instants outside the calendar range lift as unordered values.
impl ToValue for SystemTime {
    fn to_value(&self) -> Value {
        match system_time_to_utc(*self) {
            Some(instant) => Value::of::<SystemTime>(Datum::Time(instant)),
            None => Value::unordered::<SystemTime>(format!("{self:?}")),
        }
    }
}

fn system_time_to_utc(time: SystemTime) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => {
            (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())
        }
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, 1_000_000_000 - nanos),
            }
        }
    };
    DateTime::from_timestamp(secs, nanos)
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::unordered::<bool>(self.to_string())
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::unordered::<char>(self.to_string())
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::unordered::<()>("()")
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
