use std::fmt;

/// Underlying kind of a lifted value.
///
/// Two values are only ever compared when their kinds match exactly, so an
/// `i32` never meets an `i64` and an `f32` never meets an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum Kind {
    Isize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Usize,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    String,
    Bytes,
    Time,
    Duration,
    /// Anything without a defined order (booleans, chars, structs).
    Unordered,
}

impl Kind {
    /// Whether values of this kind can produce an ordering verdict.
    pub const fn is_orderable(self) -> bool {
        !matches!(self, Kind::Unordered)
    }

    /// Stable lowercase label used in diagnostics and config files.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Isize => "isize",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Usize => "usize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Time => "time",
            Kind::Duration => "duration",
            Kind::Unordered => "unordered",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
