use std::cmp::Ordering;
use std::fmt;

/// Verdict of an ordered comparison between two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(i8)]
pub enum CompareType {
    /// The left operand orders before the right one.
    Less = -1,
    /// Both operands order the same.
    Equal = 0,
    /// The left operand orders after the right one.
    Greater = 1,
}

impl CompareType {
    /// Signed form of the verdict: -1, 0 or 1.
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<Ordering> for CompareType {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => CompareType::Less,
            Ordering::Equal => CompareType::Equal,
            Ordering::Greater => CompareType::Greater,
        }
    }
}

impl From<CompareType> for Ordering {
    fn from(verdict: CompareType) -> Self {
        match verdict {
            CompareType::Less => Ordering::Less,
            CompareType::Equal => Ordering::Equal,
            CompareType::Greater => Ordering::Greater,
        }
    }
}

impl fmt::Display for CompareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompareType::Less => "less",
            CompareType::Equal => "equal",
            CompareType::Greater => "greater",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_form_matches_ordering() {
        assert_eq!(CompareType::Less.as_i8(), -1);
        assert_eq!(CompareType::Equal.as_i8(), 0);
        assert_eq!(CompareType::Greater.as_i8(), 1);

        assert_eq!(CompareType::from(1.cmp(&2)), CompareType::Less);
        assert_eq!(CompareType::from(2.cmp(&2)), CompareType::Equal);
        assert_eq!(Ordering::from(CompareType::Greater), Ordering::Greater);
    }
}
