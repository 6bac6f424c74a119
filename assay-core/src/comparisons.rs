use assay_contracts::{TestingT, ToValue};
use assay_model::CompareType::{Equal, Greater, Less};

use crate::assertions::Assertions;

impl<T: TestingT + ?Sized> Assertions<'_, T> {
    /// Asserts that the first element is greater than the second.
    ///
    /// ```
    /// # use assay_core::{Assertions, RecordingT};
    /// # let sink = RecordingT::new();
    /// # let check = Assertions::new(&sink).with_on_failure(|_| {});
    /// assert!(check.greater(2, 1));
    /// assert!(check.greater(2.0f32, 1.0f32));
    /// assert!(check.greater("b", "a"));
    /// ```
    #[track_caller]
    pub fn greater(&self, e1: impl ToValue, e2: impl ToValue) -> bool {
        self.compare_two_values(
            &e1.to_value(),
            &e2.to_value(),
            &[Greater],
            |a, b| format!("\"{a}\" is not greater than \"{b}\""),
        )
    }

    /// Asserts that the first element is greater than or equal to the second.
    #[track_caller]
    pub fn greater_or_equal(&self, e1: impl ToValue, e2: impl ToValue) -> bool {
        self.compare_two_values(
            &e1.to_value(),
            &e2.to_value(),
            &[Greater, Equal],
            |a, b| format!("\"{a}\" is not greater than or equal to \"{b}\""),
        )
    }

    /// Asserts that the first element is less than the second.
    #[track_caller]
    pub fn less(&self, e1: impl ToValue, e2: impl ToValue) -> bool {
        self.compare_two_values(
            &e1.to_value(),
            &e2.to_value(),
            &[Less],
            |a, b| format!("\"{a}\" is not less than \"{b}\""),
        )
    }

    /// Asserts that the first element is less than or equal to the second.
    #[track_caller]
    pub fn less_or_equal(&self, e1: impl ToValue, e2: impl ToValue) -> bool {
        self.compare_two_values(
            &e1.to_value(),
            &e2.to_value(),
            &[Less, Equal],
            |a, b| format!("\"{a}\" is not less than or equal to \"{b}\""),
        )
    }

    /// Asserts that the element is strictly above the zero value of its kind.
    /// An empty string or byte sequence is never positive.
    #[track_caller]
    pub fn positive(&self, e: impl ToValue) -> bool {
        let value = e.to_value();
        match value.zero_like() {
            Some(zero) => {
                self.compare_two_values(&value, &zero, &[Greater], |a, _| {
                    format!("\"{a}\" is not positive")
                })
            }
            None => self.fail(format!(
                "Can not compare type \"{}\"",
                value.type_name()
            )),
        }
    }

    /// Asserts that the element is strictly below the zero value of its kind.
    #[track_caller]
    pub fn negative(&self, e: impl ToValue) -> bool {
        let value = e.to_value();
        match value.zero_like() {
            Some(zero) => {
                self.compare_two_values(&value, &zero, &[Less], |a, _| {
                    format!("\"{a}\" is not negative")
                })
            }
            None => self.fail(format!(
                "Can not compare type \"{}\"",
                value.type_name()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Assertions, RecordingT};

    #[test]
    fn greater_and_less_are_strict() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});

        assert!(check.greater(2, 1));
        assert!(!check.greater(1, 1));
        assert!(check.greater_or_equal(1, 1));
        assert!(check.less(1, 2));
        assert!(!check.less(2, 2));
        assert!(check.less_or_equal(2, 2));
        assert_eq!(sink.messages().len(), 2);
    }

    #[test]
    fn positive_and_negative_exclude_zero() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});

        assert!(check.positive(1i8));
        assert!(check.positive(1.23f64));
        assert!(!check.positive(0));
        assert!(!check.positive(-1.23f32));
        assert!(check.negative(-1i64));
        assert!(!check.negative(0u32));
        assert!(!check.negative(1.23f32));

        let messages = sink.messages();
        assert!(messages[0].contains("\"0\" is not positive"));
        assert!(messages[1].contains("\"-1.23\" is not positive"));
        assert!(messages[2].contains("\"0\" is not negative"));
        assert!(messages[3].contains("\"1.23\" is not negative"));
    }

    #[test]
    fn positive_checks_strings_against_empty() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        assert!(check.positive("a"));
        assert!(!check.positive(""));
        assert!(!check.negative("a"));
    }

    #[test]
    fn positive_rejects_unordered_kinds() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        assert!(!check.positive(true));
        assert!(!check.negative('x'));
        let messages = sink.messages();
        assert!(messages[0].contains("Can not compare type \"bool\""));
        assert!(messages[1].contains("Can not compare type \"char\""));
    }
}
