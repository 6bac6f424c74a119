use assay_contracts::{TestingT, ToValue};
use assay_model::CompareType::{self, Equal, Greater, Less};

use crate::assertions::{Assertions, FailMessage};
use crate::compare::{compare, contains_value};

impl<T: TestingT + ?Sized> Assertions<'_, T> {
    /// Walks consecutive pairs and fails on the first one whose verdict is
    /// not in `allowed`.
    #[track_caller]
    fn is_ordered<I>(
        &self,
        elements: I,
        allowed: &[CompareType],
        fail_message: FailMessage,
    ) -> bool
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        let mut elements = elements.into_iter();
        let Some(first) = elements.next() else {
            return true;
        };

        let mut prev = first.to_value();
        for element in elements {
            let next = element.to_value();
            match compare(&prev, &next) {
                Ok(verdict) if contains_value(allowed, verdict) => {}
                Ok(_) => {
                    return self.fail(fail_message(
                        &self.render(&prev),
                        &self.render(&next),
                    ));
                }
                Err(_) => {
                    return self.fail(format!(
                        "Can not compare type \"{}\" and \"{}\"",
                        next.type_name(),
                        prev.type_name()
                    ));
                }
            }
            prev = next;
        }
        true
    }

    /// Asserts that every element is strictly greater than the one before.
    ///
    /// ```
    /// # use assay_core::{Assertions, RecordingT};
    /// # let sink = RecordingT::new();
    /// # let check = Assertions::new(&sink).with_on_failure(|_| {});
    /// assert!(check.is_increasing([1, 2]));
    /// assert!(check.is_increasing(vec![1.0f32, 2.0]));
    /// assert!(!check.is_increasing([1, 1]));
    /// ```
    #[track_caller]
    pub fn is_increasing<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.is_ordered(elements, &[Less], |prev, next| {
            format!("\"{prev}\" is not less than \"{next}\"")
        })
    }

    /// Asserts that no element is greater than the one before.
    #[track_caller]
    pub fn is_non_increasing<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.is_ordered(elements, &[Equal, Greater], |prev, next| {
            format!("\"{prev}\" is not greater than or equal to \"{next}\"")
        })
    }

    /// Asserts that every element is strictly less than the one before.
    #[track_caller]
    pub fn is_decreasing<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.is_ordered(elements, &[Greater], |prev, next| {
            format!("\"{prev}\" is not greater than \"{next}\"")
        })
    }

    /// Asserts that no element is less than the one before.
    #[track_caller]
    pub fn is_non_decreasing<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.is_ordered(elements, &[Less, Equal], |prev, next| {
            format!("\"{prev}\" is not less than or equal to \"{next}\"")
        })
    }
}
