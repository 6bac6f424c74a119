//! Assertion macros over [`Assertions`](crate::Assertions).
//!
//! Each macro takes the sink first, then the operands, then optional
//! `format!` arguments forwarded under the `Messages` label. All of them
//! evaluate to the assertion's `bool` and report through the configured
//! failure mode.

/// Asserts that the first element is greater than the second.
///
/// ```
/// # use assay_core::*;
/// let sink = PanicT::new();
/// assert_greater!(sink, 2, 1);
/// assert_greater!(sink, "b", "a", "checking {}", "strings");
/// ```
#[macro_export]
macro_rules! assert_greater {
    ($t:expr, $e1:expr, $e2:expr $(,)?) => {
        $crate::Assertions::new(&$t).greater($e1, $e2)
    };
    ($t:expr, $e1:expr, $e2:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .greater($e1, $e2)
    };
}

/// Asserts that the first element is greater than or equal to the second.
#[macro_export]
macro_rules! assert_greater_or_equal {
    ($t:expr, $e1:expr, $e2:expr $(,)?) => {
        $crate::Assertions::new(&$t).greater_or_equal($e1, $e2)
    };
    ($t:expr, $e1:expr, $e2:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .greater_or_equal($e1, $e2)
    };
}

/// Asserts that the first element is less than the second.
#[macro_export]
macro_rules! assert_less {
    ($t:expr, $e1:expr, $e2:expr $(,)?) => {
        $crate::Assertions::new(&$t).less($e1, $e2)
    };
    ($t:expr, $e1:expr, $e2:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .less($e1, $e2)
    };
}

/// Asserts that the first element is less than or equal to the second.
#[macro_export]
macro_rules! assert_less_or_equal {
    ($t:expr, $e1:expr, $e2:expr $(,)?) => {
        $crate::Assertions::new(&$t).less_or_equal($e1, $e2)
    };
    ($t:expr, $e1:expr, $e2:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .less_or_equal($e1, $e2)
    };
}

/// Asserts that the element is positive.
#[macro_export]
macro_rules! assert_positive {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).positive($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .positive($e)
    };
}

/// Asserts that the element is negative.
#[macro_export]
macro_rules! assert_negative {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).negative($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .negative($e)
    };
}

/// Asserts that the elements are strictly increasing.
///
/// ```
/// # use assay_core::*;
/// let sink = PanicT::new();
/// assert_increasing!(sink, [1, 2, 3]);
/// assert_increasing!(sink, vec![1.0f64, 2.5], "readings from {}", "probe");
/// ```
#[macro_export]
macro_rules! assert_increasing {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).is_increasing($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .is_increasing($e)
    };
}

/// Asserts that the elements never increase.
#[macro_export]
macro_rules! assert_non_increasing {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).is_non_increasing($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .is_non_increasing($e)
    };
}

/// Asserts that the elements are strictly decreasing.
#[macro_export]
macro_rules! assert_decreasing {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).is_decreasing($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .is_decreasing($e)
    };
}

/// Asserts that the elements never decrease.
#[macro_export]
macro_rules! assert_non_decreasing {
    ($t:expr, $e:expr $(,)?) => {
        $crate::Assertions::new(&$t).is_non_decreasing($e)
    };
    ($t:expr, $e:expr, $($arg:tt)+) => {
        $crate::Assertions::new(&$t)
            .with_message(::std::format!($($arg)+))
            .is_non_decreasing($e)
    };
}
