//! The sink assertions report into.

use std::rc::Rc;
use std::sync::Arc;

/// Sink that receives rendered assertion failures.
///
/// Implementations use interior mutability so a single sink can be shared by
/// any number of assertion facades at once.
pub trait TestingT {
    /// Record one rendered failure message.
    fn error(&self, message: &str);

    /// Stop the current test. The default unwinds, which is how a plain
    /// `#[test]` function fails.
    fn fail_now(&self) {
        panic!("test failed");
    }

    /// Name of the running test, shown under the `Test` label when present.
    fn name(&self) -> Option<String> {
        None
    }
}

impl<T: TestingT + ?Sized> TestingT for &T {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn fail_now(&self) {
        (**self).fail_now();
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}

impl<T: TestingT + ?Sized> TestingT for Box<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn fail_now(&self) {
        (**self).fail_now();
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}

impl<T: TestingT + ?Sized> TestingT for Rc<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn fail_now(&self) {
        (**self).fail_now();
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}

impl<T: TestingT + ?Sized> TestingT for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn fail_now(&self) {
        (**self).fail_now();
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}
