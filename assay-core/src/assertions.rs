//! The assertion facade and its failure path.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use assay_config::{FailureMode, ReportConfig};
use assay_contracts::TestingT;
use assay_model::{CompareError, CompareType, Value};

use crate::compare::{compare, contains_value};
use crate::report::{Failure, truncating_format};

/// Builds the failure text from the two rendered operands.
pub(crate) type FailMessage = fn(&str, &str) -> String;

type OnFailure<'t, T> = Arc<dyn Fn(&T) + 't>;

/// Assertion facade bound to one [`TestingT`] sink.
///
/// Every assertion returns `true` when its condition holds. On failure it
/// sends a labeled report to the sink, then runs the `on_failure` hook: by
/// default the configured [`FailureMode`] decides whether
/// [`TestingT::fail_now`] is called.
pub struct Assertions<'t, T: TestingT + ?Sized> {
    t: &'t T,
    on_failure: Option<OnFailure<'t, T>>,
    message: Option<String>,
    config: &'t ReportConfig,
}

impl<'t, T: TestingT + ?Sized> Assertions<'t, T> {
    /// Facade using the process-wide [`ReportConfig::global`] settings.
    pub fn new(t: &'t T) -> Self {
        Self {
            t,
            on_failure: None,
            message: None,
            config: ReportConfig::global(),
        }
    }

    /// Replace what happens after a failure has been reported. A no-op hook
    /// turns every assertion into a soft check.
    pub fn with_on_failure(mut self, on_failure: impl Fn(&T) + 't) -> Self {
        self.on_failure = Some(Arc::new(on_failure));
        self
    }

    /// Facade that forwards `message` under the `Messages` label.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut scoped = self.clone();
        scoped.message = Some(message.into());
        scoped
    }

    /// Use `config` instead of the process-wide settings.
    pub fn with_config(mut self, config: &'t ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Settings this facade reports with.
    pub fn config(&self) -> &ReportConfig {
        self.config
    }

    /// Report a failure and run the `on_failure` hook. Always `false`.
    #[track_caller]
    pub fn fail(&self, failure_message: impl AsRef<str>) -> bool {
        self.report(Location::caller(), failure_message.as_ref());
        self.after_failure();
        false
    }

    /// Report a failure and stop the test through [`TestingT::fail_now`],
    /// whatever the hook or failure mode says. Returns `false` for sinks
    /// whose `fail_now` does not unwind.
    #[track_caller]
    pub fn fail_now(&self, failure_message: impl AsRef<str>) -> bool {
        self.report(Location::caller(), failure_message.as_ref());
        self.t.fail_now();
        false
    }

    fn report(&self, location: &'static Location<'static>, error: &str) {
        let test_name = if self.config.include_test_name {
            self.t.name()
        } else {
            None
        };
        let failure = Failure::new(location, error)
            .with_test_name(test_name)
            .with_messages(self.message.as_deref());
        tracing::debug!(location = %location, error, "assertion failed");
        self.t.error(&failure.render());
    }

    fn after_failure(&self) {
        match &self.on_failure {
            Some(hook) => hook(self.t),
            None => match self.config.failure_mode {
                FailureMode::FailNow => self.t.fail_now(),
                FailureMode::Continue => {}
            },
        }
    }

    /// Display form of a value, cut at the configured truncation limit.
    pub(crate) fn render(&self, value: &Value) -> String {
        truncating_format(&value.to_string(), self.config.truncate_limit)
            .into_owned()
    }

    /// Shared path of the two-operand assertions: the kinds must match, the
    /// kind must be orderable and the verdict must be one of `allowed`.
    #[track_caller]
    pub(crate) fn compare_two_values(
        &self,
        e1: &Value,
        e2: &Value,
        allowed: &[CompareType],
        fail_message: FailMessage,
    ) -> bool {
        match compare(e1, e2) {
            Ok(verdict) if contains_value(allowed, verdict) => true,
            Ok(_) => {
                self.fail(fail_message(&self.render(e1), &self.render(e2)))
            }
            Err(CompareError::KindMismatch { .. }) => {
                self.fail("Elements should be the same type")
            }
            Err(CompareError::Unorderable { type_name }) => {
                self.fail(format!("Can not compare type \"{type_name}\""))
            }
        }
    }
}

impl<T: TestingT + ?Sized> Clone for Assertions<'_, T> {
    fn clone(&self) -> Self {
        Self {
            t: self.t,
            on_failure: self.on_failure.clone(),
            message: self.message.clone(),
            config: self.config,
        }
    }
}

impl<T: TestingT + ?Sized> fmt::Debug for Assertions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertions")
            .field("custom_on_failure", &self.on_failure.is_some())
            .field("message", &self.message)
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingT;
    use assay_contracts::ToValue;
    use CompareType::{Equal, Greater, Less};

    fn any_verdict() -> [CompareType; 3] {
        [Less, Equal, Greater]
    }

    fn never(_: &str, _: &str) -> String {
        "testFailMessage".to_string()
    }

    #[test]
    fn different_kinds_fail_with_same_type_message() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        let cases = [
            (123i32.to_value(), "abc".to_value()),
            ("abc".to_value(), 123456i32.to_value()),
            (12.0f64.to_value(), "123".to_value()),
            ("float(12)".to_value(), 1.0f64.to_value()),
        ];
        for (v1, v2) in cases {
            assert!(!check.compare_two_values(&v1, &v2, &any_verdict(), never));
        }
        assert_eq!(sink.messages().len(), 4);
        assert!(sink.messages().iter().all(|message| {
            message.contains("Elements should be the same type")
        }));
    }

    #[test]
    fn unorderable_values_fail_with_type_name() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        let value = Value::unordered::<bool>("true");
        let verdicts = any_verdict();
        assert!(!check.compare_two_values(&value, &value, &verdicts, never));
        assert!(sink.output().contains("Can not compare type \"bool\""));
    }

    #[test]
    fn allowed_verdicts_pass() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        let (one, two) = (1i32.to_value(), 2i32.to_value());
        let cases: [(&Value, &Value, &[CompareType]); 6] = [
            (&one, &two, &[Less]),
            (&one, &two, &[Less, Equal]),
            (&two, &two, &[Greater, Equal]),
            (&two, &two, &[Equal]),
            (&two, &one, &[Equal, Greater]),
            (&two, &one, &[Greater]),
        ];
        for (v1, v2, allowed) in cases {
            assert!(check.compare_two_values(v1, v2, allowed, never));
        }
        assert!(!sink.failed());
    }

    #[test]
    fn default_hook_follows_failure_mode() {
        let sink = RecordingT::new();
        let strict = ReportConfig::default();
        assert!(!Assertions::new(&sink).with_config(&strict).fail("boom"));
        assert_eq!(sink.fail_now_calls(), 1);

        let relaxed = ReportConfig {
            failure_mode: FailureMode::Continue,
            ..ReportConfig::default()
        };
        assert!(!Assertions::new(&sink).with_config(&relaxed).fail("boom"));
        assert_eq!(sink.fail_now_calls(), 1);
        assert_eq!(sink.messages().len(), 2);
    }

    #[test]
    fn custom_hook_replaces_failure_mode() {
        let sink = RecordingT::new();
        let hook_calls = std::cell::Cell::new(0);
        let check = Assertions::new(&sink).with_on_failure(|_| {
            hook_calls.set(hook_calls.get() + 1);
        });
        check.fail("first");
        check.with_message("scoped").fail("second");
        assert_eq!(hook_calls.get(), 2);
        assert_eq!(sink.fail_now_calls(), 0);
    }

    #[test]
    fn fail_now_always_stops() {
        let sink = RecordingT::new();
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        assert!(!check.fail_now("failed"));
        assert_eq!(sink.fail_now_calls(), 1);
        assert!(sink.output().contains("failed"));
    }

    #[test]
    fn test_name_label_respects_config() {
        let sink = RecordingT::named("ordering::greater");
        let check = Assertions::new(&sink).with_on_failure(|_| {});
        check.fail("boom");
        assert!(sink.output().contains("\tTest:"));

        let sink = RecordingT::named("ordering::greater");
        let hidden = ReportConfig {
            include_test_name: false,
            ..ReportConfig::default()
        };
        let check = Assertions::new(&sink)
            .with_config(&hidden)
            .with_on_failure(|_| {});
        check.fail("boom");
        assert!(!sink.output().contains("\tTest:"));
    }

    #[test]
    fn rendered_values_are_truncated() {
        let sink = RecordingT::new();
        let tight = ReportConfig {
            truncate_limit: 4,
            ..ReportConfig::default()
        };
        let check = Assertions::new(&sink)
            .with_config(&tight)
            .with_on_failure(|_| {});
        let long = "abcdefgh".to_value();
        let longer = "abcdefghi".to_value();
        assert!(!check.compare_two_values(&long, &longer, &[Greater], |a, b| {
            format!("\"{a}\" is not greater than \"{b}\"")
        }));
        assert!(sink.output().contains(
            "\"abcd<... truncated>\" is not greater than \
             \"abcd<... truncated>\""
        ));
    }
}
