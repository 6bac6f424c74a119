//! Ready-made [`TestingT`] sinks.

use assay_contracts::TestingT;
use parking_lot::Mutex;

/// Sink that panics with the rendered report, failing a plain `#[test]`.
#[derive(Debug, Clone, Default)]
pub struct PanicT {
    name: Option<String>,
}

impl PanicT {
    /// Anonymous sink; reports carry no `Test` label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that reports `name` under the `Test` label.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl TestingT for PanicT {
    fn error(&self, message: &str) {
        panic!("{message}");
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[derive(Debug, Default)]
struct Recorded {
    messages: Vec<String>,
    fail_now_calls: usize,
}

/// Sink that buffers every rendered report instead of failing.
///
/// `fail_now` only counts its calls, so a test can inspect what an assertion
/// reported and whether it asked to stop.
#[derive(Debug, Default)]
pub struct RecordingT {
    name: Option<String>,
    state: Mutex<Recorded>,
}

impl RecordingT {
    /// Empty, anonymous sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty sink that reports `name` under the `Test` label.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            state: Mutex::default(),
        }
    }

    /// Every report received so far, concatenated.
    pub fn output(&self) -> String {
        self.state.lock().messages.concat()
    }

    /// Every report received so far, one entry per failure.
    pub fn messages(&self) -> Vec<String> {
        self.state.lock().messages.clone()
    }

    /// Whether any report was received.
    pub fn failed(&self) -> bool {
        !self.state.lock().messages.is_empty()
    }

    /// How often an assertion asked to stop the test.
    pub fn fail_now_calls(&self) -> usize {
        self.state.lock().fail_now_calls
    }

    /// Forget recorded reports and `fail_now` calls.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.messages.clear();
        state.fail_now_calls = 0;
    }
}

impl TestingT for RecordingT {
    fn error(&self, message: &str) {
        self.state.lock().messages.push(message.to_owned());
    }

    fn fail_now(&self) {
        self.state.lock().fail_now_calls += 1;
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn recording_sink_collects_reports() {
        let sink = RecordingT::named("sink::tests");
        assert!(!sink.failed());

        sink.error("first");
        sink.error("second");
        sink.fail_now();

        assert!(sink.failed());
        assert_eq!(sink.output(), "firstsecond");
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.fail_now_calls(), 1);
        assert_eq!(sink.name().as_deref(), Some("sink::tests"));

        sink.clear();
        assert!(!sink.failed());
        assert_eq!(sink.fail_now_calls(), 0);
    }

    #[test]
    fn recording_sink_is_shared_across_threads() {
        let sink = Arc::new(RecordingT::new());
        let handles: Vec<_> = (0..4)
            .map(|idx| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || sink.error(&format!("report {idx}")))
            })
            .collect();
        for handle in handles {
            handle.join().expect("reporter thread");
        }
        assert_eq!(sink.messages().len(), 4);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panic_sink_panics_with_report() {
        PanicT::new().error("boom");
    }
}
