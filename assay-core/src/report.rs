//! Rendering of assertion failures into labeled, tab-aligned reports.

use std::borrow::Cow;
use std::panic::Location;

/// Suffix appended to rendered values cut at the truncation limit.
pub const TRUNCATED_SUFFIX: &str = "<... truncated>";

/// One labeled section of a failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledContent<'a> {
    /// Label without the trailing colon.
    pub label: &'a str,
    /// Content; may span several lines.
    pub content: Cow<'a, str>,
}

impl<'a> LabeledContent<'a> {
    /// Section `label` holding `content`.
    pub fn new(label: &'a str, content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            label,
            content: content.into(),
        }
    }
}

/// Render sections as
///
/// ```text
/// \tlabel1:   \tcontent1
/// \tlabel2222:\tcontent2 line 1
/// \t          \tcontent2 line 2
/// ```
///
/// Every content column starts at the same offset, sized to the longest
/// label.
pub fn labeled_output(content: &[LabeledContent<'_>]) -> String {
    let longest = content
        .iter()
        .map(|section| section.label.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for section in content {
        output.push('\t');
        output.push_str(section.label);
        output.push(':');
        output.push_str(&" ".repeat(longest - section.label.len()));
        output.push('\t');
        output.push_str(&indent_message_lines(&section.content, longest));
        output.push('\n');
    }
    output
}

/// Indent every line after the first so it lines up under the content
/// column of a label of `longest_label` bytes.
pub fn indent_message_lines(message: &str, longest_label: usize) -> String {
    let padding = " ".repeat(longest_label + 1);
    let mut output = String::with_capacity(message.len());
    for (idx, line) in message.lines().enumerate() {
        if idx != 0 {
            output.push_str("\n\t");
            output.push_str(&padding);
            output.push('\t');
        }
        output.push_str(line);
    }
    output
}

/// Cut `rendered` to at most `limit` bytes (on a char boundary) and mark the
/// cut with [`TRUNCATED_SUFFIX`]. Shorter values pass through untouched.
pub fn truncating_format(rendered: &str, limit: usize) -> Cow<'_, str> {
    if rendered.len() <= limit {
        return Cow::Borrowed(rendered);
    }
    let mut cut = limit;
    while !rendered.is_char_boundary(cut) {
        cut -= 1;
    }
    Cow::Owned(format!("{}{TRUNCATED_SUFFIX}", &rendered[..cut]))
}

/// A single assertion failure, ready to be rendered for a sink.
#[derive(Debug, Clone)]
pub struct Failure<'a> {
    location: &'static Location<'static>,
    error: &'a str,
    test_name: Option<String>,
    messages: Option<&'a str>,
}

impl<'a> Failure<'a> {
    /// Failure at `location` described by `error`.
    pub fn new(
        location: &'static Location<'static>,
        error: &'a str,
    ) -> Self {
        Self {
            location,
            error,
            test_name: None,
            messages: None,
        }
    }

    /// Name shown under the `Test` label, if any.
    pub fn with_test_name(mut self, test_name: Option<String>) -> Self {
        self.test_name = test_name;
        self
    }

    /// Forwarded user message; blank messages are dropped.
    pub fn with_messages(mut self, messages: Option<&'a str>) -> Self {
        self.messages = messages.filter(|message| !message.is_empty());
        self
    }

    /// Text handed to [`TestingT::error`](assay_contracts::TestingT::error):
    /// a leading newline followed by the labeled sections.
    pub fn render(&self) -> String {
        let mut content = vec![
            LabeledContent::new("Error Trace", self.location.to_string()),
            LabeledContent::new("Error", self.error),
        ];
        if let Some(name) = &self.test_name {
            content.push(LabeledContent::new("Test", name.as_str()));
        }
        if let Some(messages) = self.messages {
            content.push(LabeledContent::new("Messages", messages));
        }
        format!("\n{}", labeled_output(&content))
    }
}
