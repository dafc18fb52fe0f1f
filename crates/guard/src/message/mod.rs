//! Bound-violation messages
//!
//! [`LimitMessageBuilder`] collects the value under test, its name and
//! whichever bounds were checked, then renders the matching
//! [`LimitTemplate`]:
//!
//! ```
//! use palisade_guard::message::LimitMessageBuilder;
//!
//! let message = LimitMessageBuilder::new(11)
//!     .named("count")
//!     .with_min(1)
//!     .with_max(10)
//!     .build_message();
//!
//! assert_eq!(message, "count (11) is outside the range 1 to 10");
//! ```

mod template;

use std::borrow::Cow;
use std::fmt::{self, Display};

pub use template::LimitTemplate;

// ============================================================================
// LIMIT MESSAGE BUILDER
// ============================================================================

/// Fluent builder for a bound-violation message.
///
/// Bounds are append-only: once set they stay set, and setting one again
/// replaces its value. Presence is tracked independently of the value, so a
/// bound of `0` is still a bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitMessageBuilder<T> {
    value: T,
    name: Option<Cow<'static, str>>,
    min: Option<T>,
    max: Option<T>,
}

impl<T> LimitMessageBuilder<T> {
    /// Creates a builder for `value` with no bounds.
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            min: None,
            max: None,
        }
    }

    /// Names the value; rendered as `name (value)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Records the minimum bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Records the minimum bound only when `is_used` is true.
    ///
    /// Passing `false` leaves the builder untouched, including any minimum
    /// recorded earlier.
    #[must_use = "builder methods must be chained or built"]
    pub fn maybe_min(self, is_used: bool, min: T) -> Self {
        if is_used { self.with_min(min) } else { self }
    }

    /// Records the maximum bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Records the maximum bound only when `is_used` is true.
    #[must_use = "builder methods must be chained or built"]
    pub fn maybe_max(self, is_used: bool, max: T) -> Self {
        if is_used { self.with_max(max) } else { self }
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subject name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The recorded minimum, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// The recorded maximum, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    /// Returns true once a minimum has been recorded.
    pub fn has_min(&self) -> bool {
        self.min.is_some()
    }

    /// Returns true once a maximum has been recorded.
    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    /// The template the current bounds select.
    pub fn template(&self) -> &'static LimitTemplate {
        LimitTemplate::select(self.has_min(), self.has_max())
    }
}

impl<T: Display> LimitMessageBuilder<T> {
    /// Renders the message for the current state.
    ///
    /// Does not consume the builder; repeated calls return the same text.
    pub fn build_message(&self) -> String {
        self.to_string()
    }
}

impl<T: Display> Display for LimitMessageBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = SubjectDisplay {
            name: self.name(),
            value: &self.value,
        };
        self.template().render(
            f,
            &subject,
            self.min.as_ref().map(|min| min as &dyn Display),
            self.max.as_ref().map(|max| max as &dyn Display),
        )
    }
}

struct SubjectDisplay<'a, T> {
    name: Option<&'a str>,
    value: &'a T,
}

impl<T: Display> Display for SubjectDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{name} ({})", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_bounds() {
        let builder = LimitMessageBuilder::new(3);
        assert!(!builder.has_min());
        assert!(!builder.has_max());
        assert_eq!(builder.template().code(), "invalid");
        assert_eq!(builder.build_message(), "3 is not a valid value");
    }

    #[test]
    fn test_named_subject() {
        let message = LimitMessageBuilder::new(3)
            .named("count")
            .with_min(5)
            .build_message();
        assert_eq!(message, "count (3) is below the minimum of 5");
    }

    #[test]
    fn test_with_min_last_write_wins() {
        let builder = LimitMessageBuilder::new(1).with_min(5).with_min(7);
        assert!(builder.has_min());
        assert_eq!(builder.min(), Some(&7));
        assert_eq!(builder.build_message(), "1 is below the minimum of 7");
    }

    #[test]
    fn test_zero_bound_is_present() {
        let builder = LimitMessageBuilder::new(-1).with_min(0);
        assert!(builder.has_min());
        assert_eq!(builder.build_message(), "-1 is below the minimum of 0");
    }

    #[test]
    fn test_maybe_min_false_is_noop() {
        let builder = LimitMessageBuilder::new(3).maybe_min(false, 99);
        assert!(!builder.has_min());
        assert_eq!(builder, LimitMessageBuilder::new(3));
    }

    #[test]
    fn test_maybe_min_false_keeps_previous() {
        let builder = LimitMessageBuilder::new(3)
            .with_min(5)
            .maybe_min(false, 99);
        assert_eq!(builder.min(), Some(&5));
    }

    #[test]
    fn test_with_max_last_write_wins() {
        let builder = LimitMessageBuilder::new(20).with_max(10).with_max(15);
        assert!(builder.has_max());
        assert_eq!(builder.max(), Some(&15));
        assert_eq!(builder.build_message(), "20 is above the maximum of 15");
    }

    #[test]
    fn test_maybe_max_false_keeps_previous() {
        let builder = LimitMessageBuilder::new(20)
            .with_max(10)
            .maybe_max(false, 99);
        assert!(builder.has_max());
        assert_eq!(builder.max(), Some(&10));
        assert_eq!(builder.build_message(), "20 is above the maximum of 10");
    }

    #[test]
    fn test_maybe_max_true_records() {
        let builder = LimitMessageBuilder::new(12).maybe_max(true, 10);
        assert!(builder.has_max());
        assert_eq!(builder.build_message(), "12 is above the maximum of 10");
    }

    #[test]
    fn test_both_bounds() {
        let builder = LimitMessageBuilder::new(0).with_max(10).with_min(1);
        assert_eq!(builder.template().code(), "out_of_range");
        assert_eq!(builder.build_message(), "0 is outside the range 1 to 10");
    }

    #[test]
    fn test_build_message_is_idempotent() {
        let builder = LimitMessageBuilder::new(2.5).named("ratio").with_max(1.0);
        assert_eq!(builder.build_message(), builder.build_message());
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let message = LimitMessageBuilder::new("{max}")
            .named("{min}")
            .with_min("b")
            .build_message();
        assert_eq!(message, "{min} ({max}) is below the minimum of b");
    }

    #[test]
    fn test_display_matches_build_message() {
        let builder = LimitMessageBuilder::new(4).with_min(1).with_max(3);
        assert_eq!(format!("{builder}"), builder.build_message());
    }
}
