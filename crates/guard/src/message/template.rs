//! Message templates for bound violations
//!
//! A template is a fixed list of segments: literal text interleaved with the
//! `{subject}`, `{min}` and `{max}` placeholders. Templates for an absent
//! bound simply have no placeholder for it.

use std::fmt::{self, Display};

// ============================================================================
// SEGMENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Text(&'static str),
    Subject,
    Min,
    Max,
}

use Segment::{Max, Min, Subject, Text};

// ============================================================================
// TEMPLATE TABLE
// ============================================================================

/// One entry of the template table.
///
/// Obtain entries with [`LimitTemplate::select`]; the table is indexed by
/// which bounds are present.
#[derive(Debug, PartialEq, Eq)]
pub struct LimitTemplate {
    has_min: bool,
    has_max: bool,
    code: &'static str,
    segments: &'static [Segment],
}

/// All templates, indexed by `has_min | has_max << 1`.
static TEMPLATES: [LimitTemplate; 4] = [
    LimitTemplate {
        has_min: false,
        has_max: false,
        code: "invalid",
        segments: &[Subject, Text(" is not a valid value")],
    },
    LimitTemplate {
        has_min: true,
        has_max: false,
        code: "below_minimum",
        segments: &[Subject, Text(" is below the minimum of "), Min],
    },
    LimitTemplate {
        has_min: false,
        has_max: true,
        code: "above_maximum",
        segments: &[Subject, Text(" is above the maximum of "), Max],
    },
    LimitTemplate {
        has_min: true,
        has_max: true,
        code: "out_of_range",
        segments: &[
            Subject,
            Text(" is outside the range "),
            Min,
            Text(" to "),
            Max,
        ],
    },
];

impl LimitTemplate {
    /// Selects the template for the given combination of bounds.
    pub fn select(has_min: bool, has_max: bool) -> &'static Self {
        &TEMPLATES[usize::from(has_min) | (usize::from(has_max) << 1)]
    }

    /// Returns every template in the table.
    pub fn all() -> &'static [Self] {
        &TEMPLATES
    }

    /// Stable machine-readable name of the template.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether the template references a minimum.
    pub fn has_min(&self) -> bool {
        self.has_min
    }

    /// Whether the template references a maximum.
    pub fn has_max(&self) -> bool {
        self.has_max
    }

    /// Writes the template, substituting each placeholder in order.
    ///
    /// Substituted values are written verbatim: placeholder-looking text
    /// inside a value is never expanded again. A placeholder whose value is
    /// `None` renders as nothing.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        subject: &dyn Display,
        min: Option<&dyn Display>,
        max: Option<&dyn Display>,
    ) -> fmt::Result {
        for segment in self.segments {
            match segment {
                Text(text) => f.write_str(text)?,
                Subject => write!(f, "{subject}")?,
                Min => {
                    if let Some(min) = min {
                        write!(f, "{min}")?;
                    }
                }
                Max => {
                    if let Some(max) = max {
                        write!(f, "{max}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Displays the raw template text with its placeholders.
impl Display for LimitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments {
            match segment {
                Text(text) => f.write_str(text)?,
                Subject => f.write_str("{subject}")?,
                Min => f.write_str("{min}")?,
                Max => f.write_str("{max}")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
