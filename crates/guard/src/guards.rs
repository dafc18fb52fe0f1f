//! Minimum, maximum and range guards
//!
//! Each guard hands the value back on success so checks compose:
//!
//! ```
//! use palisade_guard::{GuardResult, guard_maximum, guard_minimum};
//!
//! fn pool_size(requested: u32) -> GuardResult<u32> {
//!     guard_minimum(guard_maximum(requested, "pool_size", 64)?, "pool_size", 1)
//! }
//!
//! assert_eq!(pool_size(8), Ok(8));
//! assert!(pool_size(0).is_err());
//! ```
//!
//! Bounds are inclusive. A value that cannot be compared with a bound
//! (`f64::NAN`, for one) is rejected.
//!
//! The `*_with_message` variants take a closure that produces the message.
//! It is only called when the guard fails.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{GuardError, GuardResult};
use crate::message::LimitMessageBuilder;

// ============================================================================
// MINIMUM
// ============================================================================

/// Guards that `value` is at least `minimum`.
///
/// # Examples
///
/// ```
/// use palisade_guard::guard_minimum;
///
/// assert_eq!(guard_minimum(5, "count", 5), Ok(5));
///
/// let err = guard_minimum(3, "count", 5).unwrap_err();
/// assert_eq!(err.message(), "count (3) is below the minimum of 5");
/// ```
pub fn guard_minimum<T>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    minimum: T,
) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    let argument = argument.into();
    enforce(below(&value, &minimum), &argument, Check::Minimum, || {
        LimitMessageBuilder::new(&value)
            .named(argument.clone())
            .with_min(&minimum)
            .build_message()
    })?;
    Ok(value)
}

/// Guards that `value` is at least `minimum`, with a caller-built message.
pub fn guard_minimum_with_message<T, F, M>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    minimum: T,
    message: F,
) -> GuardResult<T>
where
    T: PartialOrd,
    F: FnOnce() -> M,
    M: Into<String>,
{
    enforce(below(&value, &minimum), &argument.into(), Check::Minimum, message)?;
    Ok(value)
}

// ============================================================================
// MAXIMUM
// ============================================================================

/// Guards that `value` is at most `maximum`.
///
/// # Examples
///
/// ```
/// use palisade_guard::guard_maximum;
///
/// assert_eq!(guard_maximum(10, "count", 10), Ok(10));
/// assert!(guard_maximum(11, "count", 10).is_err());
/// ```
pub fn guard_maximum<T>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    maximum: T,
) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    let argument = argument.into();
    enforce(above(&value, &maximum), &argument, Check::Maximum, || {
        LimitMessageBuilder::new(&value)
            .named(argument.clone())
            .with_max(&maximum)
            .build_message()
    })?;
    Ok(value)
}

/// Guards that `value` is at most `maximum`, with a caller-built message.
pub fn guard_maximum_with_message<T, F, M>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    maximum: T,
    message: F,
) -> GuardResult<T>
where
    T: PartialOrd,
    F: FnOnce() -> M,
    M: Into<String>,
{
    enforce(above(&value, &maximum), &argument.into(), Check::Maximum, message)?;
    Ok(value)
}

// ============================================================================
// RANGE
// ============================================================================

/// Guards that `lower <= value <= upper`.
///
/// The limits themselves are not checked: with `lower > upper` every value
/// is rejected.
///
/// # Examples
///
/// ```
/// use palisade_guard::guard_in_range;
///
/// assert_eq!(guard_in_range(7, "count", 1, 10), Ok(7));
///
/// let err = guard_in_range(11, "count", 1, 10).unwrap_err();
/// assert_eq!(err.message(), "count (11) is outside the range 1 to 10");
/// ```
pub fn guard_in_range<T>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    lower: T,
    upper: T,
) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    let argument = argument.into();
    let violated = below(&value, &lower) || above(&value, &upper);
    enforce(violated, &argument, Check::Range, || {
        LimitMessageBuilder::new(&value)
            .named(argument.clone())
            .with_min(&lower)
            .with_max(&upper)
            .build_message()
    })?;
    Ok(value)
}

/// Guards that `lower <= value <= upper`, with a caller-built message.
pub fn guard_in_range_with_message<T, F, M>(
    value: T,
    argument: impl Into<Cow<'static, str>>,
    lower: T,
    upper: T,
    message: F,
) -> GuardResult<T>
where
    T: PartialOrd,
    F: FnOnce() -> M,
    M: Into<String>,
{
    let violated = below(&value, &lower) || above(&value, &upper);
    enforce(violated, &argument.into(), Check::Range, message)?;
    Ok(value)
}

// ============================================================================
// SHARED
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Check {
    Minimum,
    Maximum,
    Range,
}

impl Check {
    fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Range => "range",
        }
    }
}

fn below<T: PartialOrd>(value: &T, minimum: &T) -> bool {
    !matches!(
        value.partial_cmp(minimum),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

fn above<T: PartialOrd>(value: &T, maximum: &T) -> bool {
    !matches!(
        value.partial_cmp(maximum),
        Some(Ordering::Less | Ordering::Equal)
    )
}

fn enforce<F, M>(
    violated: bool,
    argument: &Cow<'static, str>,
    check: Check,
    message: F,
) -> Result<(), GuardError>
where
    F: FnOnce() -> M,
    M: Into<String>,
{
    if !violated {
        return Ok(());
    }

    let error = GuardError::invalid_argument(argument.clone(), message());
    tracing::debug!(
        argument = %argument,
        check = check.as_str(),
        reason = error.message(),
        "guard rejected argument"
    );
    Err(error)
}

// ============================================================================
// TESTS
// ============================================================================
