//! # palisade-guard
//!
//! Guard clauses for minimum, maximum and inclusive-range checks.
//!
//! A guard returns the value it was given when the check passes, and a
//! [`GuardError::InvalidArgument`] with a descriptive message when it fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade_guard::prelude::*;
//!
//! fn set_volume(level: u8) -> GuardResult<u8> {
//!     guard_in_range(level, "level", 0, 11)
//! }
//!
//! assert_eq!(set_volume(11), Ok(11));
//! assert_eq!(
//!     set_volume(12).unwrap_err().message(),
//!     "level (12) is outside the range 0 to 11"
//! );
//! ```
//!
//! ## Messages
//!
//! Messages come from [`LimitMessageBuilder`](message::LimitMessageBuilder),
//! which picks one of four templates depending on which bounds were set:
//!
//! | bounds   | example                                  |
//! |----------|------------------------------------------|
//! | none     | `count (3) is not a valid value`         |
//! | min      | `count (3) is below the minimum of 5`    |
//! | max      | `count (12) is above the maximum of 10`  |
//! | min, max | `count (12) is outside the range 1 to 10`|
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`GuardError`].

pub mod error;
pub mod guards;
pub mod message;
pub mod prelude;

pub use error::{GuardError, GuardResult};
pub use guards::{
    guard_in_range, guard_in_range_with_message, guard_maximum, guard_maximum_with_message,
    guard_minimum, guard_minimum_with_message,
};
