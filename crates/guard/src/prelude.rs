//! Common imports.
//!
//! ```rust
//! use palisade_guard::prelude::*;
//!
//! let port = guard_in_range(8080u16, "port", 1024, 49151).unwrap();
//! assert_eq!(port, 8080);
//! ```

pub use crate::error::{GuardError, GuardResult};
pub use crate::guards::{
    guard_in_range, guard_in_range_with_message, guard_maximum, guard_maximum_with_message,
    guard_minimum, guard_minimum_with_message,
};
pub use crate::message::{LimitMessageBuilder, LimitTemplate};
