//! # caught
//!
//! Explicit success/failure outcomes for code that would otherwise panic or
//! hand back heterogeneous errors.
//!
//! An [`Outcome`] is a two-field record: `value` on success, `error` on
//! failure, never both. Two adapters turn failing code into outcomes:
//!
//! - [`wrap_sync`] / [`try_wrap_sync`] call a function with an argument
//!   tuple and capture a panic (or an `Err`) as a failure.
//! - [`wrap_async`] / [`wrap_task`] await a future or a spawned task and
//!   capture its error or panic as a failure.
//!
//! Whatever was thrown, the failure carries one `String`: the error's own
//! message for real errors, or `"An unknown error occurred: …"` for any
//! other thrown value.
//!
//! ## Quick Start
//!
//! ```rust
//! use caught::prelude::*;
//!
//! fn ratio(a: u32, b: u32) -> u32 {
//!     a / b
//! }
//!
//! let fine = wrap_sync(ratio, (10, 2));
//! assert!(is_success(&fine));
//! assert_eq!(fine.into_value(), Some(5));
//!
//! let broken = wrap_sync(ratio, (1, 0));
//! assert!(is_failure(&broken));
//! assert!(broken.error().is_some_and(|e| e.starts_with(UNKNOWN_ERROR_PREFIX)));
//! ```
//!
//! ## Logging
//!
//! Captured failures are reported as `tracing` debug events with the
//! normalized message in the `error` field. Install a subscriber to see
//! them.

#![forbid(unsafe_code)]

mod error;
mod future;
mod outcome;
mod sync;
mod thrown;

pub use error::ShapeError;
pub use future::{wrap_async, wrap_task};
pub use outcome::{Outcome, failure, is_failure, is_success, success};
pub use sync::{Invoke, try_wrap_sync, wrap_sync};
pub use thrown::{BoxError, Thrown, UNKNOWN_ERROR_PREFIX};

/// Everything needed to build, inspect and adapt outcomes.
pub mod prelude {
    pub use super::{
        Outcome, Thrown, UNKNOWN_ERROR_PREFIX, failure, is_failure, is_success, success,
        try_wrap_sync, wrap_async, wrap_sync, wrap_task,
    };
}
