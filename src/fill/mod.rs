//! Overwriting a half-open range of a sequence with a single value, copy-out rather than
//! in-place.
//!
//! Both functions return a fresh [`Vec`] and leave the caller's slice untouched. [`fill`] treats
//! a range reaching past the end as "to the end" and a back-to-front range as empty; [`try_fill`]
//! reports both as typed errors for callers that would rather hear about the mistake.

mod error;
mod fill;

pub use error::*;
pub use fill::*;
