//! Borrowed views into a sequence: the ends of a slice and the `drop` family built on top of
//! them.
//!
//! # Purpose
//! These are the leaves of the library. [`head`], [`last`], [`tail`] and [`initial`] each peel a
//! single element's worth of view off one end of a slice; the `drop_*` functions repeat that
//! step. Nothing in this module allocates, every result is either a reference into the input or
//! a sub-slice of it.

mod drop;
mod ends;

pub use drop::*;
pub use ends::*;
