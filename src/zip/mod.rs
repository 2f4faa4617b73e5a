//! Combining several sequences element-wise into a sequence of tuples.
//!
//! Rust has no variadic functions, so "any number of sequences" becomes "a tuple of slices":
//! [`ZipSeqs`] is implemented for every tuple arity up to eight, and [`zip`] is the
//! free-function front door. Element types vary independently per input.

mod zip;

pub use zip::*;
