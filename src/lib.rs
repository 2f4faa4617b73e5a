//! This crate is my re-implementation of the classic sequence helpers that every
//! JavaScript-style utility belt carries (`chunk`, `compact`, `drop`, `findIndex`, `zip` and
//! friends), written over Rust slices.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation of production use. Re-writing these
//! little functions with real types forces me to work through the parts of Rust that dynamic
//! languages paper over: which results should borrow and which should own, how "no such element"
//! looks without `undefined`, and what "truthiness" even means once every element has a concrete
//! type.
//!
//! # Method
//! Every operation is a pure function over `&[T]`. Where the result is a contiguous view of the
//! input (the [`slicing`] family), the function returns a sub-slice and allocates nothing. Where
//! the result must hold new values ([`chunking`], [`compact`], [`fill`], [`zip`]), the function
//! returns an owned collection and never touches the caller's data. Predicates are plain
//! closures; nothing is boxed and nothing is stored.
//!
//! # Error Handling
//! Asking for an element that doesn't exist is not an error: those functions return an
//! [`Option`]. Arguments that are *invalid* rather than merely unsatisfiable (a chunk size of
//! zero, a back-to-front fill range) get a pair of functions, a panicking convenience and a
//! `try_` variant returning a strongly typed error. Error enums use derive macros for their
//! trait impls; the structs they wrap are written out by hand.
//!
//! # Dependencies
//! Only `derive_more`, for the repetitive error-type impls. Everything else is `std` on purpose:
//! the point of the exercise is to write the helpers, not to import them.
#![warn(missing_docs)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "chunking")]
pub mod chunking;
#[cfg(feature = "compact")]
pub mod compact;
#[cfg(feature = "fill")]
pub mod fill;
#[cfg(feature = "search")]
pub mod search;
#[cfg(feature = "slicing")]
pub mod slicing;
#[cfg(feature = "zip")]
pub mod zip;
