use std::fmt;

use derive_more::{Display, Error, From, IsVariant};

/// The error produced by a fill range whose start lies beyond its end.
#[derive(Debug, PartialEq, Eq)]
pub struct StartAfterEnd {
    /// The start of the offending range.
    pub start: usize,
    /// The end of the offending range.
    pub end: usize,
}

impl fmt::Display for StartAfterEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} lies after range end {}!", self.start, self.end)
    }
}

impl std::error::Error for StartAfterEnd {}

/// The error produced by a fill range reaching past the end of the sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct EndOutOfBounds {
    /// The end of the offending range.
    pub end: usize,
    /// The length of the sequence being filled.
    pub len: usize,
}

impl fmt::Display for EndOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range end {} out of bounds for sequence with {} elements!", self.end, self.len)
    }
}

impl std::error::Error for EndOutOfBounds {}

/// Either way a fill range can be malformed. Each variant wraps the corresponding struct, so a
/// caller that only ever produces one kind of mistake can match on it directly.
#[derive(Debug, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum RangeError {
    /// See [`StartAfterEnd`].
    StartAfterEnd(StartAfterEnd),
    /// See [`EndOutOfBounds`].
    EndOutOfBounds(EndOutOfBounds),
}
