use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error produced when a sequence is chunked into groups of size zero, which would never
/// consume any elements.
#[derive(Debug, PartialEq, Eq)]
pub struct ZeroChunkSize;

impl Display for ZeroChunkSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to chunk a sequence into groups of 0 elements!")
    }
}

impl Error for ZeroChunkSize {}
