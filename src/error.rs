use thiserror::Error;

/// Rejected input to [`compute`](crate::checksum::compute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Zero bytes were requested.
    #[error("Length must be at least one byte.")]
    Empty,
    /// More bytes were requested than the slice holds.
    #[error("Length {length} exceeds the {available} bytes available.")]
    OutOfBounds { length: usize, available: usize },
}
