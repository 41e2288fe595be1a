//! Errors raised when a table cannot be built or resized.

/// The error type for invalid table construction or resize requests.
///
/// Lookups never fail: a missing key is reported as `None`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum TableError {
    /// A bucket array must hold at least one slot.
    #[error("bucket capacity must be at least 1")]
    ZeroCapacity,

    /// The load factor must be a finite number greater than zero.
    #[error("load factor must be finite and greater than zero, got {0}")]
    InvalidLoadFactor(f64),
}
