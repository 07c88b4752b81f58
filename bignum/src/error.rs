//! Error types.

/// Errors produced by arithmetic and radix conversions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A quotient or remainder was requested with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A radix outside the supported 2..=64 range (or its negative
    /// formatting variants) was requested.
    #[error("unsupported base {0}")]
    InvalidBase(i32),
}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
