//! Error types.

/// Errors from curve operations and point decoding.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A field element that the formulas needed to invert had no inverse.
    /// Unreachable for points on the curve; surfaces only for malformed
    /// coordinate input.
    #[error("field element has no modular inverse")]
    NotInvertible,

    /// A compressed point did not start with the 0x02 or 0x03 tag.
    #[error("invalid compressed point tag {0:#04x}")]
    InvalidTag(u8),

    /// Decompression produced coordinates that do not satisfy the curve
    /// equation (the x-coordinate has no square root).
    #[error("coordinates are not on the curve")]
    NotOnCurve,

    /// Arithmetic failure bubbled up from the big-integer layer.
    #[error(transparent)]
    Arithmetic(#[from] bignum::Error),
}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
