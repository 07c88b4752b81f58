//! Error types.

/// Errors across the mnemonic, derivation and address paths.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The operating-system entropy source failed.
    #[error("operating-system entropy source unavailable")]
    EntropySource,

    /// Hardened children cannot be derived from a public parent.
    #[error("hardened derivation requires the parent private key")]
    HardenedFromPublic,

    /// A Base58 string contained a character outside the Bitcoin alphabet.
    #[error("invalid base58 character {0:?}")]
    InvalidBase58Char(char),

    /// A key or chain-code field had the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count.
        expected: usize,
        /// What the caller supplied.
        actual: usize,
    },

    /// Big-integer arithmetic failure.
    #[error(transparent)]
    Arithmetic(#[from] bignum::Error),

    /// Curve operation failure.
    #[error(transparent)]
    Curve(#[from] secp256k1::Error),
}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
