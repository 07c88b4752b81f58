#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]

pub mod address;
pub mod base58;
mod derive;
mod error;
mod mnemonic;
mod words;

pub use crate::derive::{Xprv, Xpub, HARDENED_OFFSET};
pub use crate::error::{Error, Result};
pub use crate::mnemonic::{random_entropy, Mnemonic};
pub use crate::words::WORDS;

use hashes::pbkdf2_hmac_sha512;

/// Number of PBKDF2 iterations BIP-39 prescribes.
const PBKDF2_ROUNDS: u32 = 2048;

/// Derives the 64-byte wallet seed from a mnemonic phrase and an optional
/// passphrase: PBKDF2-HMAC-SHA-512 over salt "mnemonic" ‖ passphrase with
/// 2048 iterations.
pub fn seed_from_mnemonic(phrase: &str, passphrase: &str) -> [u8; 64] {
    let mut salt = Vec::with_capacity(8 + passphrase.len());
    salt.extend_from_slice(b"mnemonic");
    salt.extend_from_slice(passphrase.as_bytes());
    pbkdf2_hmac_sha512(phrase.as_bytes(), &salt, PBKDF2_ROUNDS)
}
