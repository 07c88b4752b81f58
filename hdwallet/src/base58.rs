//! Base58 over the Bitcoin alphabet.

use crate::{Error, Result};
use bignum::BigInt;

/// The Bitcoin alphabet: no 0, O, I or l.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes bytes as Base58, each leading zero byte becoming a leading '1'.
pub fn encode(bytes: &[u8]) -> String {
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = "1".repeat(leading_zeros);
    let value = BigInt::from_bytes_be(bytes);
    if !value.is_zero() {
        // Base 58 of a BigInt already uses the Bitcoin alphabet.
        let digits = value.to_str_radix(58).expect("58 is a valid radix");
        out.push_str(&digits);
    }
    out
}

/// Decodes Base58 back to bytes, restoring one zero byte per leading '1'.
/// Characters outside the alphabet are rejected.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut value = BigInt::zero();
    let fifty_eight = BigInt::from(58u32);
    for c in s.chars() {
        let digit = ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(Error::InvalidBase58Char(c))?;
        value = &(&value * &fifty_eight) + &BigInt::from(digit as u32);
    }

    let leading_ones = s.chars().take_while(|&c| c == '1').count();
    let mut out = vec![0u8; leading_ones];
    if !value.is_zero() {
        out.extend_from_slice(&value.to_bytes_be());
    }
    Ok(out)
}
