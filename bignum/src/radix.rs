//! String conversion in bases 2 through 64.
//!
//! Four alphabets are in play: a general case-sensitive table
//! (0-9 A-Z a-z `_`) for arbitrary bases, the Bitcoin Base58 alphabet, the
//! standard Base64 alphabet, and case-insensitive hex. Negative `base`
//! arguments select formatting variants of the same value (spaced binary,
//! bare uppercase hex, non-Bitcoin Base58); they never change the number.

use crate::{BigInt, Error, Result};
use core::fmt;

/// Digits for every base up to 63: 0-9, A-Z, a-z, then `_`.
const ALPHA_GENERAL: &[u8; 63] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";

/// The Bitcoin Base58 alphabet (no 0, O, I, l).
pub const ALPHA_BASE58: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Standard Base64 digits.
const ALPHA_BASE64: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn digit_general(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'z' => c - b'a' + 36,
        b'_' => 62,
        _ => 0,
    }
}

fn digit_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn digit_base58(c: u8) -> u8 {
    match ALPHA_BASE58.iter().position(|&a| a == c) {
        Some(i) => i as u8,
        None => 0,
    }
}

fn digit_base64(c: u8) -> u8 {
    match c {
        b'A'..=b'Z' => c - b'A',
        b'a'..=b'z' => c - b'a' + 26,
        b'0'..=b'9' => c - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => 0,
    }
}

/// Value of one character under the given base's alphabet. Characters
/// outside the alphabet, or at or above the base, count as digit 0 — the
/// parser is deliberately permissive.
fn digit_value(c: u8, base: u32) -> u8 {
    let d = match base {
        16 => digit_hex(c),
        58 => digit_base58(c),
        64 => digit_base64(c),
        _ => digit_general(c),
    };
    if (d as u32) < base { d } else { 0 }
}

impl BigInt {
    /// Parses a string in the given base (2 to 64).
    ///
    /// A single leading `-` negates; base 16 accepts an optional `0x`/`0X`
    /// prefix; base 58 reads the Bitcoin alphabet and base 64 the standard
    /// Base64 alphabet. Unknown characters are treated as digit 0 rather
    /// than rejected.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self> {
        if !(2..=64).contains(&base) {
            return Err(Error::InvalidBase(base as i32));
        }
        let mut body = s.as_bytes();
        let negative = body.first() == Some(&b'-');
        if negative {
            body = &body[1..];
        }
        if base == 16 && (body.starts_with(b"0x") || body.starts_with(b"0X")) {
            body = &body[2..];
        }

        let mut mag = vec![0u8];
        for &c in body {
            let mut carry = digit_value(c, base) as u32;
            for byte in mag.iter_mut() {
                let v = *byte as u32 * base + carry;
                *byte = v as u8;
                carry = v >> 8;
            }
            while carry > 0 {
                mag.push(carry as u8);
                carry >>= 8;
            }
        }
        Ok(BigInt::from_mag(negative, mag))
    }

    /// Renders the value in the given base.
    ///
    /// Positive bases 2..=64 use the conventional digit sets (general
    /// table, Bitcoin Base58 for 58, Base64 for 64); base 16 prints
    /// lowercase byte pairs behind `0x`. The negative variants format the
    /// same digits differently: −2 spaces the bits byte by byte, −16 is
    /// bare uppercase hex, −58 uses the general alphabet. Base 256 lists
    /// the magnitude bytes in decimal, most significant first.
    pub fn to_str_radix(&self, base: i32) -> Result<String> {
        let body = match base {
            -2 => self.to_binary_string(true),
            2 => self.to_binary_string(false),
            -16 => self.to_digit_string(16, ALPHA_GENERAL),
            16 => self.to_hex_pairs(),
            -58 => self.to_digit_string(58, ALPHA_GENERAL),
            58 => self.to_digit_string(58, ALPHA_BASE58),
            64 => self.to_digit_string(64, ALPHA_BASE64),
            256 => self.to_byte_list(),
            b if (2..=63).contains(&b) => self.to_digit_string(b as u32, ALPHA_GENERAL),
            b => return Err(Error::InvalidBase(b)),
        };
        if self.negative && !self.is_zero() {
            Ok(format!("-{body}"))
        } else {
            Ok(body)
        }
    }

    /// Bits of every magnitude byte, most significant first, optionally
    /// with a space after each byte.
    fn to_binary_string(&self, spaced: bool) -> String {
        if self.is_zero() {
            return "0".into();
        }
        let mut out = String::with_capacity(self.mag.len() * 9);
        for byte in self.mag.iter().rev() {
            for bit in (0..8).rev() {
                out.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
            }
            if spaced {
                out.push(' ');
            }
        }
        out
    }

    /// `0x`-prefixed lowercase hex, one pair per magnitude byte.
    fn to_hex_pairs(&self) -> String {
        if self.is_zero() {
            return "0x0".into();
        }
        let mut out = String::with_capacity(2 + self.mag.len() * 2);
        out.push_str("0x");
        for byte in self.mag.iter().rev() {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }

    /// Magnitude bytes as decimal values, `", "`-separated, high byte first.
    fn to_byte_list(&self) -> String {
        let bytes: Vec<String> = self.mag.iter().rev().map(|b| b.to_string()).collect();
        bytes.join(", ")
    }

    /// Repeated byte-radix conversion: the whole magnitude is one large
    /// numerator and each magnitude byte is folded in as `acc·256 + byte`.
    /// Leading zero digits are trimmed before mapping through `alpha`.
    fn to_digit_string(&self, base: u32, alpha: &[u8]) -> String {
        if self.is_zero() {
            return (alpha[0] as char).to_string();
        }
        let len = (self.mag.len() as f64 * 256f64.log10() / (base as f64).log10()) as usize + 1;
        let mut digits = vec![0u8; len];
        for &byte in self.mag.iter().rev() {
            let mut k = byte as u32;
            for d in digits.iter_mut().rev() {
                k += *d as u32 * 256;
                *d = (k % base) as u8;
                k /= base;
            }
        }
        let start = digits.iter().position(|&d| d != 0).unwrap_or(len - 1);
        digits[start..].iter().map(|&d| alpha[d as usize] as char).collect()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative && !self.is_zero() { "-" } else { "" };
        write!(f, "{}{}", sign, self.to_digit_string(10, ALPHA_GENERAL))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.mag.iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.mag.iter().rev() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
