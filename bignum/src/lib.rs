#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]

//! ## Representation
//!
//! A [`BigInt`] is a sign flag plus a little-endian byte magnitude. Values
//! are kept normalized: the magnitude never carries high-order zero bytes
//! (except the single byte of zero itself) and zero is never negative.
//! External byte I/O is big-endian; [`BigInt::from_bytes_be`] and
//! [`BigInt::to_bytes_be`] are the only places the order flips.

mod arith;
mod divide;
mod error;
mod modular;
mod radix;

pub use crate::error::{Error, Result};

/// Arbitrary-precision signed integer.
///
/// Construction from primitives, strings in any base from 2 to 64, or
/// big-endian bytes; arithmetic through the standard operator traits;
/// division and modular operations through [`BigInt::div_rem`],
/// [`BigInt::rem_euclid`], [`BigInt::modpow`] and [`BigInt::modinv`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    /// Little-endian magnitude, at least one byte.
    mag: Vec<u8>,
}

impl BigInt {
    /// The value 0.
    pub fn zero() -> Self {
        BigInt {
            negative: false,
            mag: vec![0],
        }
    }

    /// The value 1.
    pub fn one() -> Self {
        BigInt {
            negative: false,
            mag: vec![1],
        }
    }

    pub(crate) fn from_mag(negative: bool, mag: Vec<u8>) -> Self {
        let mut n = BigInt { negative, mag };
        n.normalize();
        n
    }

    /// Strips high-order zero bytes and canonicalizes the sign of zero.
    /// Every constructor and arithmetic routine funnels through here.
    pub(crate) fn normalize(&mut self) {
        while self.mag.len() > 1 && self.mag.last() == Some(&0) {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        if self.mag == [0] {
            self.negative = false;
        }
    }

    pub(crate) fn magnitude(&self) -> &[u8] {
        &self.mag
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag == [0]
    }

    /// True if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            negative: false,
            mag: self.mag.clone(),
        }
    }

    /// The bit at position `idx` of the magnitude, counting from bit 0 of
    /// the least-significant byte. Positions past the top byte read as 0.
    pub fn bit(&self, idx: usize) -> bool {
        let (byte, bit) = (idx / 8, idx % 8);
        match self.mag.get(byte) {
            Some(b) => ((b >> bit) & 1) == 1,
            None => false,
        }
    }

    /// Number of magnitude bytes once normalized.
    pub fn byte_len(&self) -> usize {
        self.mag.len()
    }

    /// Shifts the magnitude right by `bits` bit positions, in place.
    /// Only sub-byte shifts (1 to 7) are meaningful; anything else is a
    /// no-op, mirroring the byte-oriented storage.
    pub fn shr_small(&mut self, bits: u32) {
        if !(1..=7).contains(&bits) {
            return;
        }
        let mut carry = 0u8;
        for byte in self.mag.iter_mut().rev() {
            let v = *byte;
            *byte = (v >> bits) | carry;
            carry = v << (8 - bits);
        }
        self.normalize();
    }

    /// Interprets big-endian bytes as a non-negative value.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut mag: Vec<u8> = bytes.iter().rev().copied().collect();
        if mag.is_empty() {
            mag.push(0);
        }
        BigInt::from_mag(false, mag)
    }

    /// The magnitude as minimal big-endian bytes (sign is not encoded).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.mag.iter().rev().copied().collect()
    }

    /// The magnitude as exactly `len` big-endian bytes, zero-padded on the
    /// high end. A magnitude wider than `len` keeps its `len` low-order
    /// bytes.
    pub fn to_bytes_be_padded(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        for (i, byte) in self.mag.iter().take(len).enumerate() {
            out[len - 1 - i] = *byte;
        }
        out
    }

    /// Joins two magnitudes in storage (little-endian) order: with
    /// `b_first` unset the result holds `a`'s bytes in the low positions
    /// and `b`'s above them; with it set, the other way around. The result
    /// is non-negative.
    pub fn concat(a: &BigInt, b: &BigInt, b_first: bool) -> BigInt {
        let (lo, hi) = if b_first { (b, a) } else { (a, b) };
        let mut mag = Vec::with_capacity(lo.mag.len() + hi.mag.len());
        mag.extend_from_slice(&lo.mag);
        mag.extend_from_slice(&hi.mag);
        BigInt::from_mag(false, mag)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        BigInt::from_mag(false, v.to_le_bytes().to_vec())
    }
}

impl From<i32> for BigInt {
    fn from(v: i32) -> Self {
        BigInt::from_mag(v < 0, v.unsigned_abs().to_le_bytes().to_vec())
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        use core::cmp::Ordering;
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => arith::mag_cmp(&self.mag, &other.mag),
            (true, true) => arith::mag_cmp(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::BigInt;
    use num_bigint::Sign;

    pub fn to_ref(x: &BigInt) -> num_bigint::BigInt {
        let sign = if x.is_zero() {
            Sign::NoSign
        } else if x.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        num_bigint::BigInt::from_bytes_le(sign, x.magnitude())
    }

    pub fn from_ref(x: &num_bigint::BigInt) -> BigInt {
        let (sign, bytes) = x.to_bytes_le();
        BigInt::from_mag(sign == Sign::Minus, bytes)
    }

    pub fn arb_bigint() -> impl proptest::strategy::Strategy<Value = BigInt> {
        use proptest::prelude::*;
        (any::<bool>(), proptest::collection::vec(any::<u8>(), 0..40))
            .prop_map(|(neg, mag)| BigInt::from_mag(neg, mag))
    }
}
