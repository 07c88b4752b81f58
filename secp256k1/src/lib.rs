#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]

mod error;
mod ops;
mod point;

pub use crate::error::{Error, Result};
pub use crate::point::AffinePoint;

use bignum::BigInt;

/// The field prime p = 2²⁵⁶ − 2³² − 977.
const FIELD_MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xff, 0xff, 0xfc, 0x2f,
];

/// The group order n.
const ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c,
    0xd0, 0x36, 0x41, 0x41,
];

/// Generator x-coordinate.
const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87,
    0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b,
    0x16, 0xf8, 0x17, 0x98,
];

/// Generator y-coordinate.
const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11,
    0x08, 0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f,
    0xfb, 0x10, 0xd4, 0xb8,
];

/// The secp256k1 domain parameters.
///
/// Construction is cheap (a handful of byte-vector copies); callers build
/// one per operation and drop it at the end rather than sharing a global.
#[derive(Clone, Debug)]
pub struct Secp256k1 {
    /// Field prime.
    pub p: BigInt,
    /// Curve coefficient a (zero).
    pub a: BigInt,
    /// Curve coefficient b (seven).
    pub b: BigInt,
    /// Base point.
    pub g: AffinePoint,
    /// Group order.
    pub n: BigInt,
    /// Cofactor (one).
    pub h: BigInt,
}

impl Secp256k1 {
    /// The standard domain parameters.
    pub fn new() -> Self {
        Secp256k1 {
            p: BigInt::from_bytes_be(&FIELD_MODULUS),
            a: BigInt::zero(),
            b: BigInt::from(7u32),
            g: AffinePoint::new(
                BigInt::from_bytes_be(&GENERATOR_X),
                BigInt::from_bytes_be(&GENERATOR_Y),
            ),
            n: BigInt::from_bytes_be(&ORDER),
            h: BigInt::one(),
        }
    }
}

impl Default for Secp256k1 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Secp256k1;
    use bignum::BigInt;

    #[test]
    fn parameters_match_sec2() {
        let curve = Secp256k1::new();
        assert_eq!(
            format!("{:x}", curve.p),
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        );
        assert_eq!(
            format!("{:x}", curve.n),
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        );
        assert_eq!(curve.a, BigInt::zero());
        assert_eq!(curve.b, BigInt::from(7u32));
        assert_eq!(curve.h, BigInt::one());
    }

    #[test]
    fn generator_is_on_the_curve() {
        let curve = Secp256k1::new();
        assert!(curve.is_on_curve(&curve.g).unwrap());
    }
}
