//! Affine points and their SEC1 compressed form.

use bignum::BigInt;

/// A point on the curve in affine coordinates.
///
/// The point at infinity is the sentinel (0, 0); since x = 0 never
/// satisfies y² = x³ + 7 over this field, the sentinel is unambiguous.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    /// x-coordinate, reduced mod p.
    pub x: BigInt,
    /// y-coordinate, reduced mod p.
    pub y: BigInt,
}

impl AffinePoint {
    /// A point from raw coordinates.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        AffinePoint { x, y }
    }

    /// The neutral element.
    pub fn identity() -> Self {
        AffinePoint {
            x: BigInt::zero(),
            y: BigInt::zero(),
        }
    }

    /// True for the (0, 0) infinity sentinel.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// SEC1 compressed encoding: 0x02 for even y, 0x03 for odd, then the
    /// 32-byte big-endian x-coordinate.
    pub fn to_compressed(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[0] = if self.y.bit(0) { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes_be_padded(32));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::Secp256k1;
    use bignum::BigInt;
    use hex_literal::hex;

    #[test]
    fn identity_sentinel() {
        let id = AffinePoint::identity();
        assert!(id.is_identity());
        assert!(!Secp256k1::new().g.is_identity());
    }

    #[test]
    fn compressed_generator() {
        let g = Secp256k1::new().g;
        assert_eq!(
            g.to_compressed(),
            hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
        );
    }

    #[test]
    fn odd_y_gets_the_03_tag() {
        let p = AffinePoint::new(BigInt::from(5u32), BigInt::from(7u32));
        assert_eq!(p.to_compressed()[0], 0x03);
        let q = AffinePoint::new(BigInt::from(5u32), BigInt::from(8u32));
        assert_eq!(q.to_compressed()[0], 0x02);
    }
}
