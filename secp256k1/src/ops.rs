//! Group operations: doubling, addition, scalar multiplication,
//! decompression.

use crate::{AffinePoint, Error, Result, Secp256k1};
use bignum::BigInt;

impl Secp256k1 {
    fn invert(&self, v: &BigInt) -> Result<BigInt> {
        v.modinv(&self.p).ok_or(Error::NotInvertible)
    }

    /// Doubles a point: λ = (3x² + a) / 2y, then the chord-tangent
    /// formulas. A point with y = 0 doubles to infinity.
    pub fn double(&self, pt: &AffinePoint) -> Result<AffinePoint> {
        if pt.y.is_zero() {
            return Ok(AffinePoint::identity());
        }
        let two_y = &pt.y + &pt.y;
        let inv = self.invert(&two_y)?;
        let three = BigInt::from(3u32);
        let slope = (&(&(&(&pt.x * &pt.x) * &three) + &self.a) * &inv).rem_euclid(&self.p)?;

        let x = (&(&(&slope * &slope) - &pt.x) - &pt.x).rem_euclid(&self.p)?;
        let y = (&(&slope * &(&pt.x - &x)) - &pt.y).rem_euclid(&self.p)?;
        Ok(AffinePoint::new(x, y))
    }

    /// Adds two points with the full shortcut ladder: coordinates are
    /// reduced mod p first, the identity passes through, additive inverses
    /// meet at infinity, and equal points fall back to doubling.
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        let p = self.reduce(p)?;
        let q = self.reduce(q)?;

        if p.is_identity() {
            return Ok(q);
        }
        if q.is_identity() {
            return Ok(p);
        }

        let neg_qy = if q.y.is_zero() {
            BigInt::zero()
        } else {
            (&self.p - &q.y).rem_euclid(&self.p)?
        };
        if p.x == q.x {
            if p.y == neg_qy {
                return Ok(AffinePoint::identity());
            }
            if p.y == q.y {
                return self.double(&p);
            }
        }

        let denom = (&p.x - &q.x).rem_euclid(&self.p)?;
        let inv = self.invert(&denom)?;
        let slope = (&(&p.y - &q.y) * &inv).rem_euclid(&self.p)?;

        let x = (&(&(&slope * &slope) - &p.x) - &q.x).rem_euclid(&self.p)?;
        let y = (&(&slope * &(&p.x - &x)) - &p.y).rem_euclid(&self.p)?;
        Ok(AffinePoint::new(x, y))
    }

    /// Right-to-left double-and-add over the magnitude bits of `k`:
    /// the running doubling chain starts at `pt` and the accumulator picks
    /// up every doubled point whose bit is set.
    pub fn scalar_mul(&self, k: &BigInt, pt: &AffinePoint) -> Result<AffinePoint> {
        if k.is_zero() {
            return Ok(AffinePoint::identity());
        }
        let bits = 8 * k.byte_len();
        let mut acc = if k.bit(0) {
            pt.clone()
        } else {
            AffinePoint::identity()
        };
        let mut chain = pt.clone();
        for i in 1..bits {
            chain = self.double(&chain)?;
            if k.bit(i) {
                acc = self.add(&acc, &chain)?;
            }
        }
        Ok(acc)
    }

    /// `k·G` for the curve generator.
    pub fn mul_base(&self, k: &BigInt) -> Result<AffinePoint> {
        self.scalar_mul(k, &self.g)
    }

    /// Solves y² = x³ + 7 for y with the requested parity, using the
    /// (p+1)/4 exponent (valid because p ≡ 3 mod 4).
    pub fn lift_x(&self, x: &BigInt, odd: bool) -> Result<BigInt> {
        let y_sq = (&(&(x * x) * x) + &self.b).rem_euclid(&self.p)?;
        let four = BigInt::from(4u32);
        let (exp, _) = (&self.p + &BigInt::one()).div_rem(&four)?;
        let mut y = y_sq.modpow(&exp, &self.p)?;

        // A non-residue yields a bogus root; reject it here.
        if (&y * &y).rem_euclid(&self.p)? != y_sq {
            return Err(Error::NotOnCurve);
        }
        if y.bit(0) != odd {
            y = &self.p - &y;
        }
        Ok(y)
    }

    /// Parses a SEC1 compressed point (02/03 tag ‖ 32-byte x).
    pub fn from_compressed(&self, bytes: &[u8; 33]) -> Result<AffinePoint> {
        let odd = match bytes[0] {
            0x02 => false,
            0x03 => true,
            tag => return Err(Error::InvalidTag(tag)),
        };
        let x = BigInt::from_bytes_be(&bytes[1..]);
        let y = self.lift_x(&x, odd)?;
        Ok(AffinePoint::new(x, y))
    }

    /// Whether the point satisfies y² ≡ x³ + 7 (mod p). The infinity
    /// sentinel is considered on the curve.
    pub fn is_on_curve(&self, pt: &AffinePoint) -> Result<bool> {
        if pt.is_identity() {
            return Ok(true);
        }
        let lhs = (&pt.y * &pt.y).rem_euclid(&self.p)?;
        let rhs = (&(&(&pt.x * &pt.x) * &pt.x) + &self.b).rem_euclid(&self.p)?;
        Ok(lhs == rhs)
    }

    fn reduce(&self, pt: &AffinePoint) -> Result<AffinePoint> {
        Ok(AffinePoint::new(
            pt.x.rem_euclid(&self.p)?,
            pt.y.rem_euclid(&self.p)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, Error, Secp256k1};
    use bignum::BigInt;
    use proptest::prelude::*;

    fn coords(pt: &AffinePoint) -> (String, String) {
        (format!("{:x}", pt.x), format!("{:x}", pt.y))
    }

    #[test]
    fn double_generator() {
        let curve = Secp256k1::new();
        let two_g = curve.double(&curve.g).unwrap();
        assert_eq!(
            coords(&two_g),
            (
                "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5".to_string(),
                "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a".to_string()
            )
        );
    }

    #[test]
    fn small_multiples_of_g() {
        let curve = Secp256k1::new();
        let expected = [
            (
                "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
                "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
            ),
            (
                "e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13",
                "51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922",
            ),
            (
                "2f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4",
                "d8ac222636e5e3d6d4dba9dda6c9c426f788271bab0d6840dca87d3aa6ac62d6",
            ),
        ];
        for (k, want) in (3u32..=5).zip(expected) {
            let pt = curve.mul_base(&BigInt::from(k)).unwrap();
            assert_eq!(coords(&pt), (want.0.to_string(), want.1.to_string()));
            assert!(curve.is_on_curve(&pt).unwrap());
        }
    }

    #[test]
    fn add_g_and_2g_gives_3g() {
        let curve = Secp256k1::new();
        let two_g = curve.double(&curve.g).unwrap();
        let sum = curve.add(&curve.g, &two_g).unwrap();
        let three_g = curve.mul_base(&BigInt::from(3u32)).unwrap();
        assert_eq!(sum, three_g);
    }

    #[test]
    fn identity_behaviour() {
        let curve = Secp256k1::new();
        let id = AffinePoint::identity();
        let g = curve.g.clone();
        assert_eq!(curve.add(&id, &g).unwrap(), g);
        assert_eq!(curve.add(&g, &id).unwrap(), g);
        assert!(curve.scalar_mul(&BigInt::zero(), &g).unwrap().is_identity());
    }

    #[test]
    fn inverse_points_cancel() {
        let curve = Secp256k1::new();
        let g = curve.g.clone();
        let neg_g = AffinePoint::new(g.x.clone(), &curve.p - &g.y);
        assert!(curve.add(&g, &neg_g).unwrap().is_identity());

        // (n−1)·G is −G.
        let n_minus_1 = &curve.n - &BigInt::one();
        assert_eq!(curve.mul_base(&n_minus_1).unwrap(), neg_g);
        // and n·G is the identity.
        assert!(curve.mul_base(&curve.n).unwrap().is_identity());
    }

    #[test]
    fn compressed_round_trip() {
        let curve = Secp256k1::new();
        for k in [1u32, 2, 3, 1000, 65537] {
            let pt = curve.mul_base(&BigInt::from(k)).unwrap();
            let encoded = pt.to_compressed();
            assert_eq!(curve.from_compressed(&encoded).unwrap(), pt);
        }
    }

    #[test]
    fn decompression_rejects_bad_input() {
        let curve = Secp256k1::new();
        let mut bytes = curve.g.to_compressed();
        bytes[0] = 0x04;
        assert!(matches!(
            curve.from_compressed(&bytes),
            Err(Error::InvalidTag(0x04))
        ));

        // x = 5 has no square root for x³ + 7.
        let mut bad = [0u8; 33];
        bad[0] = 0x02;
        bad[32] = 5;
        assert_eq!(curve.from_compressed(&bad), Err(Error::NotOnCurve));
    }

    #[test]
    fn scalar_mul_distributes_over_addition() {
        let curve = Secp256k1::new();
        let a = BigInt::from(123_456u32);
        let b = BigInt::from(654_321u32);
        let lhs = curve.mul_base(&(&a + &b)).unwrap();
        let rhs = curve
            .add(&curve.mul_base(&a).unwrap(), &curve.mul_base(&b).unwrap())
            .unwrap();
        assert_eq!(lhs, rhs);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn fuzzy_multiples_stay_on_curve(bytes in proptest::collection::vec(any::<u8>(), 1..32)) {
            let curve = Secp256k1::new();
            let k = BigInt::from_bytes_be(&bytes);
            prop_assume!(!k.is_zero());
            let pt = curve.mul_base(&k).unwrap();
            prop_assert!(curve.is_on_curve(&pt).unwrap());

            // k·G + (n−k)·G = ∞
            let complement = (&curve.n - &k).rem_euclid(&curve.n).unwrap();
            let other = curve.mul_base(&complement).unwrap();
            prop_assert!(curve.add(&pt, &other).unwrap().is_identity());
        }
    }
}
