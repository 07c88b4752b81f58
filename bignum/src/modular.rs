//! Modular exponentiation and inversion.

use crate::{BigInt, Result};

impl BigInt {
    /// `self^exp mod m` by right-to-left square-and-multiply.
    ///
    /// The exponent is taken by magnitude bits; `m` must be non-zero.
    pub fn modpow(&self, exp: &BigInt, m: &BigInt) -> Result<BigInt> {
        let mut result = BigInt::one();
        let mut base = self.rem_euclid(m)?;
        let mut e = exp.abs();
        while !e.is_zero() {
            if e.bit(0) {
                result = (&result * &base).rem_euclid(m)?;
            }
            base = (&base * &base).rem_euclid(m)?;
            e.shr_small(1);
        }
        Ok(result)
    }

    /// The multiplicative inverse of `self` modulo `m`, i.e. the `t` with
    /// `(t · self) mod m = 1`, via the extended Euclidean algorithm.
    /// Returns `None` when `gcd(self, m) ≠ 1`.
    pub fn modinv(&self, m: &BigInt) -> Option<BigInt> {
        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();
        let mut r = m.abs();
        let mut new_r = self.rem_euclid(m).ok()?;

        while !new_r.is_zero() {
            let (q, rem) = match r.div_rem(&new_r) {
                Ok(v) => v,
                Err(_) => return None,
            };
            let next_t = &t - &(&q * &new_t);
            t = new_t;
            new_t = next_t;
            r = new_r;
            new_r = rem;
        }

        if r > BigInt::one() {
            return None;
        }
        if t.is_negative() {
            t = &t + m;
        }
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{arb_bigint, to_ref};
    use crate::BigInt;
    use proptest::prelude::*;

    fn secp256k1_p() -> BigInt {
        BigInt::from_str_radix(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .unwrap()
    }

    #[test]
    fn small_powers() {
        let m = BigInt::from(1000u32);
        let got = BigInt::from(7u32)
            .modpow(&BigInt::from(5u32), &m)
            .unwrap();
        // 7^5 = 16807
        assert_eq!(got, BigInt::from(807u32));

        let one = BigInt::from(3u32).modpow(&BigInt::zero(), &m).unwrap();
        assert_eq!(one, BigInt::one());
    }

    #[test]
    fn small_inverses() {
        let m = BigInt::from(7u32);
        assert_eq!(BigInt::from(3u32).modinv(&m), Some(BigInt::from(5u32)));
        assert_eq!(BigInt::from(1u32).modinv(&m), Some(BigInt::one()));
        // 2 and 4 share a factor: no inverse.
        assert_eq!(BigInt::from(2u32).modinv(&BigInt::from(4u32)), None);
        assert_eq!(BigInt::zero().modinv(&m), None);
    }

    #[test]
    fn inverse_of_negative_value() {
        let m = BigInt::from(7u32);
        // -3 ≡ 4 (mod 7), and 4·2 = 8 ≡ 1.
        assert_eq!(BigInt::from(-3i32).modinv(&m), Some(BigInt::from(2u32)));
    }

    #[test]
    fn field_inverse() {
        let p = secp256k1_p();
        let x = BigInt::from_str_radix(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .unwrap();
        let inv = x.modinv(&p).unwrap();
        assert_eq!((&inv * &x).rem_euclid(&p).unwrap(), BigInt::one());
        // Fermat gives the same inverse: x^(p-2) mod p.
        let p_minus_2 = &p - &BigInt::from(2u32);
        assert_eq!(x.modpow(&p_minus_2, &p).unwrap(), inv);
    }

    proptest! {
        #[test]
        fn fuzzy_modpow(a in arb_bigint(), e in 0u32..2000, m in arb_bigint()) {
            prop_assume!(m.abs() > BigInt::one());
            let m = m.abs();
            let exp = BigInt::from(e);
            let got = a.modpow(&exp, &m).unwrap();
            let want = to_ref(&a).modpow(&to_ref(&exp), &to_ref(&m));
            prop_assert_eq!(to_ref(&got), want);
        }

        #[test]
        fn fuzzy_prime_field_inverse(bytes in proptest::collection::vec(any::<u8>(), 1..32)) {
            let p = secp256k1_p();
            let a = BigInt::from_bytes_be(&bytes);
            prop_assume!(!a.is_zero());
            let inv = a.modinv(&p).unwrap();
            prop_assert_eq!((&inv * &a).rem_euclid(&p).unwrap(), BigInt::one());
        }
    }
}
