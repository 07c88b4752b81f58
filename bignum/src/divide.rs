//! Quotient/remainder via Knuth Algorithm D.

use crate::arith::mag_cmp;
use crate::{BigInt, Error, Result};
use core::cmp::Ordering;

impl BigInt {
    /// Computes `(quotient, remainder)` of `self / rhs`.
    ///
    /// Signs follow truncating division: sign(q) = sign(a) ⊕ sign(b) and
    /// sign(r) = sign(a), so `q·b + r = a` always holds and `|r| < |b|`.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q_mag, r_mag) = match mag_cmp(&self.mag, &rhs.mag) {
            Ordering::Equal => (vec![1], vec![0]),
            Ordering::Less => (vec![0], self.mag.clone()),
            Ordering::Greater => mag_div_rem(&self.mag, &rhs.mag),
        };
        let q = BigInt::from_mag(self.negative != rhs.negative, q_mag);
        let r = BigInt::from_mag(self.negative, r_mag);
        Ok((q, r))
    }

    /// The non-negative remainder of `self` modulo a positive `m`:
    /// a negative raw remainder gets `m` added back.
    pub fn rem_euclid(&self, m: &BigInt) -> Result<BigInt> {
        let (_, mut r) = self.div_rem(m)?;
        if r.is_negative() {
            r = &r + m;
        }
        Ok(r)
    }
}

/// |a| / |b| for normalized magnitudes with |a| > |b| > 0.
fn mag_div_rem(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let n = b.len();
    if n == 1 {
        return short_div_rem(a, b[0]);
    }

    // Normalize so the divisor's high bit is set, per Algorithm D.
    let sh = b[n - 1].leading_zeros();
    let an = shl_bits(a, sh, a.len() + 1);
    let bn = shl_bits(b, sh, n);

    let m = a.len() - n;
    let mut an = an;
    let mut q = vec![0u8; m + 1];

    for j in (0..=m).rev() {
        // Estimate the quotient digit from the top two dividend bytes,
        // then apply the classic at-most-two-step correction.
        let top = (an[j + n] as u32) << 8 | an[j + n - 1] as u32;
        let mut q_hat = top / bn[n - 1] as u32;
        let mut r_hat = top % bn[n - 1] as u32;
        while q_hat >= 256
            || q_hat * bn[n - 2] as u32 > (r_hat << 8) + an[j + n - 2] as u32
        {
            q_hat -= 1;
            r_hat += bn[n - 1] as u32;
            if r_hat >= 256 {
                break;
            }
        }

        // Multiply and subtract.
        let mut borrow = 0i32;
        for i in 0..n {
            let p = q_hat * bn[i] as u32;
            let t = an[i + j] as i32 - borrow - (p & 0xff) as i32;
            an[i + j] = t as u8;
            borrow = (p >> 8) as i32 - (t >> 8);
        }
        let t = an[j + n] as i32 - borrow;
        an[j + n] = t as u8;
        q[j] = q_hat as u8;

        // Rare over-estimate: add the divisor back.
        if t < 0 {
            q[j] -= 1;
            let mut carry = 0i32;
            for i in 0..n {
                let t = an[i + j] as i32 + bn[i] as i32 + carry;
                an[i + j] = t as u8;
                carry = t >> 8;
            }
            an[j + n] = (an[j + n] as i32 + carry) as u8;
        }
    }

    (q, shr_bits(&an[..=n], sh, n))
}

/// Division by a single byte.
fn short_div_rem(a: &[u8], d: u8) -> (Vec<u8>, Vec<u8>) {
    let mut q = vec![0u8; a.len()];
    let mut rem = 0u32;
    for i in (0..a.len()).rev() {
        let cur = (rem << 8) | a[i] as u32;
        q[i] = (cur / d as u32) as u8;
        rem = cur % d as u32;
    }
    (q, vec![rem as u8])
}

/// Left-shifts a magnitude by 0..=7 bits into a buffer of `out_len` bytes.
fn shl_bits(src: &[u8], sh: u32, out_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; out_len];
    let mut carry = 0u16;
    for (i, &d) in src.iter().enumerate() {
        let v = ((d as u16) << sh) | carry;
        out[i] = v as u8;
        carry = v >> 8;
    }
    if src.len() < out_len {
        out[src.len()] = carry as u8;
    }
    out
}

/// Right-shifts `src` by 0..=7 bits, keeping `len` low-order bytes.
fn shr_bits(src: &[u8], sh: u32, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    for i in 0..len {
        let lo = src[i] as u16;
        let hi = *src.get(i + 1).unwrap_or(&0) as u16;
        out[i] = (((hi << 8) | lo) >> sh) as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::testutil::{arb_bigint, to_ref};
    use crate::{BigInt, Error};
    use proptest::prelude::*;

    #[test]
    fn division_by_zero_is_an_error() {
        let a = BigInt::from(42u32);
        assert_eq!(a.div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.rem_euclid(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn small_quotients() {
        let a = BigInt::from(1000u32);
        let b = BigInt::from(7u32);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from(142u32));
        assert_eq!(r, BigInt::from(6u32));

        // |a| < |b| leaves the dividend as remainder.
        let (q, r) = b.div_rem(&a).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, b);

        // |a| == |b|.
        let (q, r) = b.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::one());
        assert!(r.is_zero());
    }

    #[test]
    fn truncating_sign_rules() {
        let a = BigInt::from(-7i32);
        let b = BigInt::from(2u32);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from(-3i32));
        assert_eq!(r, BigInt::from(-1i32));

        let (q, r) = a.div_rem(&BigInt::from(-2i32)).unwrap();
        assert_eq!(q, BigInt::from(3u32));
        assert_eq!(r, BigInt::from(-1i32));

        assert_eq!(a.rem_euclid(&b).unwrap(), BigInt::one());
    }

    #[test]
    fn multi_byte_vectors() {
        let a = BigInt::from_str_radix(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            16,
        )
        .unwrap();
        let b = BigInt::from_str_radix("0123456789abcdef0123456789abcdef", 16).unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(to_ref(&(&(&q * &b) + &r)), to_ref(&a));
        assert!(r < b);
    }

    proptest! {
        #[test]
        fn fuzzy_division_invariant(a in arb_bigint(), b in arb_bigint()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.is_negative(), a.is_negative());
            }
            if !q.is_zero() {
                prop_assert_eq!(q.is_negative(), a.is_negative() != b.is_negative());
            }
        }

        #[test]
        fn fuzzy_matches_reference(a in arb_bigint(), b in arb_bigint()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(to_ref(&q), to_ref(&a) / to_ref(&b));
            prop_assert_eq!(to_ref(&r), to_ref(&a) % to_ref(&b));
        }

        #[test]
        fn fuzzy_rem_euclid(a in arb_bigint(), b in arb_bigint()) {
            prop_assume!(!b.is_zero());
            let m = b.abs();
            let r = a.rem_euclid(&m).unwrap();
            prop_assert!(!r.is_negative());
            prop_assert!(r < m);
            let diff = &a - &r;
            let (_, exact) = diff.div_rem(&m).unwrap();
            prop_assert!(exact.is_zero());
        }
    }
}
