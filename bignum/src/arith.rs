//! Addition, subtraction and multiplication.
//!
//! The magnitude-only helpers work on little-endian byte slices; the
//! operator impls layer the four-case sign table on top of them.

use crate::BigInt;
use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

/// Compares two little-endian magnitudes numerically.
pub(crate) fn mag_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let (ta, tb) = (top(a), top(b));
    if ta != tb {
        return ta.cmp(&tb);
    }
    for i in (0..ta).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Index one past the highest non-zero byte.
fn top(m: &[u8]) -> usize {
    let mut len = m.len();
    while len > 0 && m[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// |a| + |b|.
pub(crate) fn mag_add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u16;
    for i in 0..len {
        let sum = *a.get(i).unwrap_or(&0) as u16 + *b.get(i).unwrap_or(&0) as u16 + carry;
        out.push(sum as u8);
        carry = sum >> 8;
    }
    out.push(carry as u8);
    out
}

/// |a| − |b|, requiring |a| ≥ |b|.
pub(crate) fn mag_sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(mag_cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i16;
    for i in 0..a.len() {
        let diff = a[i] as i16 - *b.get(i).unwrap_or(&0) as i16 - borrow;
        out.push(diff as u8);
        borrow = i16::from(diff < 0);
    }
    out
}

/// |a| · |b|, schoolbook with 8×8→16-bit partial products.
pub(crate) fn mag_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; a.len() + b.len()];
    for (i, &bd) in b.iter().enumerate() {
        if bd == 0 {
            continue;
        }
        let mut carry = 0u16;
        for (j, &ad) in a.iter().enumerate() {
            let t = ad as u16 * bd as u16 + out[i + j] as u16 + carry;
            out[i + j] = t as u8;
            carry = t >> 8;
        }
        out[i + a.len()] = carry as u8;
    }
    out
}

/// a + b with signs resolved per the standard four-case table.
fn signed_add(a: &BigInt, b: &BigInt) -> BigInt {
    if a.negative == b.negative {
        return BigInt::from_mag(a.negative, mag_add(&a.mag, &b.mag));
    }
    match mag_cmp(&a.mag, &b.mag) {
        Ordering::Less => BigInt::from_mag(b.negative, mag_sub(&b.mag, &a.mag)),
        _ => BigInt::from_mag(a.negative, mag_sub(&a.mag, &b.mag)),
    }
}

fn signed_mul(a: &BigInt, b: &BigInt) -> BigInt {
    BigInt::from_mag(a.negative != b.negative, mag_mul(&a.mag, &b.mag))
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        signed_add(self, rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        signed_add(&self, &rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        signed_add(self, &rhs.neg())
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        signed_add(&self, &rhs.neg())
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        signed_mul(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        signed_mul(&self, &rhs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_mag(!self.negative, self.mag.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{arb_bigint, from_ref, to_ref};
    use crate::BigInt;
    use proptest::prelude::*;

    #[test]
    fn sign_table() {
        let a = BigInt::from(300u32);
        let b = BigInt::from(100u32);
        assert_eq!(&a + &b, BigInt::from(400u32));
        assert_eq!(&a - &b, BigInt::from(200u32));
        assert_eq!(&b - &a, BigInt::from(-200i32));
        assert_eq!(&(-&a) + &b, BigInt::from(-200i32));
        assert_eq!(&(-&a) - &(-&b), BigInt::from(-200i32));
        assert_eq!(&(-&a) * &b, BigInt::from(-30000i32));
        assert_eq!(&(-&a) * &(-&b), BigInt::from(30000i32));
    }

    #[test]
    fn add_cancels_to_zero() {
        let a = BigInt::from(12345u32);
        let z = &a + &(-&a);
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn carries_across_bytes() {
        let a = BigInt::from_bytes_be(&[0xff, 0xff, 0xff]);
        assert_eq!((&a + &BigInt::one()).to_bytes_be(), vec![1, 0, 0, 0]);
        let sq = &a * &a;
        assert_eq!(to_ref(&sq), to_ref(&a) * to_ref(&a));
    }

    proptest! {
        #[test]
        fn fuzzy_add(a in arb_bigint(), b in arb_bigint()) {
            prop_assert_eq!(to_ref(&(&a + &b)), to_ref(&a) + to_ref(&b));
        }

        #[test]
        fn fuzzy_sub(a in arb_bigint(), b in arb_bigint()) {
            prop_assert_eq!(to_ref(&(&a - &b)), to_ref(&a) - to_ref(&b));
        }

        #[test]
        fn fuzzy_mul(a in arb_bigint(), b in arb_bigint()) {
            prop_assert_eq!(to_ref(&(&a * &b)), to_ref(&a) * to_ref(&b));
        }

        #[test]
        fn addition_associates(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn multiplication_distributes(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn multiplication_commutes(a in arb_bigint(), b in arb_bigint()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn round_trip_via_reference(a in arb_bigint(), b in arb_bigint()) {
            let sum = to_ref(&a) + to_ref(&b);
            prop_assert_eq!(&a + &b, from_ref(&sum));
        }
    }
}
