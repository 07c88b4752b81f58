//! Single-block PBKDF2-HMAC-SHA-512 (RFC 8018).

use crate::hmac::HmacSha512;

/// Derives one 64-byte block: U₁ = HMAC(password, salt ‖ 1_be32),
/// Uₖ = HMAC(password, Uₖ₋₁), output = U₁ ⊕ … ⊕ U_iterations.
///
/// One block of SHA-512 output is all BIP-39 seed derivation needs, so no
/// further blocks are produced. The keyed HMAC state is reset between
/// iterations instead of being rebuilt from the password each time.
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], iterations: u32) -> [u8; 64] {
    let mut mac = HmacSha512::new(password);
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut u = mac.finalize_reset();
    let mut out = u;

    for _ in 1..iterations {
        mac.update(&u);
        u = mac.finalize_reset();
        for (acc, byte) in out.iter_mut().zip(u.iter()) {
            *acc ^= byte;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pbkdf2_hmac_sha512;
    use hex_literal::hex;

    #[test]
    fn single_iteration() {
        assert_eq!(
            pbkdf2_hmac_sha512(b"password", b"salt", 1),
            hex!(
                "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252"
                "c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
            )
        );
    }

    #[test]
    fn many_iterations() {
        assert_eq!(
            pbkdf2_hmac_sha512(
                b"passwordPASSWORDpassword",
                b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
                4096
            ),
            hex!(
                "8c0511f4c6e597c6ac6315d8f0362e225f3c501495ba23b868c005174dc4ee71"
                "115b59f9e60cd9532fa33e0f75aefe30225c583a186cd82bd4daea9724a3d3b8"
            )
        );
    }
}
