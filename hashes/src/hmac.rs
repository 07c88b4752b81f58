//! HMAC-SHA-512 (RFC 2104 with a 128-byte block).

use crate::sha512::{sha512, Sha512};

/// Keyed HMAC-SHA-512 context.
///
/// Keeps snapshots of the inner and outer states taken right after the key
/// pads were absorbed, so [`HmacSha512::finalize_reset`] can start the next
/// message without re-processing the key.
#[derive(Clone)]
pub struct HmacSha512 {
    inner: Sha512,
    outer: Sha512,
    inner_snapshot: Sha512,
    outer_snapshot: Sha512,
}

impl HmacSha512 {
    /// Prepares a context for `key`. Keys longer than the 128-byte block
    /// are replaced by their SHA-512 digest; shorter keys are zero-padded.
    pub fn new(key: &[u8]) -> Self {
        let mut padded = [0u8; 128];
        if key.len() > 128 {
            padded[..64].copy_from_slice(&sha512(key));
        } else {
            padded[..key.len()].copy_from_slice(key);
        }

        let mut ipad = [0u8; 128];
        let mut opad = [0u8; 128];
        for i in 0..128 {
            ipad[i] = padded[i] ^ 0x36;
            opad[i] = padded[i] ^ 0x5c;
        }

        let mut inner = Sha512::new();
        inner.update(&ipad);
        let mut outer = Sha512::new();
        outer.update(&opad);

        HmacSha512 {
            inner_snapshot: inner.clone(),
            outer_snapshot: outer.clone(),
            inner,
            outer,
        }
    }

    /// Absorbs message bytes.
    pub fn update(&mut self, message: &[u8]) {
        self.inner.update(message);
    }

    /// Produces the MAC and consumes the context.
    pub fn finalize(self) -> [u8; 64] {
        let digest = self.inner.finalize();
        let mut outer = self.outer;
        outer.update(&digest);
        outer.finalize()
    }

    /// Produces the MAC, then restores the post-key snapshots so the
    /// context is ready for a fresh message under the same key.
    pub fn finalize_reset(&mut self) -> [u8; 64] {
        let digest = self.inner.clone().finalize();
        let mut outer = self.outer_snapshot.clone();
        outer.update(&digest);
        self.inner = self.inner_snapshot.clone();
        self.outer = self.outer_snapshot.clone();
        outer.finalize()
    }
}

/// One-shot HMAC-SHA-512.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut ctx = HmacSha512::new(key);
    ctx.update(message);
    ctx.finalize()
}
