//! BIP-32 master keys and child derivation.

use crate::{Error, Result};
use bignum::BigInt;
use hashes::hmac_sha512;
use secp256k1::{AffinePoint, Secp256k1};

/// First hardened child index (2³¹).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// An extended private key: the secret scalar plus the chain code that
/// makes child derivation deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Xprv {
    key: BigInt,
    chain_code: [u8; 32],
}

impl Xprv {
    /// Master key and chain code: HMAC-SHA-512(key = "Bitcoin seed",
    /// msg = seed), split 32/32.
    pub fn from_seed(seed: &[u8; 64]) -> Self {
        let mac = hmac_sha512(b"Bitcoin seed", seed);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&mac[32..]);
        Xprv {
            key: BigInt::from_bytes_be(&mac[..32]),
            chain_code,
        }
    }

    /// Wraps an existing key scalar and chain code.
    pub fn new(key: BigInt, chain_code: [u8; 32]) -> Self {
        Xprv { key, chain_code }
    }

    /// The secret scalar.
    pub fn key(&self) -> &BigInt {
        &self.key
    }

    /// The secret as 32 big-endian bytes.
    pub fn key_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.key.to_bytes_be_padded(32));
        out
    }

    /// The chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// The public point k·G.
    pub fn public_point(&self) -> Result<AffinePoint> {
        let curve = Secp256k1::new();
        Ok(curve.mul_base(&self.key)?)
    }

    /// The 33-byte compressed public key.
    pub fn public_key(&self) -> Result<[u8; 33]> {
        Ok(self.public_point()?.to_compressed())
    }

    /// Derives the child at `index`.
    ///
    /// Indices below 2³¹ use the normal layout
    /// (compressed parent public key ‖ index); 2³¹ and above use the
    /// hardened layout (0x00 ‖ parent key ‖ index). Either way the child
    /// key is (parent + IL) mod n with the right half as chain code.
    pub fn derive_child(&self, index: u32) -> Result<Xprv> {
        let mut data = Vec::with_capacity(37);
        if index >= HARDENED_OFFSET {
            data.push(0x00);
            data.extend_from_slice(&self.key_bytes());
        } else {
            data.extend_from_slice(&self.public_key()?);
        }
        data.extend_from_slice(&index.to_be_bytes());

        let mac = hmac_sha512(&self.chain_code, &data);
        let curve = Secp256k1::new();
        let tweak = BigInt::from_bytes_be(&mac[..32]);
        let key = (&tweak + &self.key).rem_euclid(&curve.n)?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&mac[32..]);
        Ok(Xprv { key, chain_code })
    }

    /// The public half of this extended key.
    pub fn to_xpub(&self) -> Result<Xpub> {
        Ok(Xpub {
            point: self.public_point()?,
            chain_code: self.chain_code,
        })
    }
}

/// An extended public key; derives non-hardened children without ever
/// seeing a private key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Xpub {
    point: AffinePoint,
    chain_code: [u8; 32],
}

impl Xpub {
    /// Reconstructs the parent point from its compressed form.
    pub fn from_compressed(key: &[u8], chain_code: [u8; 32]) -> Result<Self> {
        let bytes: &[u8; 33] = key.try_into().map_err(|_| Error::InvalidLength {
            expected: 33,
            actual: key.len(),
        })?;
        let curve = Secp256k1::new();
        Ok(Xpub {
            point: curve.from_compressed(bytes)?,
            chain_code,
        })
    }

    /// The public point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// The chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// The 33-byte compressed encoding.
    pub fn compressed(&self) -> [u8; 33] {
        self.point.to_compressed()
    }

    /// Derives the non-hardened child at `index`:
    /// child point = parent + IL·G. Hardened indices need the private
    /// parent and are rejected.
    pub fn derive_child(&self, index: u32) -> Result<Xpub> {
        if index >= HARDENED_OFFSET {
            return Err(Error::HardenedFromPublic);
        }
        let mut data = Vec::with_capacity(37);
        data.extend_from_slice(&self.compressed());
        data.extend_from_slice(&index.to_be_bytes());

        let mac = hmac_sha512(&self.chain_code, &data);
        let curve = Secp256k1::new();
        let tweak = BigInt::from_bytes_be(&mac[..32]);
        let point = curve.add(&self.point, &curve.mul_base(&tweak)?)?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&mac[32..]);
        Ok(Xpub { point, chain_code })
    }
}
