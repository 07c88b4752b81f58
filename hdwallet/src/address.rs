//! Legacy P2PKH address construction.

use crate::base58;
use hashes::{ripemd160, sha256};

/// Version byte for mainnet pay-to-public-key-hash.
const P2PKH_VERSION: u8 = 0x00;

/// HASH160: RIPEMD-160 of SHA-256.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Builds the Base58Check P2PKH address for a compressed public key:
/// version ‖ HASH160(key) ‖ first four bytes of the double-SHA-256
/// checksum, Base58-encoded.
pub fn p2pkh_address(compressed_key: &[u8]) -> String {
    let mut payload = Vec::with_capacity(25);
    payload.push(P2PKH_VERSION);
    payload.extend_from_slice(&hash160(compressed_key));
    let checksum = sha256(&sha256(&payload));
    payload.extend_from_slice(&checksum[..4]);
    base58::encode(&payload)
}
