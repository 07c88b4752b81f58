//! Entropy → checksum → 24-word mnemonic phrase.

use crate::words::WORDS;
use crate::{Error, Result};
use hashes::sha256;
use rand_core::{OsRng, TryRngCore};

/// A 24-word BIP-39 mnemonic derived from 256 bits of entropy.
///
/// Generation-only: phrases are produced from entropy, never parsed back,
/// so there is no word lookup or checksum verification path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mnemonic {
    entropy: [u8; 32],
    checksum: u8,
    indices: [u16; 24],
    phrase: String,
}

impl Mnemonic {
    /// Builds the mnemonic for 32 bytes of big-endian entropy.
    ///
    /// The checksum byte is the first byte of SHA-256(entropy); the 264-bit
    /// stream entropy ‖ checksum splits into 24 indices of 11 bits each.
    pub fn from_entropy(entropy: [u8; 32]) -> Self {
        let checksum = sha256(&entropy)[0];
        let mut data = [0u8; 33];
        data[..32].copy_from_slice(&entropy);
        data[32] = checksum;

        let mut indices = [0u16; 24];
        for (i, idx) in indices.iter_mut().enumerate() {
            let mut v = 0u16;
            for bit in 0..11 {
                let pos = i * 11 + bit;
                let set = (data[pos / 8] >> (7 - pos % 8)) & 1;
                v = (v << 1) | set as u16;
            }
            *idx = v;
        }

        let phrase = indices
            .iter()
            .map(|&i| WORDS[i as usize])
            .collect::<Vec<_>>()
            .join(" ");

        Mnemonic {
            entropy,
            checksum,
            indices,
            phrase,
        }
    }

    /// The raw entropy.
    pub fn entropy(&self) -> &[u8; 32] {
        &self.entropy
    }

    /// The appended checksum byte.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The 24 word-list indices.
    pub fn word_indices(&self) -> &[u16; 24] {
        &self.indices
    }

    /// The space-joined phrase.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

/// 32 bytes from the operating-system CSPRNG.
pub fn random_entropy() -> Result<[u8; 32]> {
    let mut entropy = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|_| Error::EntropySource)?;
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::Mnemonic;

    #[test]
    fn zero_entropy_vector() {
        let m = Mnemonic::from_entropy([0u8; 32]);
        assert_eq!(m.checksum(), 0x66);
        assert_eq!(m.word_indices()[..23], [0u16; 23]);
        assert_eq!(m.word_indices()[23], 102);
        assert_eq!(
            m.phrase(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon abandon abandon art"
        );
    }

    #[test]
    fn repeating_0x80_vector() {
        let m = Mnemonic::from_entropy([0x80u8; 32]);
        assert_eq!(m.checksum(), 189);
        assert_eq!(
            m.word_indices(),
            &[
                1028, 32, 257, 8, 64, 514, 16, 128, 1028, 32, 257, 8, 64, 514, 16, 128,
                1028, 32, 257, 8, 64, 514, 16, 189
            ]
        );
        assert_eq!(
            m.phrase(),
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage \
             absurd amount doctor acoustic avoid letter advice cage absurd amount doctor \
             acoustic bless"
        );
    }

    #[test]
    fn repeating_0x7f_vector() {
        let m = Mnemonic::from_entropy([0x7fu8; 32]);
        assert_eq!(
            m.phrase(),
            "legal winner thank year wave sausage worth useful legal winner thank year \
             wave sausage worth useful legal winner thank year wave sausage worth title"
        );
    }

    #[test]
    fn random_entropy_is_not_constant() {
        let a = super::random_entropy().unwrap();
        let b = super::random_entropy().unwrap();
        assert_ne!(a, b);
    }
}
