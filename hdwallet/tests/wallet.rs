//! End-to-end pipeline tests: entropy → mnemonic → seed → master keys →
//! public key → address.

use hdwallet::{address, seed_from_mnemonic, Mnemonic, Xprv};
use hex_literal::hex;

struct WalletVector {
    entropy: [u8; 32],
    mnemonic_tail: &'static str,
    seed: [u8; 64],
    master_key: [u8; 32],
    chain_code: [u8; 32],
    compressed_key: [u8; 33],
    address: &'static str,
}

fn check(v: &WalletVector) {
    let mnemonic = Mnemonic::from_entropy(v.entropy);
    assert!(mnemonic.phrase().ends_with(v.mnemonic_tail));

    let seed = seed_from_mnemonic(mnemonic.phrase(), "");
    assert_eq!(seed, v.seed);

    let master = Xprv::from_seed(&seed);
    assert_eq!(master.key_bytes(), v.master_key);
    assert_eq!(master.chain_code(), &v.chain_code);

    let public = master.public_key().unwrap();
    assert_eq!(public, v.compressed_key);
    assert_eq!(address::p2pkh_address(&public), v.address);
}

#[test]
fn all_zero_entropy() {
    check(&WalletVector {
        entropy: [0u8; 32],
        mnemonic_tail: "abandon abandon art",
        seed: hex!(
            "408b285c123836004f4b8842c89324c1f01382450c0d439af345ba7fc49acf70"
            "5489c6fc77dbd4e3dc1dd8cc6bc9f043db8ada1e243c4a0eafb290d399480840"
        ),
        master_key: hex!("235b34cd7c9f6d7e4595ffe9ae4b1cb5606df8aca2b527d20a07c8f56b2342f4"),
        chain_code: hex!("f40eaad21641ca7cb5ac00f9ce21cac9ba070bb673a237f7bce57acda54386a4"),
        compressed_key: hex!(
            "025660b70c8770245fb97ce9a811885e8045a1f333a799dcd3035788606cc55754"
        ),
        address: "18gHTVYFb1nVDjGbo4Ys2fm4D88iVZ3vXZ",
    });
}

#[test]
fn repeating_0x80_entropy() {
    check(&WalletVector {
        entropy: [0x80u8; 32],
        mnemonic_tail: "amount doctor acoustic bless",
        seed: hex!(
            "848bbe19cad445e46f35fd3d1a89463583ac2b60b5eb4cfcf955731775a5d9e1"
            "7a81a71613fed83f1ae27b408478fdec2bbc75b5161d1937aa7cdf4ad686ef5f"
        ),
        master_key: hex!("f2549ffe9b43f308d1edfb00085d00569a81f9fbf4822f781b46d5361aaebb18"),
        chain_code: hex!("a626575bdcb23497dc1131238da95554cf623c54927e8ceb9d1b33bbc0cd31bd"),
        compressed_key: hex!(
            "02225ecb83bc2a68bf16d40b94cdf7c791c07c04645eab5a88f413d9a446b66e1d"
        ),
        address: "19vEb43Xwfm57gRZyq2n8hkUSWFNC6kP3Y",
    });
}

#[test]
fn repeating_0x7f_entropy() {
    check(&WalletVector {
        entropy: [0x7fu8; 32],
        mnemonic_tail: "wave sausage worth title",
        seed: hex!(
            "761914478ebf6fe16185749372e91549361af22b386de46322cf8b1ba7e92e80"
            "c4af05196f742be1e63aab603899842ddadf4e7248d8e43870a4b6ff9bf16324"
        ),
        master_key: hex!("e56738773f7edadb03f92d94be84e2deaf8be6ea1e84f321a0b812c5e3e19bf3"),
        chain_code: hex!("d45cbad2fc9d5a5582d22d080c212dfebd9a41ce36b222c2fb8ddb66de27b983"),
        compressed_key: hex!(
            "029466171e75e35eabe7f7a3e4cc8aa5c035553fcd08b9990085878d40dc0af743"
        ),
        address: "12Em4hMFzJKGeck55ZpY6TcF7F1qF5rCue",
    });
}

#[test]
fn random_wallets_are_internally_consistent() {
    let entropy = hdwallet::random_entropy().unwrap();
    let mnemonic = Mnemonic::from_entropy(entropy);
    assert_eq!(mnemonic.phrase().split(' ').count(), 24);

    let seed = seed_from_mnemonic(mnemonic.phrase(), "pass");
    let master = Xprv::from_seed(&seed);

    // Private and public derivation must agree for a normal child.
    let child = master.derive_child(7).unwrap();
    let child_pub = master.to_xpub().unwrap().derive_child(7).unwrap();
    assert_eq!(child.public_key().unwrap(), child_pub.compressed());

    let addr = address::p2pkh_address(&child_pub.compressed());
    assert!(addr.starts_with('1'));
}
