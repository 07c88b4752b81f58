//! The interactive numeric menu.
//!
//! Mirrors the command surface: a top-level menu of four entries, each
//! prompting for its inputs with "press Enter for random" where a random
//! value makes sense. No action is fatal; errors print and the loop
//! returns to the top.

use crate::commands;
use crate::input::{clear_screen, pause, read_number, read_string};
use anyhow::Result;
use bignum::BigInt;
use hdwallet::{seed_from_mnemonic, Mnemonic, Xprv};

const BANNER: &str = concat!("bitcoin-math v", env!("CARGO_PKG_VERSION"));

fn banner() {
    clear_screen();
    println!("{BANNER}");
    println!();
}

pub fn run() -> Result<()> {
    loop {
        banner();
        println!("1. Master keys");
        println!("2. Child keys");
        println!("3. Base converter");
        println!("4. Functions");
        println!();
        match read_number("> ", 1, 0, 4) {
            1 => finish(master_keys()),
            2 => child_keys(),
            3 => finish(base_converter()),
            4 => functions(),
            _ => break,
        }
    }
    Ok(())
}

/// Runs one menu action; errors are reported, never propagated.
fn finish(result: Result<()>) {
    if let Err(err) = result {
        log::warn!("menu action failed: {err:#}");
        println!("error: {err:#}");
    }
    println!();
    pause();
}

fn master_keys() -> Result<()> {
    banner();
    let entropy_str = read_string("Entropy (press Enter for random): ", 511);

    let entropy = if starts_alphanumeric(&entropy_str) {
        let base = match read_number("Base (2 - 64): ", 2, 0, 64) {
            b if b < 2 => 16,
            b => b,
        };
        BigInt::from_str_radix(&entropy_str, base)?
    } else {
        BigInt::from_bytes_be(&hdwallet::random_entropy()?)
    };

    let passphrase = read_string("Passphrase (optional): ", 511);

    banner();
    commands::master_report(&entropy, &passphrase)
}

fn child_keys() {
    banner();
    println!("1. Normal child");
    println!("2. Hardened child");
    println!("3. Child public key");
    println!();
    match read_number("> ", 1, 0, 3) {
        1 => finish(private_child(false)),
        2 => finish(private_child(true)),
        3 => finish(public_child()),
        _ => {}
    }
}

/// Normal and hardened derivation share every prompt except the index
/// range.
fn private_child(hardened: bool) -> Result<()> {
    banner();
    let key_str = read_string("Parent private key (press Enter for random): ", 66);

    let (parent, entropy) = if starts_alphanumeric(&key_str) {
        let key = commands::parse_hex(&key_str)?;
        let chain_str = read_string("Parent chain code: ", 66);
        let chain = commands::parse_chain_code(&chain_str)?;
        (Xprv::new(key, chain), None)
    } else {
        let entropy = hdwallet::random_entropy()?;
        let mnemonic = Mnemonic::from_entropy(entropy);
        let seed = seed_from_mnemonic(mnemonic.phrase(), "");
        (Xprv::from_seed(&seed), Some(BigInt::from_bytes_be(&entropy)))
    };

    let index = if hardened {
        read_number("Index (2147483648 to 4294967295): ", 10, 2_147_483_648, u32::MAX)
    } else {
        read_number("Index (0 to 2147483647): ", 10, 0, 2_147_483_647)
    };

    banner();
    commands::child_report(&parent, index, entropy.as_ref())
}

fn public_child() -> Result<()> {
    banner();
    let pubkey_str = read_string("Parent public key compressed: ", 68);
    if !starts_alphanumeric(&pubkey_str) {
        return Ok(());
    }
    let pubkey = commands::parse_hex(&pubkey_str)?;
    let chain_str = read_string("Parent chain code: ", 66);
    let chain = commands::parse_chain_code(&chain_str)?;
    let index = read_number("Index (0 to 2147483647): ", 10, 0, 2_147_483_647);

    banner();
    commands::public_child_report(&pubkey, chain, index)
}

fn base_converter() -> Result<()> {
    banner();
    let number_str = read_string("Number (press Enter for random): ", 2047);

    let (value, base) = if starts_alphanumeric(&number_str) {
        let base = read_number("Base (2 - 64): ", 3, 2, 64);
        (BigInt::from_str_radix(&number_str, base)?, base)
    } else {
        (BigInt::from_bytes_be(&hdwallet::random_entropy()?), 16)
    };

    banner();
    commands::convert_report(&value, base as i32)
}

fn functions() {
    banner();
    println!("1. P2PKH");
    println!("2. Secp256k1 point addition");
    println!("3. Secp256k1 point doubling");
    println!("4. Secp256k1 scalar multiplication");
    println!();
    match read_number("> ", 1, 0, 4) {
        1 => finish(p2pkh()),
        2 => finish(point_addition()),
        3 => finish(point_doubling()),
        4 => finish(scalar_multiplication()),
        _ => {}
    }
}

fn p2pkh() -> Result<()> {
    banner();
    let pubkey_str = read_string("Public key (compressed): ", 68);
    let pubkey = commands::parse_hex(&pubkey_str)?;
    banner();
    commands::p2pkh_report(&pubkey)
}

fn point_addition() -> Result<()> {
    banner();
    let a = read_point("Point 1")?;
    let b = read_point("Point 2")?;
    banner();
    commands::point_add_report(&a, &b)
}

fn point_doubling() -> Result<()> {
    banner();
    let a = read_point("Point")?;
    banner();
    commands::point_double_report(&a)
}

fn scalar_multiplication() -> Result<()> {
    banner();
    let scalar_str = read_string("Multiplier: ", 66);
    let scalar = commands::parse_hex(&scalar_str)?;
    banner();
    commands::point_mul_report(&scalar)
}

fn read_point(label: &str) -> Result<secp256k1::AffinePoint> {
    let x = commands::parse_hex(&read_string(&format!("{label} x: "), 66))?;
    let y = commands::parse_hex(&read_string(&format!("{label} y: "), 66))?;
    Ok(secp256k1::AffinePoint::new(x, y))
}

fn starts_alphanumeric(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}
