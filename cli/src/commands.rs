//! Report printers shared by the subcommands and the interactive menu.

use crate::{ChildKind, Command, PointOp};
use anyhow::{Context, Result};
use bignum::BigInt;
use hdwallet::{address, seed_from_mnemonic, Mnemonic, Xprv, Xpub};
use secp256k1::{AffinePoint, Secp256k1};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Master {
            entropy,
            base,
            passphrase,
        } => {
            let entropy = match entropy {
                Some(s) => BigInt::from_str_radix(&s, base)
                    .with_context(|| format!("entropy is not a base-{base} number"))?,
                None => BigInt::from_bytes_be(&hdwallet::random_entropy()?),
            };
            master_report(&entropy, &passphrase)
        }
        Command::Child { kind } => match kind {
            ChildKind::Normal { key, chain, index }
            | ChildKind::Hardened { key, chain, index } => {
                let parent = Xprv::new(parse_hex(&key)?, parse_chain_code(&chain)?);
                child_report(&parent, index, None)
            }
            ChildKind::Public {
                pubkey,
                chain,
                index,
            } => public_child_report(&parse_hex(&pubkey)?, parse_chain_code(&chain)?, index),
        },
        Command::Convert { number, base } => {
            let value = BigInt::from_str_radix(&number, base)
                .with_context(|| format!("not a base-{base} number"))?;
            convert_report(&value, base as i32)
        }
        Command::P2pkh { pubkey } => p2pkh_report(&parse_hex(&pubkey)?),
        Command::Point { op } => match op {
            PointOp::Add { x1, y1, x2, y2 } => point_add_report(
                &point_from_hex(&x1, &y1)?,
                &point_from_hex(&x2, &y2)?,
            ),
            PointOp::Double { x, y } => point_double_report(&point_from_hex(&x, &y)?),
            PointOp::Mul { scalar } => point_mul_report(&parse_hex(&scalar)?),
        },
    }
}

/// Hex (with or without `0x`) to a big integer.
pub fn parse_hex(s: &str) -> Result<BigInt> {
    BigInt::from_str_radix(s, 16).context("not a hex number")
}

/// Hex to a 32-byte chain code.
pub fn parse_chain_code(s: &str) -> Result<[u8; 32]> {
    let n = parse_hex(s)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&n.to_bytes_be_padded(32));
    Ok(out)
}

fn point_from_hex(x: &str, y: &str) -> Result<AffinePoint> {
    Ok(AffinePoint::new(parse_hex(x)?, parse_hex(y)?))
}

fn hex_str(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Entropy → checksum → words → seed → master keys → address.
pub fn master_report(entropy: &BigInt, passphrase: &str) -> Result<()> {
    let mut entropy_bytes = [0u8; 32];
    entropy_bytes.copy_from_slice(&entropy.to_bytes_be_padded(32));
    log::debug!("deriving master keys from 32 bytes of entropy");

    println!("ENTROPY: {}", hex_str(&entropy_bytes));
    if !passphrase.is_empty() {
        println!("PASSPHRASE: {passphrase}");
    }
    println!();

    let mnemonic = Mnemonic::from_entropy(entropy_bytes);
    println!("CHECKSUM: {:#04x}", mnemonic.checksum());
    println!();

    let ids: Vec<String> = mnemonic.word_indices().iter().map(u16::to_string).collect();
    println!("BIP39 IDS: {}", ids.join(", "));
    println!();
    println!("MNEMONIC PHRASE: {}", mnemonic.phrase());
    println!();

    let seed = seed_from_mnemonic(mnemonic.phrase(), passphrase);
    println!("SEED: {}", hex_str(&seed));
    println!();

    let master = Xprv::from_seed(&seed);
    let public_point = master.public_point()?;
    let public_key = public_point.to_compressed();

    println!("MASTER PRIVATE KEY: {}", hex_str(&master.key_bytes()));
    println!("MASTER CHAIN CODE: {}", hex_str(master.chain_code()));
    println!("MASTER PUBLIC KEY COMPRESSED: {}", hex_str(&public_key));
    println!(" x: {:#x}", public_point.x);
    println!(" y: {:#x}", public_point.y);
    println!();

    println!("P2PKH ADDRESS: {}", address::p2pkh_address(&public_key));
    Ok(())
}

/// Parent keys, then the child at `index` (normal or hardened decided by
/// the index range). `entropy` is echoed when the parent was random.
pub fn child_report(parent: &Xprv, index: u32, entropy: Option<&BigInt>) -> Result<()> {
    if let Some(e) = entropy {
        println!("ENTROPY: {:#x}", e);
    }
    let parent_point = parent.public_point()?;
    println!("PARENT PRIVATE KEY: {}", hex_str(&parent.key_bytes()));
    println!("PARENT CHAIN CODE: {}", hex_str(parent.chain_code()));
    println!(
        "PARENT PUBLIC KEY COMPRESSED: {}",
        hex_str(&parent_point.to_compressed())
    );
    println!(" x: {:#x}", parent_point.x);
    println!(" y: {:#x}", parent_point.y);
    println!();
    println!("INDEX: {index}");
    println!();

    let child = parent.derive_child(index)?;
    let child_point = child.public_point()?;
    println!("CHILD PRIVATE KEY: {}", hex_str(&child.key_bytes()));
    println!("CHILD CHAIN CODE: {}", hex_str(child.chain_code()));
    println!(
        "CHILD PUBLIC KEY COMPRESSED: {}",
        hex_str(&child_point.to_compressed())
    );
    println!(" x: {:#x}", child_point.x);
    println!(" y: {:#x}", child_point.y);
    Ok(())
}

/// Public-only derivation: parent point recovered from its compressed
/// form, child point = parent + IL·G.
pub fn public_child_report(pubkey: &BigInt, chain_code: [u8; 32], index: u32) -> Result<()> {
    let compressed = pubkey.to_bytes_be_padded(33);
    let parent = Xpub::from_compressed(&compressed, chain_code)?;

    println!("PARENT CHAIN CODE: {}", hex_str(&chain_code));
    println!("PARENT PUBLIC KEY COMPRESSED: {}", hex_str(&compressed));
    println!(" x: {:#x}", parent.point().x);
    println!(" y: {:#x}", parent.point().y);
    println!();
    println!("INDEX: {index}");
    println!();

    let child = parent.derive_child(index)?;
    println!("CHILD CHAIN CODE: {}", hex_str(child.chain_code()));
    println!("CHILD PUBLIC KEY COMPRESSED: {}", hex_str(&child.compressed()));
    println!(" x: {:#x}", child.point().x);
    println!(" y: {:#x}", child.point().y);
    Ok(())
}

/// The base-converter table: the number in its own base, then every base
/// from 2 to 64.
pub fn convert_report(value: &BigInt, base: i32) -> Result<()> {
    println!("Number: {}", value.to_str_radix(base)?);
    println!("Base: {base}");
    println!();
    println!("Binary: {}", value.to_str_radix(-2)?);
    println!();
    println!("Octal: {}", value.to_str_radix(8)?);
    println!();
    println!("Decimal: {value}");
    println!();
    println!("Hex: {}", value.to_str_radix(16)?);
    println!();
    println!("Bitcoin base 58: {}", value.to_str_radix(58)?);
    println!();
    println!("Bytes: {}", value.to_str_radix(256)?);
    println!();
    for b in 2..=64i32 {
        // Uppercase hex in the sweep, as base 16 already had its line.
        let rendered = match b {
            16 => value.to_str_radix(-16)?,
            _ => value.to_str_radix(b)?,
        };
        println!("Base {b}: {rendered}");
        if b % 10 == 9 {
            println!();
        }
    }
    Ok(())
}

/// HASH160 + version + checksum + Base58.
pub fn p2pkh_report(pubkey: &BigInt) -> Result<()> {
    let compressed = pubkey.to_bytes_be_padded(33);
    println!("PUBLIC KEY (COMPRESSED): {}", hex_str(&compressed));
    println!();
    println!("P2PKH: {}", address::p2pkh_address(&compressed));
    Ok(())
}

pub fn point_add_report(a: &AffinePoint, b: &AffinePoint) -> Result<()> {
    let curve = Secp256k1::new();
    let sum = curve.add(a, b)?;
    println!("POINT 1:");
    println!("x: {:#x}", a.x);
    println!("y: {:#x}", a.y);
    println!();
    println!("POINT 2:");
    println!("x: {:#x}", b.x);
    println!("y: {:#x}", b.y);
    println!();
    println!("POINT 1 + POINT 2:");
    println!("x: {:#x}", sum.x);
    println!("y: {:#x}", sum.y);
    Ok(())
}

pub fn point_double_report(a: &AffinePoint) -> Result<()> {
    let curve = Secp256k1::new();
    let doubled = curve.double(a)?;
    println!("POINT:");
    println!("x: {:#x}", a.x);
    println!("y: {:#x}", a.y);
    println!();
    println!("DOUBLED POINT:");
    println!("x: {:#x}", doubled.x);
    println!("y: {:#x}", doubled.y);
    Ok(())
}

pub fn point_mul_report(scalar: &BigInt) -> Result<()> {
    let curve = Secp256k1::new();
    let reduced;
    let multiplier = if scalar >= &curve.n {
        reduced = scalar.rem_euclid(&curve.n)?;
        println!("MULTIPLIER (MOD SECP256K1 ORDER): {:#x}", reduced);
        &reduced
    } else {
        println!("MULTIPLIER: {:#x}", scalar);
        scalar
    };
    println!();

    let pt = curve.mul_base(multiplier)?;
    println!("SECP256K1 POINT:");
    println!(" x: {:#x}", pt.x);
    println!(" y: {:#x}", pt.y);
    Ok(())
}
