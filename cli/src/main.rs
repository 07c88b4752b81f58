//! `bitcoin-math`: a from-scratch Bitcoin key-derivation toolkit.
//!
//! Run with no arguments for the interactive menu, or use the subcommands
//! for one-shot operations.

mod commands;
mod input;
mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bitcoin-math", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate master keys and an address from entropy
    Master {
        /// Entropy digits; random when omitted
        #[arg(long)]
        entropy: Option<String>,
        /// Base the entropy is written in
        #[arg(long, default_value_t = 16)]
        base: u32,
        /// Optional BIP-39 passphrase
        #[arg(long, default_value = "")]
        passphrase: String,
    },
    /// Derive child keys from a parent
    Child {
        #[command(subcommand)]
        kind: ChildKind,
    },
    /// Print a number in every base from 2 to 64
    Convert {
        /// The number to convert
        number: String,
        /// Base the number is written in
        #[arg(long, default_value_t = 10)]
        base: u32,
    },
    /// P2PKH address for a compressed public key
    P2pkh {
        /// 33-byte compressed public key, hex
        pubkey: String,
    },
    /// Raw secp256k1 operations
    Point {
        #[command(subcommand)]
        op: PointOp,
    },
}

#[derive(Subcommand)]
enum ChildKind {
    /// Non-hardened child from a private parent (index < 2³¹)
    Normal {
        /// Parent private key, hex
        #[arg(long)]
        key: String,
        /// Parent chain code, hex
        #[arg(long)]
        chain: String,
        /// Child index
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=2_147_483_647))]
        index: u32,
    },
    /// Hardened child from a private parent (index ≥ 2³¹)
    Hardened {
        /// Parent private key, hex
        #[arg(long)]
        key: String,
        /// Parent chain code, hex
        #[arg(long)]
        chain: String,
        /// Child index, including the 2³¹ offset
        #[arg(long, value_parser = clap::value_parser!(u32).range(2_147_483_648..))]
        index: u32,
    },
    /// Child public key from a public parent (no private key involved)
    Public {
        /// Parent compressed public key, hex
        #[arg(long)]
        pubkey: String,
        /// Parent chain code, hex
        #[arg(long)]
        chain: String,
        /// Child index
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=2_147_483_647))]
        index: u32,
    },
}

#[derive(Subcommand)]
enum PointOp {
    /// Add two points
    Add {
        /// First point x, hex
        x1: String,
        /// First point y, hex
        y1: String,
        /// Second point x, hex
        x2: String,
        /// Second point y, hex
        y2: String,
    },
    /// Double a point
    Double {
        /// Point x, hex
        x: String,
        /// Point y, hex
        y: String,
    },
    /// Multiply the generator by a scalar
    Mul {
        /// Scalar multiplier, hex
        scalar: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(command) => commands::run(command),
        None => menu::run(),
    }
}
