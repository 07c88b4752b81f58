#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]

mod hmac;
mod pbkdf2;
mod ripemd160;
mod sha256;
mod sha512;

pub use crate::hmac::{hmac_sha512, HmacSha512};
pub use crate::pbkdf2::pbkdf2_hmac_sha512;
pub use crate::ripemd160::ripemd160;
pub use crate::sha256::{sha256, Sha256};
pub use crate::sha512::{sha512, Sha512};
