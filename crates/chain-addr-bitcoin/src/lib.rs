//! Bitcoin-style address codecs.
//!
//! Three layers, each usable on its own:
//! - [`base58check`]: base58 with a 4-byte double-SHA-256 checksum.
//! - [`Segwit`]: Bech32 witness-program encoding under a fixed HRP.
//! - [`BitcoinCodec`]: the dual codec wallets expect, routing legacy script
//!   shapes to Base58Check and witness programs to Bech32.

#![forbid(unsafe_code)]

mod base58check;
mod bech32;
mod dispatch;
mod script;
mod segwit;

pub use base58check::{base58, base58check, BASE58_ALPHABET};
pub use bech32::{bech32_decode, bech32_encode, BECH32_ALPHABET};
pub use dispatch::{bitcoin_base58check, BitcoinCodec, VersionBytes, VersionedLegacy};
pub use script::ScriptShape;
pub use segwit::Segwit;
