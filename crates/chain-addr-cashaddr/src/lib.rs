//! CashAddr address encoding (Bitcoin Cash / eCash).
//!
//! Not Bech32: the checksum is a 40-bit polymod over five generators with
//! eight checksum digits, the prefix contributes only its low 5 bits, and
//! the separator is `:` with the prefix optional on decode.

#![forbid(unsafe_code)]

mod bch;
mod cashaddr;

pub use bch::BchCodec;
pub use cashaddr::{decode, encode, AddressType, Decoded, VALID_PREFIXES};
