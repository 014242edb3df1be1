//! CashAddr checksum and payload framing.

use chain_addr_bitcoin::BECH32_ALPHABET;
use chain_addr_coder::{convert_bits, Alphabet, Coder};
use chain_addr_core::{Error, Result};

/// Candidate prefixes for prefix-omitted decoding, tried in this exact
/// order. First whose checksum validates wins; downstream consumers depend
/// on the precedence, so the order is load-bearing.
pub const VALID_PREFIXES: [&str; 8] = [
    "ecash",
    "bitcoincash",
    "simpleledger",
    "etoken",
    "ectest",
    "ecregtest",
    "bchtest",
    "bchreg",
];

const GENERATOR: [u64; 5] = [0x98f2bc8e61, 0x79b76d99e2, 0xf33e5fb3c4, 0xae2eabe2a8, 0x1e4f43e470];

const CHECKSUM_DIGITS: usize = 8;

/// Hash sizes in bytes, indexed by the version byte's size bits.
const HASH_SIZE: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressType {
    P2PKH,
    P2SH,
}

impl AddressType {
    /// Bits 3-6 of the version byte.
    const fn type_bits(self) -> u8 {
        match self {
            Self::P2PKH => 0,
            Self::P2SH => 8,
        }
    }

    fn from_version_byte(version: u8) -> Result<Self> {
        match version & 120 {
            0 => Ok(Self::P2PKH),
            8 => Ok(Self::P2SH),
            _ => Err(Error::UnrecognizedFormat),
        }
    }
}

/// Result of a successful decode. When the input carried no prefix, the
/// recovered prefix is the first candidate that validated.
#[derive(Debug, PartialEq, Eq)]
pub struct Decoded {
    pub prefix: String,
    pub addr_type: AddressType,
    pub hash: Vec<u8>,
}

/// 40-bit polymod over GF(32), already XORed with the final 1: a payload
/// with a correct trailing checksum evaluates to exactly 0.
fn polymod(data: &[u8]) -> u64 {
    let mut checksum: u64 = 1;
    for &value in data {
        let top = checksum >> 35;
        checksum = ((checksum & 0x07_ffff_ffff) << 5) ^ value as u64;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                checksum ^= generator;
            }
        }
    }
    checksum ^ 1
}

/// The prefix contributes only the low 5 bits of each character, followed
/// by a zero separator digit.
fn prefix_data(prefix: &str) -> Vec<u8> {
    let mut out: Vec<u8> = prefix.bytes().map(|b| b & 31).collect();
    out.push(0);
    out
}

fn size_bits(hash: &[u8]) -> Result<u8> {
    HASH_SIZE
        .iter()
        .position(|&size| size == hash.len())
        .map(|bits| bits as u8)
        .ok_or(Error::UnrecognizedFormat)
}

fn checksum_digits(checksum: u64) -> [u8; CHECKSUM_DIGITS] {
    let mut digits = [0u8; CHECKSUM_DIGITS];
    for (i, digit) in digits.iter_mut().enumerate() {
        *digit = ((checksum >> (5 * (7 - i))) & 31) as u8;
    }
    digits
}

fn valid_checksum(prefix: &str, payload_digits: &[u8]) -> bool {
    let mut data = prefix_data(prefix);
    data.extend_from_slice(payload_digits);
    polymod(&data) == 0
}

/// Encode a hash of the given type under a CashAddr prefix.
pub fn encode(prefix: &str, addr_type: AddressType, hash: &[u8]) -> Result<String> {
    let version_byte = addr_type.type_bits() + size_bits(hash)?;

    let mut bytes = vec![version_byte];
    bytes.extend_from_slice(hash);
    let mut payload = convert_bits(&bytes, 8, 5, true)?;

    let mut data = prefix_data(prefix);
    data.extend_from_slice(&payload);
    data.extend_from_slice(&[0; CHECKSUM_DIGITS]);
    payload.extend_from_slice(&checksum_digits(polymod(&data)));

    let encoded = Alphabet::new(BECH32_ALPHABET).encode(payload)?;
    Ok(format!("{prefix}:{encoded}"))
}

/// Decode a CashAddr string, prefixed or not.
///
/// Mixed-case input is rejected before any checksum work. Without a prefix,
/// each [`VALID_PREFIXES`] candidate is tried in order; with an explicit
/// prefix only that prefix's checksum is checked.
pub fn decode(address: &str) -> Result<Decoded> {
    if !has_single_case(address) {
        return Err(Error::InvalidCase);
    }
    let lower = address.to_lowercase();
    let mut pieces = lower.splitn(3, ':');

    let (prefix, payload) = match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(payload), None, None) => {
            let digits = Alphabet::new(BECH32_ALPHABET).decode(payload.to_string())?;
            let prefix = VALID_PREFIXES
                .iter()
                .find(|candidate| valid_checksum(candidate, &digits))
                .ok_or(Error::UnrecognizedFormat)?;
            (prefix.to_string(), digits)
        }
        (Some(prefix), Some(payload), None) => {
            let digits = Alphabet::new(BECH32_ALPHABET).decode(payload.to_string())?;
            if !valid_checksum(prefix, &digits) {
                return Err(Error::ChecksumMismatch);
            }
            (prefix.to_string(), digits)
        }
        _ => return Err(Error::UnrecognizedFormat),
    };

    if payload.len() <= CHECKSUM_DIGITS {
        return Err(Error::UnrecognizedFormat);
    }
    let bytes = convert_bits(&payload[..payload.len() - CHECKSUM_DIGITS], 5, 8, false)?;
    let (&version_byte, hash) = bytes.split_first().ok_or(Error::UnrecognizedFormat)?;
    if HASH_SIZE[(version_byte & 7) as usize] != hash.len() {
        return Err(Error::UnrecognizedFormat);
    }

    Ok(Decoded {
        prefix,
        addr_type: AddressType::from_version_byte(version_byte)?,
        hash: hash.to_vec(),
    })
}

/// True iff the string is uniformly upper or uniformly lower case.
fn has_single_case(address: &str) -> bool {
    address == address.to_lowercase() || address == address.to_uppercase()
}
