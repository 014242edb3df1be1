//! Generic Bech32 (BIP-173) over arbitrary human-readable parts.
//!
//! The segwit-specific version-byte handling lives in [`crate::Segwit`];
//! this module only knows about HRPs, 5-bit digits, and the BCH checksum.

use chain_addr_coder::{Alphabet, Coder};
use chain_addr_core::{Error, Result};

/// Bech32 data alphabet, indexed by 5-bit digit value.
pub const BECH32_ALPHABET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

const CHECKSUM_LEN: usize = 6;

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ value as u32;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Each HRP character contributes its high 3 bits, then a zero separator,
/// then each character's low 5 bits.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    out.extend(hrp.bytes().map(|b| b >> 5));
    out.push(0);
    out.extend(hrp.bytes().map(|b| b & 31));
    out
}

/// Encode a 5-bit digit sequence under the given HRP, appending the
/// six-digit BCH checksum.
pub fn bech32_encode(hrp: &str, digits: &[u8]) -> Result<String> {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(digits);
    values.extend_from_slice(&[0; CHECKSUM_LEN]);
    let checksum = polymod(&values) ^ 1;

    let mut payload = digits.to_vec();
    for i in 0..CHECKSUM_LEN {
        payload.push(((checksum >> (5 * (5 - i))) & 31) as u8);
    }
    let encoded = Alphabet::new(BECH32_ALPHABET).encode(payload)?;
    Ok(format!("{hrp}1{encoded}"))
}

/// Decode a Bech32 string, verifying the checksum and that the
/// human-readable part matches `expected_hrp`. Returns the payload digits
/// with the checksum stripped.
pub fn bech32_decode(address: &str, expected_hrp: &str) -> Result<Vec<u8>> {
    let lower = address.to_lowercase();
    if lower != address && address.to_uppercase() != address {
        return Err(Error::UnrecognizedFormat);
    }

    let (hrp, data) = lower.rsplit_once('1').ok_or(Error::UnrecognizedFormat)?;
    if hrp != expected_hrp || data.len() < CHECKSUM_LEN {
        return Err(Error::UnrecognizedFormat);
    }

    let digits = Alphabet::new(BECH32_ALPHABET).decode(data.to_string())?;
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&digits);
    if polymod(&values) != 1 {
        return Err(Error::ChecksumMismatch);
    }

    let mut payload = digits;
    payload.truncate(payload.len() - CHECKSUM_LEN);
    Ok(payload)
}
