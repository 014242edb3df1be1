//! Base conversion between byte and digit sequences.

use chain_addr_core::{Error, Result};

use crate::Coder;

/// Repacks 8-bit bytes into `bits`-wide digits and back.
///
/// Encode pads the final group with zero bits. Decode rejects out-of-range
/// digits, excess trailing digits, and nonzero padding bits.
pub struct Radix2 {
    bits: u32,
}

impl Radix2 {
    /// `bits` must be in `1..8`.
    pub const fn new(bits: u32) -> Self {
        assert!(bits >= 1 && bits < 8);
        Self { bits }
    }
}

impl Coder<Vec<u8>, Vec<u8>> for Radix2 {
    fn encode(&self, input: Vec<u8>) -> Result<Vec<u8>> {
        convert_bits(&input, 8, self.bits, true)
    }

    fn decode(&self, output: Vec<u8>) -> Result<Vec<u8>> {
        convert_bits(&output, self.bits, 8, false)
    }
}

/// Regroup a sequence of `from`-bit values into `to`-bit values.
///
/// With `pad`, leftover bits are zero-padded into a final value; without it,
/// leftover bits must be pure padding (fewer than `from` of them, all zero).
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let mut out = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));
    for &value in data {
        if (value as u32) >> from != 0 {
            return Err(Error::UnrecognizedFormat);
        }
        acc = (acc << from) | value as u32;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(Error::UnrecognizedFormat);
    }
    Ok(out)
}

/// Positional base conversion between bytes and base-`k` digits.
///
/// Leading zero bytes do not survive positional-notation division, so they
/// are carried across explicitly: one leading zero digit per leading zero
/// byte, and vice versa on decode.
pub struct Radix {
    base: u32,
}

impl Radix {
    /// `base` must be in `2..=256`.
    pub const fn new(base: u32) -> Self {
        assert!(base >= 2 && base <= 256);
        Self { base }
    }
}

impl Coder<Vec<u8>, Vec<u8>> for Radix {
    fn encode(&self, input: Vec<u8>) -> Result<Vec<u8>> {
        convert_base(&input, 256, self.base)
    }

    fn decode(&self, output: Vec<u8>) -> Result<Vec<u8>> {
        convert_base(&output, self.base, 256)
    }
}

fn convert_base(data: &[u8], from: u32, to: u32) -> Result<Vec<u8>> {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian digit accumulator; each input symbol shifts the whole
    // number up by `from` and adds in.
    let mut digits: Vec<u32> = Vec::new();
    for &symbol in &data[zeros..] {
        if (symbol as u32) >= from {
            return Err(Error::UnrecognizedFormat);
        }
        let mut carry = symbol as u32;
        for digit in digits.iter_mut() {
            carry += *digit * from;
            *digit = carry % to;
            carry /= to;
        }
        while carry > 0 {
            digits.push(carry % to);
            carry /= to;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(digits.iter().rev().map(|&d| d as u8));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix2_pads_final_group() {
        let coder = Radix2::new(5);
        assert_eq!(coder.encode(vec![0xff]).unwrap(), vec![31, 28]);
    }

    #[test]
    fn test_radix2_round_trip() {
        let coder = Radix2::new(5);
        let data = vec![0x00, 0x44, 0x32, 0x14, 0xc7, 0x42, 0x54, 0xb6];
        let digits = coder.encode(data.clone()).unwrap();
        assert_eq!(coder.decode(digits).unwrap(), data);
    }

    #[test]
    fn test_radix2_rejects_nonzero_padding() {
        let coder = Radix2::new(5);
        // [31, 28] decodes to [0xff]; [31, 31] has nonzero padding bits.
        assert_eq!(coder.decode(vec![31, 31]), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn test_radix2_rejects_out_of_range_digit() {
        let coder = Radix2::new(5);
        assert_eq!(coder.decode(vec![32, 0]), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn test_radix2_rejects_excess_trailing_digit() {
        let coder = Radix2::new(5);
        // One lone 5-bit digit cannot carry a full byte.
        assert_eq!(coder.decode(vec![0, 0, 0]), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn test_radix_preserves_leading_zeros() {
        let coder = Radix::new(58);
        assert_eq!(coder.encode(vec![0, 0, 0, 1]).unwrap(), vec![0, 0, 0, 1]);
        assert_eq!(coder.decode(vec![0, 0, 0, 1]).unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_radix_round_trip() {
        let coder = Radix::new(58);
        let data = hex::decode("00010966776006953d5567439e5e39f86a0d273beed61967f6").unwrap();
        let digits = coder.encode(data.clone()).unwrap();
        assert_eq!(coder.decode(digits).unwrap(), data);
    }

    #[test]
    fn test_radix_rejects_out_of_range_digit() {
        let coder = Radix::new(58);
        assert_eq!(coder.decode(vec![1, 58]), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn test_radix58_against_bs58_crate() {
        const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        let coder = Radix::new(58);
        let cases: &[&[u8]] = &[
            b"",
            b"a",
            b"Hello World!",
            &[0],
            &[0, 0, 0],
            &[0, 0, 0, 1, 2, 3],
            &[0xff; 32],
            &[0x00, 0xff, 0x00, 0xff],
        ];
        for data in cases {
            let digits = coder.encode(data.to_vec()).unwrap();
            let ours: String = digits.iter().map(|&d| BASE58[d as usize] as char).collect();
            let reference = bs58::encode(data).into_string();
            assert_eq!(ours, reference, "mismatch for data {:?}", data);
        }
    }
}
