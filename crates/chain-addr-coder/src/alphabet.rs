//! Digit-to-symbol mapping.

use chain_addr_core::{Error, Result};

use crate::Coder;

const INVALID: u8 = 0xff;

/// Maps a digit sequence to a string over a fixed symbol table and back.
///
/// The table must be bijective: one printable ASCII symbol per digit value,
/// no symbol repeated. Decode fails on any character absent from the table.
pub struct Alphabet {
    symbols: &'static [u8],
    inverse: [u8; 128],
}

impl Alphabet {
    pub const fn new(symbols: &'static [u8]) -> Self {
        let mut inverse = [INVALID; 128];
        let mut i = 0;
        while i < symbols.len() {
            assert!(symbols[i] < 128);
            assert!(inverse[symbols[i] as usize] == INVALID);
            inverse[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Self { symbols, inverse }
    }
}

impl Coder<Vec<u8>, String> for Alphabet {
    fn encode(&self, digits: Vec<u8>) -> Result<String> {
        let mut out = String::with_capacity(digits.len());
        for &digit in &digits {
            match self.symbols.get(digit as usize) {
                Some(&symbol) => out.push(symbol as char),
                None => return Err(Error::UnrecognizedFormat),
            }
        }
        Ok(out)
    }

    fn decode(&self, text: String) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len());
        for byte in text.bytes() {
            let digit = match self.inverse.get(byte as usize) {
                Some(&d) if d != INVALID => d,
                _ => return Err(Error::UnrecognizedFormat),
            };
            out.push(digit);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn test_round_trip() {
        let coder = Alphabet::new(BASE58);
        let digits = vec![0, 9, 57, 33];
        let text = coder.encode(digits.clone()).unwrap();
        assert_eq!(text, "1Az7");
        assert_eq!(coder.decode(text).unwrap(), digits);
    }

    #[test]
    fn test_encode_rejects_out_of_range_digit() {
        let coder = Alphabet::new(BASE58);
        assert_eq!(coder.encode(vec![58]), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn test_decode_rejects_foreign_character() {
        let coder = Alphabet::new(BASE58);
        // '0' and 'l' are excluded from the base58 alphabet.
        assert_eq!(coder.decode("10".into()), Err(Error::UnrecognizedFormat));
        assert_eq!(coder.decode("1l".into()), Err(Error::UnrecognizedFormat));
        assert_eq!(coder.decode("1é".into()), Err(Error::UnrecognizedFormat));
    }
}
