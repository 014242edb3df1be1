//! Segwit witness-program layer over generic Bech32.
//!
//! Witness version remapping to/from the `0x51..=0x60` opcode range happens
//! here, not inside the Bech32 checksum code.

use chain_addr_coder::{convert_bits, Coder};
use chain_addr_core::{Error, Result};

use crate::bech32::{bech32_decode, bech32_encode};
use crate::script::ScriptShape;

/// Bech32 segwit codec: witness-program script bytes to `hrp1...` strings.
pub struct Segwit {
    hrp: &'static str,
}

impl Segwit {
    pub const fn new(hrp: &'static str) -> Self {
        Self { hrp }
    }
}

impl Coder<Vec<u8>, String> for Segwit {
    fn encode(&self, script: Vec<u8>) -> Result<String> {
        let (version, program) = match ScriptShape::parse(&script)? {
            ScriptShape::Witness { version, program } => (version, program),
            _ => return Err(Error::UnrecognizedFormat),
        };
        // OP_1..OP_16 map down to witness versions 1-16; OP_0 stays 0.
        let witness_version = if version == 0x00 { 0 } else { version - 0x50 };

        let mut digits = vec![witness_version];
        digits.extend(convert_bits(&program, 8, 5, true)?);
        bech32_encode(self.hrp, &digits)
    }

    fn decode(&self, address: String) -> Result<Vec<u8>> {
        let digits = bech32_decode(&address, self.hrp)?;
        let (&witness_version, program_digits) =
            digits.split_first().ok_or(Error::UnrecognizedFormat)?;
        if witness_version > 16 {
            return Err(Error::UnrecognizedFormat);
        }
        let program = convert_bits(program_digits, 5, 8, false)?;
        if program.len() > 40 {
            return Err(Error::UnrecognizedFormat);
        }

        let version = if witness_version == 0 { 0x00 } else { 0x50 + witness_version };
        Ok(ScriptShape::Witness { version, program }.to_script())
    }
}
