//! Recognized output-script shapes.

use chain_addr_core::{Error, Result};

/// The script shapes the address codecs understand, as a tagged union.
///
/// Parsing tries the legacy patterns first, then the witness-program shape,
/// with an explicit final "no shape matched" failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptShape {
    /// `OP_DUP OP_HASH160 <push> <hash> OP_EQUALVERIFY OP_CHECKSIG`
    P2PKH(Vec<u8>),
    /// `OP_HASH160 <push> <hash> OP_EQUAL`
    P2SH(Vec<u8>),
    /// `<version-byte> <length-byte> <program>` where the version byte is
    /// `0x00` (witness v0) or `0x51..=0x60` (witness v1-v16).
    Witness { version: u8, program: Vec<u8> },
}

impl ScriptShape {
    pub fn parse(script: &[u8]) -> Result<Self> {
        if let Some(hash) = parse_p2pkh(script) {
            return Ok(Self::P2PKH(hash.to_vec()));
        }
        if let Some(hash) = parse_p2sh(script) {
            return Ok(Self::P2SH(hash.to_vec()));
        }
        if let Some((version, program)) = parse_witness(script) {
            return Ok(Self::Witness { version, program: program.to_vec() });
        }
        Err(Error::UnrecognizedFormat)
    }

    /// Rebuild the canonical script bytes.
    pub fn to_script(&self) -> Vec<u8> {
        match self {
            Self::P2PKH(hash) => {
                let mut script = vec![0x76, 0xa9, 0x14];
                script.extend_from_slice(hash);
                script.extend_from_slice(&[0x88, 0xac]);
                script
            }
            Self::P2SH(hash) => {
                let mut script = vec![0xa9, 0x14];
                script.extend_from_slice(hash);
                script.push(0x87);
                script
            }
            Self::Witness { version, program } => {
                let mut script = vec![*version, program.len() as u8];
                script.extend_from_slice(program);
                script
            }
        }
    }
}

fn parse_p2pkh(script: &[u8]) -> Option<&[u8]> {
    if script.len() < 5 || script[0] != 0x76 || script[1] != 0xa9 {
        return None;
    }
    if script[script.len() - 2] != 0x88 || script[script.len() - 1] != 0xac {
        return None;
    }
    let hash = &script[3..script.len() - 2];
    (hash.len() == script[2] as usize).then_some(hash)
}

fn parse_p2sh(script: &[u8]) -> Option<&[u8]> {
    if script.len() < 4 || script[0] != 0xa9 || script[script.len() - 1] != 0x87 {
        return None;
    }
    let hash = &script[2..script.len() - 1];
    (hash.len() == script[1] as usize).then_some(hash)
}

fn parse_witness(script: &[u8]) -> Option<(u8, &[u8])> {
    if script.len() < 2 {
        return None;
    }
    let (version, len) = (script[0], script[1] as usize);
    let valid_version = version == 0x00 || (0x51..=0x60).contains(&version);
    let program = &script[2..];
    (valid_version && program.len() == len && len <= 40).then_some((version, program))
}
