//! The dual legacy/segwit codec and its Base58Check-only sibling.

use chain_addr_coder::Coder;
use chain_addr_core::{Error, Result};

use crate::base58check::base58check;
use crate::script::ScriptShape;
use crate::segwit::Segwit;

/// A legacy version field. More than one byte is allowed (e.g. Zcash).
pub type VersionBytes = &'static [u8];

/// Script bytes to versioned payload: strips the opcode framing and
/// prepends the network's P2PKH or P2SH version field.
///
/// Networks that went through forks may accept several historical version
/// fields per role; all candidates for a role are assumed equal length and
/// the first match wins. Encoding always uses the first candidate.
pub struct VersionedLegacy {
    p2pkh_versions: &'static [VersionBytes],
    p2sh_versions: &'static [VersionBytes],
}

impl VersionedLegacy {
    pub const fn new(
        p2pkh_versions: &'static [VersionBytes],
        p2sh_versions: &'static [VersionBytes],
    ) -> Self {
        assert!(!p2pkh_versions.is_empty() && !p2sh_versions.is_empty());
        Self { p2pkh_versions, p2sh_versions }
    }
}

impl Coder<Vec<u8>, Vec<u8>> for VersionedLegacy {
    fn encode(&self, script: Vec<u8>) -> Result<Vec<u8>> {
        let (version, hash) = match ScriptShape::parse(&script)? {
            ScriptShape::P2PKH(hash) => (self.p2pkh_versions[0], hash),
            ScriptShape::P2SH(hash) => (self.p2sh_versions[0], hash),
            ScriptShape::Witness { .. } => return Err(Error::UnrecognizedFormat),
        };
        let mut payload = version.to_vec();
        payload.extend_from_slice(&hash);
        Ok(payload)
    }

    fn decode(&self, payload: Vec<u8>) -> Result<Vec<u8>> {
        if let Some(version) = first_match(self.p2pkh_versions, &payload) {
            return Ok(ScriptShape::P2PKH(payload[version.len()..].to_vec()).to_script());
        }
        if let Some(version) = first_match(self.p2sh_versions, &payload) {
            return Ok(ScriptShape::P2SH(payload[version.len()..].to_vec()).to_script());
        }
        Err(Error::UnrecognizedFormat)
    }
}

fn first_match(candidates: &[VersionBytes], payload: &[u8]) -> Option<VersionBytes> {
    candidates.iter().copied().find(|version| payload.starts_with(version))
}

/// Base58Check-only codec for chains without segwit (DOGE, DASH, ZEC, ...).
pub fn bitcoin_base58check(
    p2pkh_versions: &'static [VersionBytes],
    p2sh_versions: &'static [VersionBytes],
) -> impl Coder<Vec<u8>, String> + Send + Sync {
    VersionedLegacy::new(p2pkh_versions, p2sh_versions).chain(base58check())
}

/// The dual Bitcoin codec: legacy scripts to Base58Check, witness programs
/// to Bech32 under the chain's HRP.
pub struct BitcoinCodec {
    hrp: &'static str,
    segwit: Segwit,
    legacy: Box<dyn Coder<Vec<u8>, String> + Send + Sync>,
}

impl BitcoinCodec {
    pub fn new(
        hrp: &'static str,
        p2pkh_versions: &'static [VersionBytes],
        p2sh_versions: &'static [VersionBytes],
    ) -> Self {
        Self {
            hrp,
            segwit: Segwit::new(hrp),
            legacy: Box::new(bitcoin_base58check(p2pkh_versions, p2sh_versions)),
        }
    }
}

impl Coder<Vec<u8>, String> for BitcoinCodec {
    /// Legacy shapes are tried first; on any failure the error is discarded
    /// and segwit encoding is attempted, whose error is the one propagated.
    fn encode(&self, script: Vec<u8>) -> Result<String> {
        match self.legacy.encode(script.clone()) {
            Ok(address) => Ok(address),
            Err(_) => self.segwit.encode(script),
        }
    }

    fn decode(&self, address: String) -> Result<Vec<u8>> {
        let mut segwit_prefix = self.hrp.to_string();
        segwit_prefix.push('1');
        if address.to_lowercase().starts_with(&segwit_prefix) {
            self.segwit.decode(address)
        } else {
            self.legacy.decode(address)
        }
    }
}
