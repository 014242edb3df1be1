//! Script-level codec for Bitcoin Cash style chains.
//!
//! Encoding always produces a prefixed CashAddr string. Decoding accepts
//! both the legacy Base58Check form (pre-fork version bytes `00`/`05`) and
//! CashAddr, trying legacy first and falling back on failure.

use chain_addr_bitcoin::{bitcoin_base58check, ScriptShape, VersionBytes};
use chain_addr_coder::Coder;
use chain_addr_core::{Error, Result};

use crate::cashaddr::{self, AddressType};

const LEGACY_P2PKH: &[VersionBytes] = &[&[0x00]];
const LEGACY_P2SH: &[VersionBytes] = &[&[0x05]];

pub struct BchCodec {
    prefix: &'static str,
    legacy: Box<dyn Coder<Vec<u8>, String> + Send + Sync>,
}

impl BchCodec {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            legacy: Box::new(bitcoin_base58check(LEGACY_P2PKH, LEGACY_P2SH)),
        }
    }
}

impl Coder<Vec<u8>, String> for BchCodec {
    fn encode(&self, script: Vec<u8>) -> Result<String> {
        let (addr_type, hash) = match ScriptShape::parse(&script)? {
            ScriptShape::P2PKH(hash) => (AddressType::P2PKH, hash),
            ScriptShape::P2SH(hash) => (AddressType::P2SH, hash),
            ScriptShape::Witness { .. } => return Err(Error::UnrecognizedFormat),
        };
        cashaddr::encode(self.prefix, addr_type, &hash)
    }

    fn decode(&self, address: String) -> Result<Vec<u8>> {
        if let Ok(script) = self.legacy.decode(address.clone()) {
            return Ok(script);
        }
        let decoded = cashaddr::decode(&address)?;
        let shape = match decoded.addr_type {
            AddressType::P2PKH => ScriptShape::P2PKH(decoded.hash),
            AddressType::P2SH => ScriptShape::P2SH(decoded.hash),
        };
        Ok(shape.to_script())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bch() -> BchCodec {
        BchCodec::new("bitcoincash")
    }

    #[test]
    fn test_encode_p2pkh_script() {
        let script = hex::decode("76a91476a04053bda0a88bda5177b86a15c3b29f55987388ac").unwrap();
        assert_eq!(
            bch().encode(script.clone()).unwrap(),
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
        );
    }

    #[test]
    fn test_decode_cashaddr_to_script() {
        let script = hex::decode("76a91476a04053bda0a88bda5177b86a15c3b29f55987388ac").unwrap();
        let addr = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a".to_string();
        assert_eq!(bch().decode(addr).unwrap(), script);
    }

    #[test]
    fn test_decode_legacy_base58check() {
        let script = hex::decode("76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac").unwrap();
        let addr = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string();
        assert_eq!(bch().decode(addr).unwrap(), script);
    }

    #[test]
    fn test_decode_prefixless_cashaddr() {
        let script = hex::decode("76a91476a04053bda0a88bda5177b86a15c3b29f55987388ac").unwrap();
        let addr = "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a".to_string();
        assert_eq!(bch().decode(addr).unwrap(), script);
    }

    #[test]
    fn test_p2sh_round_trip() {
        let script = hex::decode("a9148f55563b9a19f321c211e9b9f38cdf686ea0784587").unwrap();
        let addr = bch().encode(script.clone()).unwrap();
        assert_eq!(bch().decode(addr).unwrap(), script);
    }

    #[test]
    fn test_witness_script_rejected() {
        let script = hex::decode("0014751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(bch().encode(script), Err(Error::UnrecognizedFormat));
    }
}
