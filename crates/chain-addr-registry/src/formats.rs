//! Per-chain format declarations.

use std::sync::OnceLock;

use chain_addr_bitcoin::{bitcoin_base58check, BitcoinCodec, VersionBytes};
use chain_addr_cashaddr::BchCodec;
use chain_addr_coder::Coder;
use chain_addr_core::Result;
use chain_addr_ss58::Ss58Codec;

/// A named, coin-type-keyed codec over (canonical byte payload) <-> (string).
pub struct Format {
    name: &'static str,
    coin_type: u32,
    codec: Box<dyn Coder<Vec<u8>, String> + Send + Sync>,
}

impl Format {
    fn new(
        name: &'static str,
        coin_type: u32,
        codec: impl Coder<Vec<u8>, String> + Send + Sync + 'static,
    ) -> Self {
        Self { name, coin_type, codec: Box::new(codec) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    pub fn encode(&self, payload: &[u8]) -> Result<String> {
        self.codec.encode(payload.to_vec())
    }

    pub fn decode(&self, address: &str) -> Result<Vec<u8>> {
        self.codec.decode(address.to_string())
    }
}

const BTC_P2PKH: &[VersionBytes] = &[&[0x00]];
const BTC_P2SH: &[VersionBytes] = &[&[0x05]];
const LTC_P2PKH: &[VersionBytes] = &[&[0x30]];
const LTC_P2SH: &[VersionBytes] = &[&[0x32], &[0x05]];
const DOGE_P2PKH: &[VersionBytes] = &[&[0x1e]];
const DOGE_P2SH: &[VersionBytes] = &[&[0x16]];
const RDD_P2PKH: &[VersionBytes] = &[&[0x3d]];
const RDD_P2SH: &[VersionBytes] = &[&[0x05]];
const DASH_P2PKH: &[VersionBytes] = &[&[0x4c]];
const DASH_P2SH: &[VersionBytes] = &[&[0x10]];
const PPC_P2PKH: &[VersionBytes] = &[&[0x37]];
const PPC_P2SH: &[VersionBytes] = &[&[0x75]];
const DGB_P2PKH: &[VersionBytes] = &[&[0x1e]];
const DGB_P2SH: &[VersionBytes] = &[&[0x3f]];
const MONA_P2PKH: &[VersionBytes] = &[&[0x32]];
const MONA_P2SH: &[VersionBytes] = &[&[0x37], &[0x05]];
const SYS_P2PKH: &[VersionBytes] = &[&[0x3f]];
const SYS_P2SH: &[VersionBytes] = &[&[0x05]];
const ZEC_P2PKH: &[VersionBytes] = &[&[0x1c, 0xb8]];
const ZEC_P2SH: &[VersionBytes] = &[&[0x1c, 0xbd]];

fn build() -> Vec<Format> {
    vec![
        Format::new("BTC", 0, BitcoinCodec::new("bc", BTC_P2PKH, BTC_P2SH)),
        Format::new("LTC", 2, BitcoinCodec::new("ltc", LTC_P2PKH, LTC_P2SH)),
        Format::new("DOGE", 3, bitcoin_base58check(DOGE_P2PKH, DOGE_P2SH)),
        Format::new("RDD", 4, bitcoin_base58check(RDD_P2PKH, RDD_P2SH)),
        Format::new("DASH", 5, bitcoin_base58check(DASH_P2PKH, DASH_P2SH)),
        Format::new("PPC", 6, bitcoin_base58check(PPC_P2PKH, PPC_P2SH)),
        Format::new("DGB", 20, BitcoinCodec::new("dgb", DGB_P2PKH, DGB_P2SH)),
        Format::new("MONA", 22, BitcoinCodec::new("mona", MONA_P2PKH, MONA_P2SH)),
        Format::new("SYS", 57, BitcoinCodec::new("sys", SYS_P2PKH, SYS_P2SH)),
        Format::new("ZEC", 133, BitcoinCodec::new("zs", ZEC_P2PKH, ZEC_P2SH)),
        Format::new("BCH", 145, BchCodec::new("bitcoincash")),
        Format::new("DOT", 354, Ss58Codec::new(0)),
        Format::new("KSM", 434, Ss58Codec::new(2)),
        Format::new("XEC", 899, BchCodec::new("ecash")),
    ]
}

/// The process-wide format table, built on first use, read-only afterwards.
pub fn formats() -> &'static [Format] {
    static FORMATS: OnceLock<Vec<Format>> = OnceLock::new();
    FORMATS.get_or_init(build)
}

pub fn by_coin_type(coin_type: u32) -> Option<&'static Format> {
    formats().iter().find(|format| format.coin_type == coin_type)
}

pub fn by_name(name: &str) -> Option<&'static Format> {
    formats().iter().find(|format| format.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_by_coin_type() {
        let coin_types: Vec<u32> = formats().iter().map(Format::coin_type).collect();
        let mut sorted = coin_types.clone();
        sorted.sort_unstable();
        assert_eq!(coin_types, sorted);
    }

    #[test]
    fn test_lookups_agree() {
        for format in formats() {
            let found_by_type = by_coin_type(format.coin_type()).unwrap();
            let found_by_name = by_name(format.name()).unwrap();
            assert_eq!(found_by_type.name(), found_by_name.name());
            assert_eq!(found_by_type.coin_type(), found_by_name.coin_type());
        }
    }

    #[test]
    fn test_unknown_keys() {
        assert!(by_coin_type(1_000_000).is_none());
        assert!(by_name("NOPE").is_none());
    }

    #[test]
    fn test_btc_via_registry() {
        let btc = by_name("BTC").unwrap();
        let script = hex::decode("76a91489abcdefabbaabbaabbaabbaabbaabbaabbaabba88ac").unwrap();
        let addr = btc.encode(&script).unwrap();
        assert_eq!(addr, "1DYwPTpZuLjY2qApmJdHaSAuWRvEF5skCN");
        assert_eq!(btc.decode(&addr).unwrap(), script);
    }

    #[test]
    fn test_doge_via_registry() {
        let doge = by_coin_type(3).unwrap();
        let script = hex::decode("76a91489abcdefabbaabbaabbaabbaabbaabbaabbaabba88ac").unwrap();
        assert_eq!(doge.encode(&script).unwrap(), "DHh2vimDCkdpZqMRVtcr8CLWPZeXYBVYcL");
    }

    #[test]
    fn test_segwit_address_rejected_by_foreign_chain() {
        let addr = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        assert!(by_name("LTC").unwrap().decode(addr).is_err());
    }

    #[test]
    fn test_table_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let dot = by_name("DOT").unwrap();
                    let account =
                        hex::decode("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d")
                            .unwrap();
                    dot.encode(&account).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
            );
        }
    }
}
