//! SS58 account addresses.
//!
//! The representative version-plus-checksum scheme: a 1-byte network
//! discriminator is prepended to the 32-byte account ID, the result is
//! hashed under the `SS58PRE` domain constant with Blake2b-512, the first
//! two digest bytes are appended as the checksum, and the whole thing is
//! base58-encoded. No Base58Check layer; the scheme supplies its own
//! checksum.

#![forbid(unsafe_code)]

use blake2::{Blake2b512, Digest};
use chain_addr_bitcoin::base58;
use chain_addr_coder::Coder;
use chain_addr_core::{Error, Result};

/// Network discriminators this codec accepts.
pub const KNOWN_TYPES: [u8; 7] = [0, 1, 2, 42, 43, 68, 69];

const DOMAIN: &[u8] = b"SS58PRE";
const ACCOUNT_LEN: usize = 32;
const CHECKSUM_LEN: usize = 2;

fn checksum(typed_payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b512::new();
    hasher.update(DOMAIN);
    hasher.update(typed_payload);
    let digest = hasher.finalize();
    [digest[0], digest[1]]
}

/// Encode a 32-byte account ID under the given network discriminator.
pub fn ss58_encode(account: &[u8], network: u8) -> Result<String> {
    if account.len() != ACCOUNT_LEN || !KNOWN_TYPES.contains(&network) {
        return Err(Error::UnrecognizedFormat);
    }
    let mut payload = Vec::with_capacity(1 + ACCOUNT_LEN + CHECKSUM_LEN);
    payload.push(network);
    payload.extend_from_slice(account);
    let check = checksum(&payload);
    payload.extend_from_slice(&check);
    base58().encode(payload)
}

/// Decode an SS58 address to `(network, account)`.
pub fn ss58_decode(address: &str) -> Result<(u8, Vec<u8>)> {
    let bytes = base58().decode(address.to_string())?;
    if bytes.len() != 1 + ACCOUNT_LEN + CHECKSUM_LEN {
        return Err(Error::UnrecognizedFormat);
    }
    let network = bytes[0];
    if !KNOWN_TYPES.contains(&network) {
        return Err(Error::UnrecognizedFormat);
    }
    let (typed_payload, check) = bytes.split_at(1 + ACCOUNT_LEN);
    if checksum(typed_payload) != *check {
        return Err(Error::ChecksumMismatch);
    }
    Ok((network, typed_payload[1..].to_vec()))
}

/// SS58 as a byte-payload codec under a fixed network discriminator.
///
/// Decoding accepts any known discriminator, matching wallet behavior for
/// chains that re-registered historical prefixes; encoding always uses the
/// configured one.
pub struct Ss58Codec {
    network: u8,
}

impl Ss58Codec {
    pub const fn new(network: u8) -> Self {
        Self { network }
    }
}

impl Coder<Vec<u8>, String> for Ss58Codec {
    fn encode(&self, account: Vec<u8>) -> Result<String> {
        ss58_encode(&account, self.network)
    }

    fn decode(&self, address: String) -> Result<Vec<u8>> {
        let (_, account) = ss58_decode(&address)?;
        Ok(account)
    }
}
