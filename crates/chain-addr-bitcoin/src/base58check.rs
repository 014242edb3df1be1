//! Base58 and Base58Check, assembled from the coder primitives.

use chain_addr_coder::{Alphabet, Checksum, Coder, Radix};
use sha2::{Digest, Sha256};

/// Base58 alphabet (Bitcoin style: excludes 0, O, I, l).
pub const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn sha256d(data: &[u8]) -> Vec<u8> {
    Sha256::digest(Sha256::digest(data)).to_vec()
}

/// Plain base58: bytes to string, no checksum.
pub fn base58() -> impl Coder<Vec<u8>, String> + Send + Sync {
    Radix::new(58).chain(Alphabet::new(BASE58_ALPHABET))
}

/// Base58Check: a 4-byte double-SHA-256 checksum appended before base58.
pub fn base58check() -> impl Coder<Vec<u8>, String> + Send + Sync {
    Checksum::new(4, sha256d).chain(base58())
}
