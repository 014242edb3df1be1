//! Checksum framing.

use chain_addr_core::{Error, Result};

use crate::Coder;

/// Hash function consumed as a black box.
pub type HashFn = fn(&[u8]) -> Vec<u8>;

/// Appends the first `len` bytes of `hash(payload)` to the payload.
///
/// Decode splits the trailing `len` bytes off, recomputes the hash over the
/// remainder, and fails with [`Error::ChecksumMismatch`] if they differ.
pub struct Checksum {
    len: usize,
    hash: HashFn,
}

impl Checksum {
    pub const fn new(len: usize, hash: HashFn) -> Self {
        Self { len, hash }
    }
}

impl Coder<Vec<u8>, Vec<u8>> for Checksum {
    fn encode(&self, mut payload: Vec<u8>) -> Result<Vec<u8>> {
        let digest = (self.hash)(&payload);
        payload.extend_from_slice(&digest[..self.len]);
        Ok(payload)
    }

    fn decode(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        if data.len() < self.len {
            return Err(Error::UnrecognizedFormat);
        }
        let (payload, checksum) = data.split_at(data.len() - self.len);
        let digest = (self.hash)(payload);
        if digest[..self.len] != *checksum {
            return Err(Error::ChecksumMismatch);
        }
        Ok(payload.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_hash(data: &[u8]) -> Vec<u8> {
        let x = data.iter().fold(0u8, |acc, b| acc ^ b);
        vec![x, x.wrapping_add(1)]
    }

    #[test]
    fn test_round_trip() {
        let coder = Checksum::new(2, xor_hash);
        let encoded = coder.encode(vec![1, 2, 3]).unwrap();
        assert_eq!(encoded, vec![1, 2, 3, 0, 1]);
        assert_eq!(coder.decode(encoded).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupted_payload_fails() {
        let coder = Checksum::new(2, xor_hash);
        let mut encoded = coder.encode(vec![1, 2, 3]).unwrap();
        encoded[0] ^= 0x80;
        assert_eq!(coder.decode(encoded), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_corrupted_checksum_fails() {
        let coder = Checksum::new(2, xor_hash);
        let mut encoded = coder.encode(vec![1, 2, 3]).unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 1;
        assert_eq!(coder.decode(encoded), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_too_short_is_structural() {
        let coder = Checksum::new(4, xor_hash);
        assert_eq!(coder.decode(vec![1, 2]), Err(Error::UnrecognizedFormat));
    }
}
