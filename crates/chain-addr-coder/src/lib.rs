//! Composable bidirectional transforms.
//!
//! Every address format in the workspace is assembled from the same small
//! set of pure primitives: positional base conversion, power-of-two digit
//! repacking, alphabet mapping, and checksum framing. The [`Coder`] trait
//! ties them together; [`Chain`] composes two coders end-to-end.

#![forbid(unsafe_code)]

mod alphabet;
mod chain;
mod checksum;
mod radix;

pub use alphabet::Alphabet;
pub use chain::Chain;
pub use checksum::{Checksum, HashFn};
pub use radix::{convert_bits, Radix, Radix2};

use chain_addr_core::Result;

/// A bidirectional, pure transform between two representations.
///
/// `decode` is the exact functional inverse of `encode`; both either fully
/// succeed or fully fail, never returning partially transformed data.
pub trait Coder<A, B> {
    fn encode(&self, input: A) -> Result<B>;

    fn decode(&self, output: B) -> Result<A>;

    /// Compose with a following coder.
    ///
    /// The result encodes `self` first then `next`, and decodes in the
    /// mirror order (`next` first, then `self`).
    fn chain<Next>(self, next: Next) -> Chain<Self, Next, B>
    where
        Self: Sized,
    {
        Chain::new(self, next)
    }
}
