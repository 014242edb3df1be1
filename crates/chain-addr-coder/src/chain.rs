use std::marker::PhantomData;

use chain_addr_core::Result;

use crate::Coder;

/// Two coders composed end-to-end.
///
/// For `Chain<C1, C2>` over `A -> B -> C`:
/// `encode = c2.encode ∘ c1.encode`, `decode = c1.decode ∘ c2.decode`.
pub struct Chain<C1, C2, B> {
    first: C1,
    second: C2,
    _mid: PhantomData<fn() -> B>,
}

impl<C1, C2, B> Chain<C1, C2, B> {
    pub const fn new(first: C1, second: C2) -> Self {
        Self { first, second, _mid: PhantomData }
    }
}

impl<A, B, C, C1, C2> Coder<A, C> for Chain<C1, C2, B>
where
    C1: Coder<A, B>,
    C2: Coder<B, C>,
{
    fn encode(&self, input: A) -> Result<C> {
        self.second.encode(self.first.encode(input)?)
    }

    fn decode(&self, output: C) -> Result<A> {
        self.first.decode(self.second.decode(output)?)
    }
}
