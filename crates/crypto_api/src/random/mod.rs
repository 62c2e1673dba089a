use crate::{Buffer, CryptoResult};

/// A source of cryptographically strong random bytes.
///
/// Implementations either fill the whole buffer or fail with
/// `CryptoError::SourceUnavailable`. Retry policy, if any, belongs here and
/// not to callers such as the range sampler.
pub trait CryptoRandom {
    fn randombytes_buf<OutputBuffer: Buffer>(&self, buffer: &mut OutputBuffer) -> CryptoResult<()>;
}

impl<'a, Random: CryptoRandom> CryptoRandom for &'a Random {
    fn randombytes_buf<OutputBuffer: Buffer>(&self, buffer: &mut OutputBuffer) -> CryptoResult<()> {
        (**self).randombytes_buf(buffer)
    }
}
