use crate::{Buffer, CryptoRandom, CryptoResult, RangeSampler};

const WORD_BYTES: usize = std::mem::size_of::<usize>();

/// The random facility: raw bytes, a raw machine word, and unbiased
/// integers below a bound. Implementors only supply `CryptoRandom`.
pub trait CryptoSystem: CryptoRandom + Sized {
    /// `count` random bytes in a freshly allocated buffer.
    fn bytes<OutputBuffer: Buffer>(&self, count: usize) -> CryptoResult<OutputBuffer> {
        let mut out = OutputBuffer::new(count)?;
        self.randombytes_buf(&mut out)?;
        Ok(out)
    }

    /// one machine word of random bytes, no range reduction
    fn word(&self) -> CryptoResult<usize> {
        let mut raw: Vec<u8> = self.bytes(WORD_BYTES)?;
        let mut word = [0; WORD_BYTES];
        word.copy_from_slice(&raw);
        raw.zero();
        Ok(usize::from_ne_bytes(word))
    }

    /// uniform integer in `[0, max)`, see `RangeSampler::sample`
    fn range(&self, max: u64) -> CryptoResult<u64> {
        RangeSampler::new(self).sample(max)
    }
}

pub mod crypto_system_test;
