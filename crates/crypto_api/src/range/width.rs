use crate::{CryptoError, CryptoResult};

/// Bit and byte width of the candidates drawn for one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWidth {
    bits: u32,
    log2_ceil_bits: u32,
    bytes: usize,
}

impl RangeWidth {
    /// Number of bits needed to represent `max - 1`, and the whole bytes
    /// that hold them. At least one byte is always drawn.
    pub fn for_bound(max: u64) -> CryptoResult<Self> {
        if max <= 1 {
            return Err(CryptoError::InvalidBound(max));
        }
        let bits = 64 - (max - 1).leading_zeros();
        let log2_ceil_bits = 64 - (max - 2).leading_zeros();
        let bytes = std::cmp::max(1, ((bits + 7) / 8) as usize);
        Ok(RangeWidth {
            bits,
            log2_ceil_bits,
            bytes,
        })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// `ceil(log2(max - 1))`, zero for `max = 2`. One less than `bits()`
    /// when `max - 1` is a power of two. The self-test is gated on this.
    pub fn log2_ceil_bits(&self) -> u32 {
        self.log2_ceil_bits
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// little-endian decode of the first `bytes()` bytes of `raw`
    pub fn decode(&self, raw: &[u8]) -> u64 {
        raw.iter()
            .take(self.bytes)
            .rev()
            .fold(0, |acc, b| (acc << 8) | u64::from(*b))
    }
}
