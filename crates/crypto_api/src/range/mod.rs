//! Unbiased integers in `[0, max)` from a stream of random bytes.
//!
//! Complex discard method of NIST SP 800-90A B.5.1.2, drawing whole bytes
//! instead of bits: candidates of the minimal byte width are drawn until one
//! falls below `max`. Every accepted value is equally likely. Draws are run
//! through a continuous self-test before the acceptance check.

use std::sync::Arc;

use zeroize::Zeroize;

use crate::{Buffer, CryptoError, CryptoRandom, CryptoResult, RangeConfig};

mod continuity;
pub use continuity::ContinuityTest;

mod width;
pub use width::RangeWidth;

/// Draws unbiased bounded integers from a `CryptoRandom` source.
///
/// # Examples
///
/// ```
/// use strongrand_crypto_api::{FakeCryptoSystem, RangeSampler};
///
/// let sampler = RangeSampler::new(FakeCryptoSystem::with_seed(7));
/// let n = sampler.sample(37).unwrap();
/// assert!(n < 37);
/// ```
#[derive(Debug)]
pub struct RangeSampler<Random: CryptoRandom> {
    random: Random,
    continuity: Arc<ContinuityTest>,
    config: RangeConfig,
}

impl<Random: CryptoRandom> RangeSampler<Random> {
    /// sampler sharing the process-wide continuity state
    pub fn new(random: Random) -> Self {
        Self::with_continuity(random, ContinuityTest::process_wide())
    }

    pub fn with_continuity(random: Random, continuity: Arc<ContinuityTest>) -> Self {
        RangeSampler {
            random,
            continuity,
            config: RangeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RangeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Uniform `n` with `0 <= n < max`.
    ///
    /// Fails with `InvalidBound` for `max <= 1`, with whatever the source
    /// reports when a fetch fails, and with `SelfTestFailure` when a wide
    /// candidate repeats the previous one.
    pub fn sample(&self, max: u64) -> CryptoResult<u64> {
        let width = RangeWidth::for_bound(max)?;
        let enforce = width.log2_ceil_bits() > self.config.continuity_threshold_bits();
        trace!(
            "range: bound needs {} bits, drawing {} bytes, self-test {}",
            width.bits(),
            width.bytes(),
            if enforce { "on" } else { "off" }
        );

        let mut raw: Vec<u8> = Buffer::new(width.bytes())?;
        let mut discarded: u64 = 0;
        loop {
            self.random.randombytes_buf(&mut raw)?;
            let candidate = width.decode(&raw);
            raw[..].zeroize();

            self.continuity.check(candidate, enforce)?;

            if candidate < max {
                return Ok(candidate);
            }

            discarded += 1;
            trace!("range: discarded out-of-range candidate #{}", discarded);
            if let Some(limit) = self.config.max_discards() {
                if discarded >= limit {
                    return Err(CryptoError::SourceUnavailable(format!(
                        "no candidate below bound after {} draws",
                        discarded
                    )));
                }
            }
        }
    }
}
