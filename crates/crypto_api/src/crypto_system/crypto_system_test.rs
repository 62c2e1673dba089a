//! Expose a test suite that can exercise CryptoSystem implementations.
//! You'll probably also need to write unit tests specific to your impl.

use crate::{Buffer, CryptoError, CryptoResult, CryptoSystem};

/// Draw `200 * max` values and panic unless their frequencies pass a
/// chi-square goodness-of-fit test against the uniform distribution.
///
/// The cutoff sits ten standard deviations above the mean of the
/// chi-square distribution, so a fair source essentially never trips it
/// while a biased reduction (e.g. modulo over a byte) does.
pub fn assert_uniform<F>(mut draw: F, max: u64)
where
    F: FnMut() -> CryptoResult<u64>,
{
    const PER_BUCKET: u64 = 200;
    let mut counts = vec![0u64; max as usize];
    for _ in 0..(PER_BUCKET * max) {
        let n = draw().unwrap();
        assert!(n < max, "{} out of range for {}", n, max);
        counts[n as usize] += 1;
    }
    let expected = PER_BUCKET as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|c| {
            let d = *c as f64 - expected;
            d * d / expected
        })
        .sum();
    let df = (max - 1) as f64;
    let cutoff = df + 10.0 * (2.0 * df).sqrt() + 10.0;
    assert!(
        chi_square < cutoff,
        "chi-square {} over cutoff {} for max {}",
        chi_square,
        cutoff,
        max
    );
}

struct FullSuite<'a, Crypto: CryptoSystem> {
    crypto: &'a Crypto,
}

impl<'a, Crypto: CryptoSystem> FullSuite<'a, Crypto> {
    pub fn new(crypto: &'a Crypto) -> Self {
        FullSuite { crypto }
    }

    pub fn run(&self) {
        self.test_bytes();
        self.test_word();
        self.test_range_bounds();
        self.test_range_of_two();
        self.test_range_containment();
        self.test_range_uniformity();
    }

    fn test_bytes(&self) {
        let empty: Vec<u8> = self.crypto.bytes(0).unwrap();
        assert!(empty.is_empty());

        let a: Vec<u8> = self.crypto.bytes(32).unwrap();
        let b: Vec<u8> = self.crypto.bytes(32).unwrap();
        assert_eq!(32, a.len());
        assert_ne!(a, b);

        let mut big: Vec<u8> = self.crypto.bytes(4096).unwrap();
        assert!(big.iter().any(|x| *x != 0));
        big.zero();
        assert!(big.iter().all(|x| *x == 0));
    }

    fn test_word(&self) {
        let words: Vec<usize> = (0..8).map(|_| self.crypto.word().unwrap()).collect();
        assert!(words.iter().any(|w| *w != words[0]));
    }

    fn test_range_bounds(&self) {
        assert_eq!(Err(CryptoError::InvalidBound(0)), self.crypto.range(0));
        assert_eq!(Err(CryptoError::InvalidBound(1)), self.crypto.range(1));
    }

    fn test_range_of_two(&self) {
        let mut seen = [0u64; 2];
        for _ in 0..1000 {
            let n = self.crypto.range(2).unwrap();
            assert!(n < 2);
            seen[n as usize] += 1;
        }
        assert!(seen[0] > 0 && seen[1] > 0);
    }

    fn test_range_containment(&self) {
        for max in &[3u64, 200, 255, 256, 257, 1000, 1 << 32, std::u64::MAX] {
            for _ in 0..500 {
                let n = self.crypto.range(*max).unwrap();
                assert!(n < *max, "{} out of range for {}", n, max);
            }
        }
    }

    fn test_range_uniformity(&self) {
        for max in &[3u64, 10, 37, 1000] {
            assert_uniform(|| self.crypto.range(*max), *max);
        }
    }
}

/// run every check above against `crypto`
pub fn full_suite<Crypto: CryptoSystem>(crypto: &Crypto) {
    FullSuite::new(crypto).run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeCryptoSystem;

    #[test]
    fn fake_system_should_pass_full_suite() {
        full_suite(&FakeCryptoSystem::new());
    }

    #[test]
    #[should_panic(expected = "chi-square")]
    fn it_should_catch_modulo_bias() {
        let fake = FakeCryptoSystem::with_seed(3);
        assert_uniform(
            || {
                let b: Vec<u8> = fake.bytes(1)?;
                Ok(u64::from(b[0]) % 100)
            },
            100,
        );
    }
}
