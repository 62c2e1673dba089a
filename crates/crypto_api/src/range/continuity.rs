use std::sync::Arc;

use parking_lot::Mutex;

use crate::{CryptoError, CryptoResult};

lazy_static! {
    static ref PROCESS_CONTINUITY: Arc<ContinuityTest> = Arc::new(ContinuityTest::new());
}

/// Continuous random number generator test state (FIPS 140-2, 4.9.2).
///
/// Remembers the last candidate seen so that a generator stuck on one value
/// is caught across independent calls, not only within one. The compare and
/// the update happen under one lock.
pub struct ContinuityTest {
    last: Mutex<u64>,
}

impl ContinuityTest {
    pub fn new() -> Self {
        ContinuityTest {
            last: Mutex::new(0),
        }
    }

    /// The instance shared by every sampler built with `RangeSampler::new`.
    pub fn process_wide() -> Arc<ContinuityTest> {
        PROCESS_CONTINUITY.clone()
    }

    /// Record `candidate`. When `enforce` is set and `candidate` repeats the
    /// previous value, fail without touching the stored state.
    pub fn check(&self, candidate: u64, enforce: bool) -> CryptoResult<()> {
        let mut last = self.last.lock();
        if enforce && *last == candidate {
            return Err(CryptoError::SelfTestFailure);
        }
        *last = candidate;
        Ok(())
    }
}

impl Default for ContinuityTest {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContinuityTest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ContinuityTest {{ .. }}")
    }
}
