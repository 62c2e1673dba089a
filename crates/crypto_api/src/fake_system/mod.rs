//! Non-secure random sources for tests.

use std::{collections::VecDeque, num::Wrapping as w};

use parking_lot::Mutex;

use crate::{Buffer, CryptoError, CryptoRandom, CryptoResult, CryptoSystem};

lazy_static! {
    static ref FAKE_SEED: Mutex<u64> = Mutex::new(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x30698bae47984c92)
    );
}

/// xorshift128+ generator. Fast and statistically decent, NOT secure.
pub struct FakeCryptoSystem {
    s: Mutex<[w<u64>; 2]>,
}

impl FakeCryptoSystem {
    /// seeded from a process-wide counter, every instance yields a different stream
    pub fn new() -> Self {
        let seed = {
            let mut seed = FAKE_SEED.lock();
            *seed = seed.wrapping_add(0x9e3779b97f4a7c15);
            *seed
        };
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        // splitmix64 so that no seed leaves the state all zero
        let mut z = w(seed);
        let mut next = || {
            z += w(0x9e3779b97f4a7c15);
            let mut x = z;
            x = (x ^ (x >> 30)) * w(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)) * w(0x94d049bb133111eb);
            x ^ (x >> 31)
        };
        let mut s = [next(), next()];
        if s[0].0 == 0 && s[1].0 == 0 {
            s[1] = w(1);
        }
        FakeCryptoSystem { s: Mutex::new(s) }
    }

    fn next_u64(&self) -> u64 {
        let mut s = self.s.lock();
        let mut s1 = s[0];
        let s0 = s[1];
        s[0] = s0;
        s1 ^= s1 << 23;
        s[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        (s[1] + s0).0
    }
}

impl Default for FakeCryptoSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FakeCryptoSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "FakeCryptoSystem")
    }
}

impl CryptoRandom for FakeCryptoSystem {
    fn randombytes_buf<OutputBuffer: Buffer>(&self, buffer: &mut OutputBuffer) -> CryptoResult<()> {
        let mut buffer = buffer.write_lock();
        for chunk in buffer.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}

impl CryptoSystem for FakeCryptoSystem {}

/// Replays a fixed byte script, one fetch at a time, then fails with
/// `SourceUnavailable` once the script cannot fill a request.
pub struct ScriptedRandom {
    script: Mutex<VecDeque<u8>>,
    fetches: Mutex<usize>,
}

impl ScriptedRandom {
    pub fn new(script: &[u8]) -> Self {
        ScriptedRandom {
            script: Mutex::new(script.iter().cloned().collect()),
            fetches: Mutex::new(0),
        }
    }

    /// fetches attempted so far, failed ones included
    pub fn fetches(&self) -> usize {
        *self.fetches.lock()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

impl std::fmt::Debug for ScriptedRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ScriptedRandom {{ remaining: {} }}", self.remaining())
    }
}

impl CryptoRandom for ScriptedRandom {
    fn randombytes_buf<OutputBuffer: Buffer>(&self, buffer: &mut OutputBuffer) -> CryptoResult<()> {
        *self.fetches.lock() += 1;
        let mut script = self.script.lock();
        if script.len() < buffer.len() {
            return Err(CryptoError::source_unavailable(
                "unable to fetch random data: script exhausted",
            ));
        }
        let bytes: Vec<u8> = script.drain(..buffer.len()).collect();
        buffer.write(0, &bytes)
    }
}

impl CryptoSystem for ScriptedRandom {}
