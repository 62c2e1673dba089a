//! strongrand abstract random byte source traits and the unbiased range sampler

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod error;
pub use error::{CryptoError, CryptoResult};

mod buffer;
pub use buffer::{
    insecure_buffer::InsecureBuffer, Buffer, BufferType, Locked, ProtectState, ReadLocker,
    WriteLocker,
};

mod config;
pub use config::{RangeConfig, DEFAULT_CONTINUITY_THRESHOLD_BITS};

mod random;
pub use random::CryptoRandom;

mod range;
pub use range::{ContinuityTest, RangeSampler, RangeWidth};

mod crypto_system;
pub use crypto_system::{crypto_system_test, CryptoSystem};

mod fake_system;
pub use fake_system::{FakeCryptoSystem, ScriptedRandom};
