mod secure_buffer;
pub use secure_buffer::SecureBuffer;

/// the [libsodium](https://libsodium.org) implementation of
/// strongrand_crypto_api::CryptoSystem
///
/// # Examples
///
/// ```
/// extern crate strongrand_crypto_api;
/// use strongrand_crypto_api::{Buffer, CryptoSystem};
///
/// extern crate strongrand_sodium;
/// use strongrand_sodium::{SecureBuffer, SodiumCryptoSystem};
///
/// // It is recommended to use CryptoSystem as a Generic Trait like this:
/// fn roll<Crypto: CryptoSystem>(crypto: &Crypto) -> u64 {
///     crypto.range(6).unwrap() + 1
/// }
///
/// fn main() {
///     let crypto = SodiumCryptoSystem::new();
///
///     let die = roll(&crypto);
///     assert!(die >= 1 && die <= 6);
///
///     let key: SecureBuffer = crypto.bytes(32).unwrap();
///     assert_eq!(32, key.len());
///
///     let _word = crypto.word().unwrap();
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SodiumCryptoSystem {}

impl SodiumCryptoSystem {
    pub fn new() -> Self {
        SodiumCryptoSystem {}
    }
}

mod random;

impl strongrand_crypto_api::CryptoSystem for SodiumCryptoSystem {}
