//! strongrand libsodium backed random byte source

extern crate libc;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate rust_sodium_sys;
extern crate strongrand_crypto_api;

use strongrand_crypto_api::{CryptoError, CryptoResult};

/// mutable c pointer into the bytes behind a buffer lock
macro_rules! raw_ptr_void {
    ($name: ident) => {
        $name.as_mut_ptr() as *mut libc::c_void
    };
}

lazy_static! {
    static ref SODIUM_INIT: bool = {
        // 0 on first init, 1 if already initialized, -1 on failure
        let res = unsafe { rust_sodium_sys::sodium_init() };
        debug!("sodium_init returned {}", res);
        res >= 0
    };
}

/// Initialize libsodium once per process. Failure means no random number
/// generator could be acquired.
pub fn check_init() -> CryptoResult<()> {
    if *SODIUM_INIT {
        Ok(())
    } else {
        Err(CryptoError::source_unavailable(
            "unable to acquire random number generator",
        ))
    }
}

mod crypto_system;
pub use crypto_system::{SecureBuffer, SodiumCryptoSystem};
