use std::cell::Cell;

use libc::c_void;
use strongrand_crypto_api::{Buffer, CryptoError, CryptoResult, ProtectState};

use crate::check_init;

/// Random output kept in sodium_malloc guarded pages, mprotect'ed to no
/// access outside of read/write lock scopes. Zeroed by sodium_free.
pub struct SecureBuffer {
    z: *mut c_void,
    s: usize,
    p: Cell<ProtectState>,
}

unsafe impl Send for SecureBuffer {}

impl Drop for SecureBuffer {
    fn drop(&mut self) {
        unsafe {
            rust_sodium_sys::sodium_free(self.z);
        }
    }
}

impl SecureBuffer {
    /// Copy into freshly allocated guarded pages.
    pub fn try_clone(&self) -> CryptoResult<Self> {
        let mut out = SecureBuffer::new(self.s)?;
        out.write(0, &self.read_lock())?;
        Ok(out)
    }
}

impl Clone for SecureBuffer {
    /// # Panics
    ///
    /// When sodium_malloc cannot supply the pages. Use `try_clone` to get
    /// the `OutOfMemory` back instead.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(out) => out,
            Err(e) => panic!("could not clone SecureBuffer: {}", e),
        }
    }
}

impl std::fmt::Debug for SecureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.p.get() {
            ProtectState::NoAccess => write!(f, "SecureBuffer( {:?} )", "<NO_ACCESS>"),
            _ => write!(f, "SecureBuffer( {:?} )", &**self),
        }
    }
}

impl std::ops::Deref for SecureBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        if self.p.get() == ProtectState::NoAccess {
            panic!("Deref, but state is NoAccess");
        }
        unsafe { std::slice::from_raw_parts(self.z as *const u8, self.s) }
    }
}

impl std::ops::DerefMut for SecureBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        if self.p.get() != ProtectState::ReadWrite {
            panic!("DerefMut, but state is not ReadWrite");
        }
        unsafe { std::slice::from_raw_parts_mut(self.z as *mut u8, self.s) }
    }
}

impl Buffer for SecureBuffer {
    fn new(size: usize) -> CryptoResult<Self> {
        check_init()?;
        let z = unsafe {
            let z = rust_sodium_sys::sodium_malloc(size);
            if z.is_null() {
                return Err(CryptoError::OutOfMemory);
            }
            // sodium_malloc fills with 0xdb, start from zero like the other buffers
            std::ptr::write_bytes(z as *mut u8, 0, size);
            rust_sodium_sys::sodium_mprotect_noaccess(z);
            z
        };

        Ok(SecureBuffer {
            z,
            s: size,
            p: Cell::new(ProtectState::NoAccess),
        })
    }

    fn len(&self) -> usize {
        self.s
    }

    fn set_no_access(&self) {
        unsafe {
            rust_sodium_sys::sodium_mprotect_noaccess(self.z);
        }
        self.p.set(ProtectState::NoAccess);
    }

    fn set_readable(&self) {
        unsafe {
            rust_sodium_sys::sodium_mprotect_readonly(self.z);
        }
        self.p.set(ProtectState::ReadOnly);
    }

    fn set_writable(&self) {
        unsafe {
            rust_sodium_sys::sodium_mprotect_readwrite(self.z);
        }
        self.p.set(ProtectState::ReadWrite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_start_zeroed() {
        let b = SecureBuffer::new(8).unwrap();
        assert_eq!(
            "[0, 0, 0, 0, 0, 0, 0, 0]",
            &format!("{:?}", &b.read_lock())
        );
    }

    #[test]
    fn it_should_clone_contents() {
        let mut b1 = SecureBuffer::new(4).unwrap();
        b1.write(0, &[42, 88, 132, 56]).unwrap();
        let b2 = b1.clone();
        b1.zero();
        assert_eq!("[0, 0, 0, 0]", &format!("{:?}", &b1.read_lock()));
        assert_eq!("[42, 88, 132, 56]", &format!("{:?}", &b2.read_lock()));
    }

    #[test]
    fn it_should_try_clone_contents() {
        let mut b1 = SecureBuffer::new(3).unwrap();
        b1.write(0, &[7, 8, 9]).unwrap();
        let b2 = b1.try_clone().unwrap();
        assert_eq!(3, b2.len());
        assert_eq!("[7, 8, 9]", &format!("{:?}", &b2.read_lock()));
        assert_eq!("SecureBuffer( \"<NO_ACCESS>\" )", &format!("{:?}", b2));
        assert_eq!("SecureBuffer( \"<NO_ACCESS>\" )", &format!("{:?}", b1));
    }

    #[test]
    fn it_should_hide_contents_when_locked() {
        let b = SecureBuffer::new(2).unwrap();
        assert_eq!("SecureBuffer( \"<NO_ACCESS>\" )", &format!("{:?}", b));
    }

    #[test]
    fn it_should_reject_write_overflow() {
        let mut b = SecureBuffer::new(2).unwrap();
        assert_eq!(Err(CryptoError::new("write overflow")), b.write(1, &[1, 2]));
    }
}
