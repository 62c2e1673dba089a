use std::{
    cell::Cell,
    ops::{Deref, DerefMut},
};

use zeroize::Zeroize;

use crate::{Buffer, CryptoResult, ProtectState};

/// Heap buffer that tracks lock state but has no memory protection.
/// Contents are zeroized on drop.
#[derive(Clone)]
pub struct InsecureBuffer {
    bytes: Box<[u8]>,
    state: Cell<ProtectState>,
}

impl std::fmt::Debug for InsecureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.state.get() {
            ProtectState::NoAccess => write!(f, "InsecureBuffer( {:?} )", "<NO_ACCESS>"),
            _ => write!(f, "InsecureBuffer( {:?} )", &self.bytes),
        }
    }
}

impl Drop for InsecureBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl Deref for InsecureBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        if self.state.get() == ProtectState::NoAccess {
            panic!("Deref, but state is NoAccess");
        }
        &self.bytes
    }
}

impl DerefMut for InsecureBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        if self.state.get() != ProtectState::ReadWrite {
            panic!("DerefMut, but state is not ReadWrite");
        }
        &mut self.bytes
    }
}

impl Buffer for InsecureBuffer {
    fn new(size: usize) -> CryptoResult<Self> {
        let mut bytes = Vec::new();
        super::buffer_vec_u8::try_alloc(&mut bytes, size)?;
        Ok(InsecureBuffer {
            bytes: bytes.into_boxed_slice(),
            state: Cell::new(ProtectState::NoAccess),
        })
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn set_no_access(&self) {
        self.state.set(ProtectState::NoAccess);
    }

    fn set_readable(&self) {
        self.state.set(ProtectState::ReadOnly);
    }

    fn set_writable(&self) {
        self.state.set(ProtectState::ReadWrite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_hide_contents_when_locked() {
        let mut b = InsecureBuffer::new(2).unwrap();
        b.write(0, &[1, 2]).unwrap();
        assert_eq!("InsecureBuffer( \"<NO_ACCESS>\" )", &format!("{:?}", b));
        assert_eq!("[1, 2]", &format!("{:?}", b.read_lock()));
    }

    #[test]
    #[should_panic(expected = "Deref, but state is NoAccess")]
    fn it_should_panic_on_unlocked_read() {
        let b = InsecureBuffer::new(1).unwrap();
        let _first = b[0];
    }

    #[test]
    #[should_panic(expected = "DerefMut, but state is not ReadWrite")]
    fn it_should_panic_on_read_locked_write() {
        let mut b = InsecureBuffer::new(1).unwrap();
        b.set_readable();
        b[0] = 1;
    }
}
