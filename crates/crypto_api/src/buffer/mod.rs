use zeroize::Zeroize;

use crate::{CryptoError, CryptoResult};

pub mod insecure_buffer;
pub use insecure_buffer::*;

mod buffer_vec_u8;

/// Memory protection applied to a buffer between lock scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectState {
    NoAccess,
    ReadOnly,
    ReadWrite,
}

impl ProtectState {
    fn apply<T: Buffer>(self, buffer: &T) {
        match self {
            ProtectState::NoAccess => buffer.set_no_access(),
            ProtectState::ReadOnly => buffer.set_readable(),
            ProtectState::ReadWrite => buffer.set_writable(),
        }
    }
}

/// Holds a buffer at a protect state for as long as it lives, then drops it
/// back to no access.
pub struct Locked<B>
where
    B: std::ops::Deref,
    B::Target: Buffer,
{
    buffer: B,
}

pub type ReadLocker<'a, T> = Locked<&'a T>;
pub type WriteLocker<'a, T> = Locked<&'a mut T>;

impl<B> Locked<B>
where
    B: std::ops::Deref,
    B::Target: Buffer,
{
    pub fn new(buffer: B, state: ProtectState) -> Self {
        state.apply(&*buffer);
        Locked { buffer }
    }
}

impl<B> Drop for Locked<B>
where
    B: std::ops::Deref,
    B::Target: Buffer,
{
    fn drop(&mut self) {
        ProtectState::NoAccess.apply(&*self.buffer);
    }
}

impl<B> std::fmt::Debug for Locked<B>
where
    B: std::ops::Deref,
    B::Target: Buffer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", &**self.buffer)
    }
}

impl<B> std::ops::Deref for Locked<B>
where
    B: std::ops::Deref,
    B::Target: Buffer,
{
    type Target = B::Target;

    fn deref(&self) -> &B::Target {
        &*self.buffer
    }
}

impl<B> std::ops::DerefMut for Locked<B>
where
    B: std::ops::DerefMut,
    B::Target: Buffer,
{
    fn deref_mut(&mut self) -> &mut B::Target {
        &mut *self.buffer
    }
}

/// This is a thunk so we don't have to type these trait bounds over and over
pub trait BufferType:
    Sized
    + Send
    + Clone
    + std::fmt::Debug
    + std::ops::Deref<Target = [u8]>
    + std::ops::DerefMut<Target = [u8]>
{
}

impl<T> BufferType for T where
    T: Sized
        + Send
        + Clone
        + std::fmt::Debug
        + std::ops::Deref<Target = [u8]>
        + std::ops::DerefMut<Target = [u8]>
{
}

/// A fixed size byte buffer that random sources write into.
pub trait Buffer: BufferType {
    /// allocate a zeroed buffer of `size` bytes
    fn new(size: usize) -> CryptoResult<Self>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_no_access(&self);
    fn set_readable(&self);
    fn set_writable(&self);

    fn read_lock(&self) -> ReadLocker<Self> {
        Locked::new(self, ProtectState::ReadOnly)
    }

    fn write_lock(&mut self) -> WriteLocker<Self> {
        Locked::new(self, ProtectState::ReadWrite)
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> CryptoResult<()> {
        let end = match offset.checked_add(data.len()) {
            Some(end) if end <= self.len() => end,
            _ => return Err(CryptoError::new("write overflow")),
        };
        let mut b = self.write_lock();
        b[offset..end].copy_from_slice(data);
        Ok(())
    }

    fn zero(&mut self) {
        let mut b = self.write_lock();
        b[..].zeroize();
    }
}
