use crate::{Buffer, CryptoError, CryptoResult};

/// grow `bytes` to `size` zeroes without aborting the process on
/// allocation failure
pub(crate) fn try_alloc(bytes: &mut Vec<u8>, size: usize) -> CryptoResult<()> {
    bytes
        .try_reserve_exact(size)
        .map_err(|_| CryptoError::OutOfMemory)?;
    bytes.resize(size, 0);
    Ok(())
}

impl Buffer for Vec<u8> {
    fn new(size: usize) -> CryptoResult<Self> {
        let mut out = Vec::new();
        try_alloc(&mut out, size)?;
        Ok(out)
    }
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
    fn set_no_access(&self) {}
    fn set_readable(&self) {}
    fn set_writable(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_allocate_zeroed() {
        let b: Vec<u8> = Buffer::new(5).unwrap();
        assert_eq!(vec![0; 5], b);
    }

    #[test]
    fn it_should_fail_huge_allocation() {
        let res: CryptoResult<Vec<u8>> = Buffer::new(std::usize::MAX);
        assert_eq!(Err(CryptoError::OutOfMemory), res);
    }
}
