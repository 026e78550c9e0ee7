/// Error type used when a 16-byte window does not fit inside of a buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BoundsCheckError {
    offset: usize,
    buffer_len: usize,
}

impl BoundsCheckError {
    pub(crate) const fn new(offset: usize, buffer_len: usize) -> Self {
        Self { offset, buffer_len }
    }

    /// The offset of the first byte of the window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length, in bytes, of the buffer that was accessed.
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn fail(self) -> ! {
        panic!("{self}")
    }
}

impl core::fmt::Display for BoundsCheckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "16-byte window at offset {} is out of bounds for a buffer of length {}",
            self.offset, self.buffer_len
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoundsCheckError {}
