use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The order in which bit positions map onto the bits of each underlying byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum BitNumbering {
    /// Position 0 is the least significant bit of byte 0.
    LsbFirst,
    /// Position 0 is the most significant bit of byte 0.
    MsbFirst,
}

/// A fixed-size sequence of bits packed into a byte buffer, addressable by position under a
/// chosen [`BitNumbering`].
///
/// The backing buffer never reallocates, so a BitArray built over a bitmap read from disk can
/// hand the same bytes back unchanged through [`as_bytes`](BitArray::as_bytes) or
/// [`into_bytes`](BitArray::into_bytes).
///
/// # Time Complexity
/// All operations on a BitArray run in `O(1)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitArray {
    buf: Box<[u8]>,
    numbering: BitNumbering,
}

impl BitArray {
    /// Creates a BitArray over the provided bytes, preserving their current contents.
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>, numbering: BitNumbering) -> BitArray {
        BitArray {
            buf: bytes.into(),
            numbering,
        }
    }

    /// Creates a BitArray over `bytes` zeroed bytes, with every bit clear.
    pub fn zeroed(bytes: usize, numbering: BitNumbering) -> BitArray {
        BitArray {
            buf: vec![0; bytes].into_boxed_slice(),
            numbering,
        }
    }

    /// The number of addressable bits, eight per underlying byte.
    pub fn max_bit(&self) -> usize {
        self.buf.len() * 8
    }

    pub const fn numbering(&self) -> BitNumbering {
        self.numbering
    }

    /// Returns the value of the bit at `position`.
    ///
    /// # Panics
    /// Panics if `position >= self.max_bit()`.
    pub fn test_bit(&self, position: usize) -> bool {
        self.try_test_bit(position).throw()
    }

    /// Returns the value of the bit at `position`, or [`Err`] if the position is out of range.
    pub fn try_test_bit(&self, position: usize) -> Result<bool, IndexOutOfBounds> {
        self.check_position(position)?;
        Ok(self.buf[position / 8] & self.mask(position) != 0)
    }

    /// Sets the bit at `position` to 1.
    ///
    /// # Panics
    /// Panics if `position >= self.max_bit()`.
    pub fn set_bit(&mut self, position: usize) {
        self.try_set_bit(position).throw();
    }

    /// Sets the bit at `position` to 1, or returns [`Err`] if the position is out of range.
    pub fn try_set_bit(&mut self, position: usize) -> Result<(), IndexOutOfBounds> {
        self.check_position(position)?;
        self.buf[position / 8] |= self.mask(position);
        Ok(())
    }

    /// Sets the bit at `position` to 0.
    ///
    /// # Panics
    /// Panics if `position >= self.max_bit()`.
    pub fn clean_bit(&mut self, position: usize) {
        self.try_clean_bit(position).throw();
    }

    /// Sets the bit at `position` to 0, or returns [`Err`] if the position is out of range.
    pub fn try_clean_bit(&mut self, position: usize) -> Result<(), IndexOutOfBounds> {
        self.check_position(position)?;
        self.buf[position / 8] &= !self.mask(position);
        Ok(())
    }

    /// Returns the number of bits currently set to 1.
    pub fn count_ones(&self) -> usize {
        self.buf.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// A view of the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the BitArray and returns the underlying bytes.
    pub fn into_bytes(self) -> Box<[u8]> {
        self.buf
    }

    const fn mask(&self, position: usize) -> u8 {
        match self.numbering {
            BitNumbering::LsbFirst => 1 << (position % 8),
            BitNumbering::MsbFirst => 0x80 >> (position % 8),
        }
    }

    fn check_position(&self, position: usize) -> Result<(), IndexOutOfBounds> {
        if position < self.max_bit() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index: position,
                len: self.max_bit(),
            })
        }
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.max_bit()).map(|position| u8::from(self.test_bit(position))))
            .finish()
    }
}
