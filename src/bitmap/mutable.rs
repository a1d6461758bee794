use std::iter::FromIterator;

use super::utils::{bytes_for, set};
use super::Bitmap;

/// The mutable counterpart of [`Bitmap`].
#[derive(Debug, Default)]
pub struct MutableBitmap {
    buffer: Vec<u8>,
    length: usize,
}

impl MutableBitmap {
    /// Initializes an empty [`MutableBitmap`].
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            length: 0,
        }
    }

    /// Initializes a zeroed [`MutableBitmap`].
    #[inline]
    pub fn from_len_zeroed(length: usize) -> Self {
        Self {
            buffer: vec![0; bytes_for(length)],
            length,
        }
    }

    /// Initializes an a pre-allocated [`MutableBitmap`] with capacity for `capacity` bits.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bytes_for(capacity)),
            length: 0,
        }
    }

    /// Pushes a new bit to the container, re-sizing it if necessary.
    #[inline]
    pub fn push(&mut self, value: bool) {
        if self.length % 8 == 0 {
            self.buffer.push(0);
        }
        if value {
            let last = self.buffer.len() - 1;
            self.buffer[last] = set(self.buffer[last], self.length % 8, true);
        };
        self.length += 1;
    }

    /// Returns the length of the [`MutableBitmap`] in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns whether [`MutableBitmap`] is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<MutableBitmap> for Bitmap {
    #[inline]
    fn from(buffer: MutableBitmap) -> Self {
        Bitmap::from_u8_vec(buffer.buffer, buffer.length)
    }
}

impl From<MutableBitmap> for Option<Bitmap> {
    /// `None` when no bit is unset, so that arrays without nulls carry no validity.
    #[inline]
    fn from(buffer: MutableBitmap) -> Self {
        let bitmap: Bitmap = buffer.into();
        if bitmap.null_count() > 0 {
            Some(bitmap)
        } else {
            None
        }
    }
}

impl Extend<bool> for MutableBitmap {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        iter.into_iter().for_each(|x| self.push(x))
    }
}

impl FromIterator<bool> for MutableBitmap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let iter = iter.into_iter();
        let mut bitmap = MutableBitmap::with_capacity(iter.size_hint().0);
        bitmap.extend(iter);
        bitmap
    }
}
