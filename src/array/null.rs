use crate::{bitmap::Bitmap, datatypes::DataType};

/// The concrete [`Array`](super::Array) of [`DataType::Null`]: an array without buffers
/// whose every slot is null.
#[derive(Debug, Clone, PartialEq)]
pub struct NullArray {
    data_type: DataType,
    length: usize,
    offset: usize,
}

impl NullArray {
    /// Returns a new empty [`NullArray`].
    pub fn new_empty() -> Self {
        Self::new_null(0)
    }

    /// Returns a new [`NullArray`] of `length` slots.
    pub fn new_null(length: usize) -> Self {
        Self {
            data_type: DataType::Null,
            length,
            offset: 0,
        }
    }

    /// Returns a slice of this [`NullArray`].
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        assert!(
            offset + length <= self.len(),
            "offset + length may not exceed length of array"
        );
        Self {
            data_type: self.data_type.clone(),
            length,
            offset: self.offset + offset,
        }
    }

    /// The length of this array
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether this array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots skipped since this array was created.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Always [`DataType::Null`]
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Always `None`: a [`NullArray`] has no validity buffer.
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        None
    }

    /// Equal to the length: every slot is null.
    #[inline]
    pub fn null_count(&self) -> usize {
        self.length
    }

    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        assert!(i < self.len());
        true
    }
}
