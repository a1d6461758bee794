use crate::{
    bitmap::{Bitmap, MutableBitmap},
    buffer::Buffer,
    datatypes::DataType,
    error::{ArrowError, Result},
};

use super::specification::try_check_validity;

/// The Arrow's equivalent to an immutable `Vec<Option<[u8; size]>>`.
/// Cloning and slicing this struct is `O(1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSizeBinaryArray {
    size: usize, // this is redundant with `data_type`, but useful to not have to deconstruct the data_type.
    data_type: DataType,
    values: Buffer<u8>,
    validity: Option<Bitmap>,
}

impl FixedSizeBinaryArray {
    /// The canonical method to create a [`FixedSizeBinaryArray`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type` is not [`DataType::FixedSizeBinary`] or its size is zero
    /// * `values.len()` is not a multiple of the size
    /// * the validity is not `None` and its length is different from the number of slots
    pub fn try_new(
        data_type: DataType,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        let size = Self::maybe_get_size(&data_type)?;

        if values.len() % size != 0 {
            return Err(ArrowError::oos(format!(
                "values (of len {}) must be a multiple of size ({}) in FixedSizeBinaryArray.",
                values.len(),
                size
            )));
        }
        try_check_validity(validity.as_ref(), values.len() / size)?;

        Ok(Self {
            size,
            data_type,
            values,
            validity,
        })
    }

    /// Creates a new [`FixedSizeBinaryArray`] from an iterator of optional byte slices.
    /// Null slots are zero-filled.
    /// # Errors
    /// This function errors iff `size` is zero or any value has a length different from `size`.
    pub fn try_from_iter<P: AsRef<[u8]>, I: IntoIterator<Item = Option<P>>>(
        iter: I,
        size: usize,
    ) -> Result<Self> {
        let iter = iter.into_iter();
        let mut validity = MutableBitmap::with_capacity(iter.size_hint().0);
        let mut values = Vec::<u8>::with_capacity(iter.size_hint().0 * size);
        for item in iter {
            match item {
                Some(bytes) => {
                    let bytes = bytes.as_ref();
                    if bytes.len() != size {
                        return Err(ArrowError::InvalidArgumentError(format!(
                            "FixedSizeBinaryArray requires every item to be of size {} (got {})",
                            size,
                            bytes.len()
                        )));
                    }
                    values.extend_from_slice(bytes);
                    validity.push(true);
                }
                None => {
                    values.extend(std::iter::repeat(0).take(size));
                    validity.push(false);
                }
            }
        }
        Self::try_new(
            DataType::FixedSizeBinary(size),
            values.into(),
            validity.into(),
        )
    }

    /// Returns a slice of this [`FixedSizeBinaryArray`].
    /// # Implementation
    /// This operation is `O(1)` as it amounts to essentially increase two ref counts.
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            size: self.size,
            data_type: self.data_type.clone(),
            values: self
                .values
                .clone()
                .slice(offset * self.size, length * self.size),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
        }
    }

    fn maybe_get_size(data_type: &DataType) -> Result<usize> {
        match data_type {
            DataType::FixedSizeBinary(size) if *size > 0 => Ok(*size),
            DataType::FixedSizeBinary(_) => Err(ArrowError::oos(
                "FixedSizeBinaryArray expects a positive size",
            )),
            _ => Err(ArrowError::InvalidArgumentError(
                "FixedSizeBinaryArray expects DataType::FixedSizeBinary".to_string(),
            )),
        }
    }
}

// accessors
impl FixedSizeBinaryArray {
    /// The length of this array
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len() / self.size
    }

    /// Whether this array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots skipped from the start of the values' region.
    #[inline]
    pub fn offset(&self) -> usize {
        self.values.offset() / self.size
    }

    /// The logical type of this array
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Returns the size, in bytes, of every slot
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The values of this array
    #[inline]
    pub fn values(&self) -> &Buffer<u8> {
        &self.values
    }

    /// The optional validity.
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        self.validity.as_ref()
    }

    /// The number of null slots
    #[inline]
    pub fn null_count(&self) -> usize {
        self.validity.as_ref().map(|x| x.null_count()).unwrap_or(0)
    }

    /// Whether slot `i` is null
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        self.validity.as_ref().map(|x| !x.get_bit(i)).unwrap_or(false)
    }

    /// Returns the bytes of slot `i`. This does not take the validity into account.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn value(&self, i: usize) -> &[u8] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}
