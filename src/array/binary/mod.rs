use std::iter::FromIterator;

use crate::{
    bitmap::{Bitmap, MutableBitmap},
    buffer::Buffer,
    datatypes::{DataType, PhysicalType},
    error::{ArrowError, Result},
};

use super::specification::{try_check_offsets, try_check_validity};

/// A [`BinaryArray`] is a nullable array of bytes, the arrow equivalent of
/// `Vec<Option<Vec<u8>>>`.
/// Slot `i` is `values[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArray {
    data_type: DataType,
    offsets: Buffer<i32>,
    values: Buffer<u8>,
    validity: Option<Bitmap>,
}

impl BinaryArray {
    /// The canonical method to create a [`BinaryArray`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type`'s physical type is not [`PhysicalType::Binary`]
    /// * the offsets are not monotonically increasing or exceed `values`
    /// * the validity is not `None` and its length is different from `offsets.len() - 1`
    pub fn try_new(
        data_type: DataType,
        offsets: Buffer<i32>,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        if data_type.to_physical_type() != PhysicalType::Binary {
            return Err(ArrowError::InvalidArgumentError(
                "BinaryArray can only be initialized with a DataType whose physical type is Binary"
                    .to_string(),
            ));
        }
        try_check_offsets(&offsets, values.len())?;
        try_check_validity(validity.as_ref(), offsets.len() - 1)?;
        Ok(Self {
            data_type,
            offsets,
            values,
            validity,
        })
    }

    /// Returns a new empty [`BinaryArray`].
    pub fn new_empty() -> Self {
        Self {
            data_type: DataType::Binary,
            offsets: vec![0].into(),
            values: Buffer::new(),
            validity: None,
        }
    }

    /// Creates a new [`BinaryArray`] without nulls from a slice of byte slices.
    pub fn from_slice<T: AsRef<[u8]>, P: AsRef<[T]>>(slice: P) -> Self {
        slice.as_ref().iter().map(Some).collect()
    }

    /// Returns a slice of this [`BinaryArray`].
    /// # Implementation
    /// This operation is `O(1)` as it amounts to essentially increase two ref counts.
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            data_type: self.data_type.clone(),
            offsets: self.offsets.clone().slice(offset, length + 1),
            values: self.values.clone(),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
        }
    }
}

// accessors
impl BinaryArray {
    /// The length of this array
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether this array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots skipped from the start of the offsets' region.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offsets.offset()
    }

    /// The logical type of this array
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// The offsets of this array
    #[inline]
    pub fn offsets(&self) -> &Buffer<i32> {
        &self.offsets
    }

    /// The values of this array, shared by every slot
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
        let start = self.offsets[i] as usize;
        let end = self.offsets[i + 1] as usize;
        &self.values[start..end]
    }
}

impl<T: AsRef<[u8]>> From<Vec<Option<T>>> for BinaryArray {
    fn from(values: Vec<Option<T>>) -> Self {
        Self::from_iter(values)
    }
}

impl<T: AsRef<[u8]>> FromIterator<Option<T>> for BinaryArray {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let (offsets, values, validity) = super::unzip_bytes(iter);
        Self {
            data_type: DataType::Binary,
            offsets: offsets.into(),
            values: values.into(),
            validity: validity.into(),
        }
    }
}
