use std::iter::FromIterator;

use crate::{
    bitmap::Bitmap,
    buffer::Buffer,
    datatypes::{DataType, PhysicalType},
    error::{ArrowError, Result},
};

use super::specification::{try_check_offsets, try_check_utf8, try_check_validity};

/// A [`Utf8Array`] is arrow's equivalent of `Vec<Option<String>>`: a nullable array of
/// utf8 strings stored back to back.
/// # Example
/// ```
/// use arrow_pretty::array::Utf8Array;
///
/// let array = Utf8Array::from(vec![Some("hi"), None, Some("there")]);
/// assert_eq!(array.value(0), "hi");
/// assert_eq!(array.offsets().as_slice(), &[0, 2, 2, 7]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Utf8Array {
    data_type: DataType,
    offsets: Buffer<i32>,
    values: Buffer<u8>,
    validity: Option<Bitmap>,
}

impl Utf8Array {
    /// The canonical method to create a [`Utf8Array`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type`'s physical type is not [`PhysicalType::Utf8`]
    /// * the offsets are not monotonically increasing or exceed `values`
    /// * any slot is not valid utf8
    /// * the validity is not `None` and its length is different from `offsets.len() - 1`
    pub fn try_new(
        data_type: DataType,
        offsets: Buffer<i32>,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        if data_type.to_physical_type() != PhysicalType::Utf8 {
            return Err(ArrowError::InvalidArgumentError(
                "Utf8Array can only be initialized with a DataType whose physical type is Utf8"
                    .to_string(),
            ));
        }
        try_check_offsets(&offsets, values.len())?;
        try_check_utf8(&offsets, &values)?;
        try_check_validity(validity.as_ref(), offsets.len() - 1)?;
        Ok(Self {
            data_type,
            offsets,
            values,
            validity,
        })
    }

    /// Returns a new empty [`Utf8Array`].
    pub fn new_empty() -> Self {
        Self {
            data_type: DataType::Utf8,
            offsets: vec![0].into(),
            values: Buffer::new(),
            validity: None,
        }
    }

    /// Creates a new [`Utf8Array`] without nulls from a slice of strings.
    pub fn from_slice<T: AsRef<str>, P: AsRef<[T]>>(slice: P) -> Self {
        slice.as_ref().iter().map(Some).collect()
    }

    /// Returns a slice of this [`Utf8Array`].
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
impl Utf8Array {
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

    /// Returns the string of slot `i`. This does not take the validity into account.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn value(&self, i: usize) -> &str {
        let start = self.offsets[i] as usize;
        let end = self.offsets[i + 1] as usize;
        let slice = &self.values[start..end];
        // Safety: every slot is checked to be valid utf8 on construction
        unsafe { std::str::from_utf8_unchecked(slice) }
    }
}

impl<T: AsRef<str>> From<Vec<Option<T>>> for Utf8Array {
    fn from(values: Vec<Option<T>>) -> Self {
        Self::from_iter(values)
    }
}

impl<T: AsRef<str>> FromIterator<Option<T>> for Utf8Array {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let iter = iter
            .into_iter()
            .map(|x| x.map(|x| x.as_ref().as_bytes().to_vec()));
        let (offsets, values, validity) = super::unzip_bytes(iter);
        Self {
            data_type: DataType::Utf8,
            offsets: offsets.into(),
            values: values.into(),
            validity: validity.into(),
        }
    }
}
