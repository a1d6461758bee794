use std::sync::Arc;

use crate::{
    bitmap::Bitmap,
    buffer::Buffer,
    datatypes::{DataType, Field},
    error::{ArrowError, Result},
};

use super::specification::{try_check_offsets, try_check_validity};
use super::Array;

/// An [`Array`] semantically equivalent to `Vec<Option<Vec<Option<T>>>>` with Arrow's in-memory.
/// Slot `i` is `values[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListArray {
    data_type: DataType,
    offsets: Buffer<i32>,
    values: Arc<Array>,
    validity: Option<Bitmap>,
}

impl ListArray {
    /// The canonical method to create a [`ListArray`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type` is not [`DataType::List`] or its child's type differs from `values`'
    /// * the offsets are not monotonically increasing or exceed `values`
    /// * the validity is not `None` and its length is different from `offsets.len() - 1`
    pub fn try_new(
        data_type: DataType,
        offsets: Buffer<i32>,
        values: Arc<Array>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        let child_data_type = Self::try_get_child(&data_type)?.data_type();
        if child_data_type != values.data_type() {
            return Err(ArrowError::InvalidArgumentError(format!(
                "ListArray's child's DataType must match. However, the expected DataType is {:?} while it got {:?}.",
                child_data_type,
                values.data_type()
            )));
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

    /// Returns a slice of this [`ListArray`]. The values are not sliced.
    /// # Panics
    /// panics iff `offset + length > self.len()`
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            data_type: self.data_type.clone(),
            offsets: self.offsets.clone().slice(offset, length + 1),
            values: self.values.clone(),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
        }
    }

    /// Returns a [`DataType::List`] whose inner field is named "item" and is nullable
    pub fn default_datatype(data_type: DataType) -> DataType {
        DataType::List(Box::new(Field::new("item", data_type, true)))
    }

    /// Returns a the inner [`Field`]
    /// # Errors
    /// Errors iff the logical type is not [`DataType::List`].
    pub fn try_get_child(data_type: &DataType) -> Result<&Field> {
        match data_type {
            DataType::List(child) => Ok(child.as_ref()),
            _ => Err(ArrowError::InvalidArgumentError(
                "ListArray expects DataType::List".to_string(),
            )),
        }
    }
}

// accessors
impl ListArray {
    /// Returns the length of this array
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

    /// The offsets [`Buffer`], of length `len() + 1`.
    #[inline]
    pub fn offsets(&self) -> &Buffer<i32> {
        &self.offsets
    }

    /// The values, shared by all slots and never sliced.
    #[inline]
    pub fn values(&self) -> &Arc<Array> {
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

    /// Returns the element at index `i`. This does not take the validity into account.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn value(&self, i: usize) -> Array {
        let start = self.offsets[i] as usize;
        let end = self.offsets[i + 1] as usize;
        self.values.slice(start, end - start)
    }
}
