use std::iter::FromIterator;

use crate::{
    bitmap::{Bitmap, MutableBitmap},
    datatypes::{DataType, PhysicalType},
    error::{ArrowError, Result},
};

use super::specification::try_check_validity;

/// A [`BooleanArray`] is arrow's equivalent to `Vec<Option<bool>>`, i.e.
/// an array designed for highly performant operations on optionally nullable booleans.
/// The size of this struct is `O(1)` as all data is stored behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanArray {
    data_type: DataType,
    values: Bitmap,
    validity: Option<Bitmap>,
}

impl BooleanArray {
    /// The canonical method to create a [`BooleanArray`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type`'s physical type is not [`PhysicalType::Boolean`]
    /// * the validity is not `None` and its length is different from `values`'s length
    pub fn try_new(data_type: DataType, values: Bitmap, validity: Option<Bitmap>) -> Result<Self> {
        if data_type.to_physical_type() != PhysicalType::Boolean {
            return Err(ArrowError::InvalidArgumentError(
                "BooleanArray can only be initialized with a DataType whose physical type is Boolean"
                    .to_string(),
            ));
        }
        try_check_validity(validity.as_ref(), values.len())?;
        Ok(Self {
            data_type,
            values,
            validity,
        })
    }

    /// Returns a [`BooleanArray`] without nulls whose values are `values`.
    /// This is `O(1)` as the bitmap is shared.
    pub fn from_bitmap(values: Bitmap) -> Self {
        Self {
            data_type: DataType::Boolean,
            values,
            validity: None,
        }
    }

    /// Creates a new [`BooleanArray`] without nulls from a slice of `bool`.
    pub fn from_slice<P: AsRef<[bool]>>(slice: P) -> Self {
        Self::from_bitmap(slice.as_ref().iter().copied().collect())
    }

    /// Returns a new empty [`BooleanArray`].
    pub fn new_empty() -> Self {
        Self::from_bitmap(Bitmap::new())
    }

    /// Returns a slice of this [`BooleanArray`].
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    #[inline]
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            data_type: self.data_type.clone(),
            values: self.values.clone().slice(offset, length),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
        }
    }
}

// accessors
impl BooleanArray {
    /// The length of this array
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots skipped from the start of the values' region.
    #[inline]
    pub fn offset(&self) -> usize {
        self.values.offset()
    }

    /// The logical type of this array
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// The values [`Bitmap`].
    #[inline]
    pub fn values(&self) -> &Bitmap {
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

    /// Returns the value at slot `i`. This does not take the validity into account.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn value(&self, i: usize) -> bool {
        self.values.get_bit(i)
    }
}

impl From<Vec<Option<bool>>> for BooleanArray {
    fn from(values: Vec<Option<bool>>) -> Self {
        Self::from_iter(values)
    }
}

impl FromIterator<Option<bool>> for BooleanArray {
    fn from_iter<I: IntoIterator<Item = Option<bool>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut validity = MutableBitmap::with_capacity(iter.size_hint().0);
        let values: MutableBitmap = iter
            .map(|item| {
                validity.push(item.is_some());
                item.unwrap_or(false)
            })
            .collect();

        Self {
            data_type: DataType::Boolean,
            values: values.into(),
            validity: validity.into(),
        }
    }
}
