use crate::{
    bitmap::Bitmap,
    buffer::Buffer,
    datatypes::{DataType, PhysicalType},
    error::{ArrowError, Result},
    types::NativeType,
};

use super::specification::try_check_validity;

mod from;

/// A [`PrimitiveArray`] is arrow's equivalent to `Vec<Option<T: NativeType>>`, i.e.
/// an array designed for highly performant operations on optionally nullable slots,
/// with uniform types such as `i32` or `f64`.
/// The size of this struct is `O(1)` as all data is stored behind an `Arc`.
/// # Example
/// ```
/// use arrow_pretty::array::PrimitiveArray;
/// use arrow_pretty::datatypes::DataType;
///
/// let array = PrimitiveArray::<i32>::from(vec![Some(1), None, Some(3)]);
/// assert_eq!(array.data_type(), &DataType::Int32);
/// assert_eq!(array.null_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveArray<T: NativeType> {
    data_type: DataType,
    values: Buffer<T>,
    validity: Option<Bitmap>,
}

fn check<T: NativeType>(
    data_type: &DataType,
    values: &[T],
    validity: Option<&Bitmap>,
) -> Result<()> {
    if data_type.to_physical_type() != PhysicalType::Primitive(T::PRIMITIVE) {
        return Err(ArrowError::InvalidArgumentError(format!(
            "PrimitiveArray can only be initialized with a DataType whose physical type is {:?}, got {:?}",
            T::PRIMITIVE,
            data_type
        )));
    }
    try_check_validity(validity, values.len())
}

impl<T: NativeType> PrimitiveArray<T> {
    /// The canonical method to create a [`PrimitiveArray`] out of its internal components.
    /// # Errors
    /// This function errors iff:
    /// * `data_type`'s physical type is not equal to [`crate::datatypes::PhysicalType::Primitive(T::PRIMITIVE)`]
    /// * the validity is not `None` and its length is different from `values`'s length
    pub fn try_new(
        data_type: DataType,
        values: Buffer<T>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        check(&data_type, &values, validity.as_ref())?;
        Ok(Self {
            data_type,
            values,
            validity,
        })
    }

    /// Returns a new empty [`PrimitiveArray`] with the natural [`DataType`] of `T`.
    pub fn new_empty() -> Self {
        Self::from_vec(vec![])
    }

    /// Returns a new [`PrimitiveArray`] whose all slots are null / `None`.
    pub fn new_null(length: usize) -> Self {
        Self {
            data_type: T::PRIMITIVE.into(),
            values: Buffer::new_zeroed(length),
            validity: Some(Bitmap::new_zeroed(length)),
        }
    }

    /// Returns a new [`PrimitiveArray`] with a different logical type.
    /// This is `O(1)`.
    /// # Panics
    /// Panics iff `data_type`'s physical type is not `T`'s.
    #[inline]
    pub fn to(self, data_type: DataType) -> Self {
        if data_type.to_physical_type() != PhysicalType::Primitive(T::PRIMITIVE) {
            panic!(
                "Type {} does not support logical type {:?}",
                std::any::type_name::<T>(),
                data_type
            )
        }
        Self {
            data_type,
            values: self.values,
            validity: self.validity,
        }
    }

    /// Returns a slice of this [`PrimitiveArray`].
    /// # Implementation
    /// This operation is `O(1)` as it amounts to essentially increase two ref counts.
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
impl<T: NativeType> PrimitiveArray<T> {
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

    /// The values [`Buffer`].
    #[inline]
    pub fn values(&self) -> &Buffer<T> {
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
    pub fn value(&self, i: usize) -> T {
        self.values[i]
    }
}
