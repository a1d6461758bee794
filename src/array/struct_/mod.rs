use std::sync::Arc;

use crate::{
    bitmap::Bitmap,
    datatypes::{DataType, Field},
    error::{ArrowError, Result},
};

use super::specification::try_check_validity;
use super::Array;

/// A [`StructArray`] is a nested [`Array`] with an optional validity representing
/// multiple [`Array`] with the same number of rows.
///
/// Slicing a [`StructArray`] does not slice its children: it only moves the window
/// (`offset()`, `len()`) over them, which applies to every child.
/// # Example
/// ```
/// use std::sync::Arc;
/// use arrow_pretty::array::*;
/// use arrow_pretty::datatypes::*;
/// let boolean = Arc::new(Array::from(BooleanArray::from_slice(&[false, false, true, true])));
/// let int = Arc::new(Array::from(PrimitiveArray::<i32>::from_slice(&[42, 28, 19, 31])));
///
/// let fields = vec![
///     Field::new("b", DataType::Boolean, false),
///     Field::new("c", DataType::Int32, false),
/// ];
///
/// let array = StructArray::try_new(DataType::Struct(fields), vec![boolean, int], None).unwrap();
/// assert_eq!(array.slice(1, 2).offset(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructArray {
    data_type: DataType,
    values: Vec<Arc<Array>>,
    validity: Option<Bitmap>,
    offset: usize,
    length: usize,
}

impl StructArray {
    /// Canonical method to create a [`StructArray`].
    /// # Errors
    /// This function errors iff:
    /// * `data_type` is not [`DataType::Struct`] or it has no fields
    /// * the number or the types of `values` differ from the fields'
    /// * any element of values has a different length than the first element
    /// * the validity is not `None` and its length is different from the values'
    pub fn try_new(
        data_type: DataType,
        values: Vec<Arc<Array>>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        let fields = Self::try_get_fields(&data_type)?;
        if fields.is_empty() {
            return Err(ArrowError::oos("A StructArray must contain at least one field"));
        }
        if fields.len() != values.len() {
            return Err(ArrowError::oos(format!(
                "A StructArray must have a number of fields in its DataType ({}) equal to the number of child values ({})",
                fields.len(),
                values.len()
            )));
        }
        if let Some((index, (field, value))) = fields
            .iter()
            .zip(values.iter())
            .enumerate()
            .find(|(_, (field, value))| field.data_type() != value.data_type())
        {
            return Err(ArrowError::oos(format!(
                "The children DataTypes of a StructArray must equal the children data types. \
                However, the field {} has data type {:?} but the value has data type {:?}",
                index,
                field.data_type(),
                value.data_type()
            )));
        }

        let length = values[0].len();
        if values.iter().any(|x| x.len() != length) {
            return Err(ArrowError::oos(
                "The children must have an equal number of values",
            ));
        }
        try_check_validity(validity.as_ref(), length)?;

        Ok(Self {
            data_type,
            values,
            validity,
            offset: 0,
            length,
        })
    }

    /// Creates a new [`StructArray`] that is a slice of `self`.
    /// # Panics
    /// * `offset + length` must be smaller than `self.len()`.
    /// # Implementation
    /// This operation is `O(1)`: the children are shared and not sliced.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        assert!(
            offset + length <= self.len(),
            "offset + length may not exceed length of array"
        );
        Self {
            data_type: self.data_type.clone(),
            values: self.values.clone(),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
            offset: self.offset + offset,
            length,
        }
    }

    /// Returns the fields of a [`DataType::Struct`].
    /// # Errors
    /// Errors iff `data_type` is not [`DataType::Struct`]
    pub fn try_get_fields(data_type: &DataType) -> Result<&[Field]> {
        match data_type {
            DataType::Struct(fields) => Ok(fields),
            _ => Err(ArrowError::oos(
                "Struct array must be created with a DataType whose physical type is Struct",
            )),
        }
    }
}

// Accessors
impl StructArray {
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

    /// The position of this array's first slot in its children.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The logical type of this array
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// The fields of this array
    pub fn fields(&self) -> &[Field] {
        match &self.data_type {
            DataType::Struct(fields) => fields,
            _ => &[],
        }
    }

    /// The children of this array, unsliced.
    #[inline]
    pub fn values(&self) -> &[Arc<Array>] {
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
}
