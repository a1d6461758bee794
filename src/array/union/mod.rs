use std::sync::Arc;

use crate::{
    bitmap::Bitmap,
    buffer::Buffer,
    datatypes::{DataType, Field, UnionMode},
    error::{ArrowError, Result},
};

use super::specification::try_check_validity;
use super::Array;

/// [`UnionArray`] represents an array whose each slot can be of a different type.
///
/// Slot `i` holds `fields[types[i]]` at position `offsets[i]` (dense) or `i` (sparse).
/// Slicing only slices `types` (and `offsets`); the children are shared.
// Note: type ids are the field positions. Mapping arbitrary type codes onto
// positions is not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionArray {
    data_type: DataType,
    types: Buffer<i8>,
    offsets: Option<Buffer<i32>>,
    fields: Vec<Arc<Array>>,
    validity: Option<Bitmap>,
}

impl UnionArray {
    /// Canonical method to create a [`UnionArray`].
    /// # Errors
    /// This function errors iff:
    /// * `data_type` is not [`DataType::Union`]
    /// * the number or the types of `fields` differ from the data type's fields
    /// * `offsets` is `Some` iff the mode is dense, and has the length of `types`
    /// * a type id is negative or not smaller than the number of fields
    /// * in sparse mode, a child is shorter than `types`
    /// * in dense mode, an offset is out of bounds of its child
    /// * the validity is not `None` and its length is different from `types`'
    pub fn try_new(
        data_type: DataType,
        types: Buffer<i8>,
        fields: Vec<Arc<Array>>,
        offsets: Option<Buffer<i32>>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        let (declared, mode) = Self::try_get_all(&data_type)?;

        if declared.len() != fields.len() {
            return Err(ArrowError::oos(
                "The number of `fields` must equal the number of fields in the Union DataType",
            ));
        }
        if let Some((index, (field, child))) = declared
            .iter()
            .zip(fields.iter())
            .enumerate()
            .find(|(_, (field, child))| field.data_type() != child.data_type())
        {
            return Err(ArrowError::oos(format!(
                "The children DataTypes of a UnionArray must equal the children data types. \
                However, the field {} has data type {:?} but the value has data type {:?}",
                index,
                field.data_type(),
                child.data_type()
            )));
        }

        match (mode, offsets.as_ref()) {
            (UnionMode::Dense, Some(offsets)) => {
                if offsets.len() != types.len() {
                    return Err(ArrowError::oos(
                        "In a dense UnionArray, the offsets must have the same length as the types",
                    ));
                }
            }
            (UnionMode::Dense, None) => {
                return Err(ArrowError::oos("A dense UnionArray must have offsets"))
            }
            (UnionMode::Sparse, Some(_)) => {
                return Err(ArrowError::oos("A sparse UnionArray must not have offsets"))
            }
            (UnionMode::Sparse, None) => {
                if fields.iter().any(|child| child.len() < types.len()) {
                    return Err(ArrowError::oos(
                        "In a sparse UnionArray, every child must be at least as long as the types",
                    ));
                }
            }
        }

        for (i, id) in types.iter().enumerate() {
            if *id < 0 || *id as usize >= fields.len() {
                return Err(ArrowError::oos(format!(
                    "The type id at slot {} ({}) does not correspond to a field",
                    i, id
                )));
            }
            if let Some(offsets) = offsets.as_ref() {
                let offset = offsets[i];
                if offset < 0 || offset as usize >= fields[*id as usize].len() {
                    return Err(ArrowError::oos(format!(
                        "The offset at slot {} ({}) is out of bounds of its child",
                        i, offset
                    )));
                }
            }
        }

        try_check_validity(validity.as_ref(), types.len())?;

        Ok(Self {
            data_type,
            types,
            offsets,
            fields,
            validity,
        })
    }

    /// Returns a slice of this [`UnionArray`].
    /// # Implementation
    /// This operation is `O(1)`: the children are shared and not sliced.
    /// # Panics
    /// Panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            data_type: self.data_type.clone(),
            types: self.types.clone().slice(offset, length),
            offsets: self.offsets.clone().map(|x| x.slice(offset, length)),
            fields: self.fields.clone(),
            validity: self.validity.clone().map(|x| x.slice(offset, length)),
        }
    }

    /// Returns the declared fields and the mode of a [`DataType::Union`].
    /// # Errors
    /// Errors iff `data_type` is not [`DataType::Union`]
    pub fn try_get_all(data_type: &DataType) -> Result<(&[Field], UnionMode)> {
        match data_type {
            DataType::Union(fields, mode) => Ok((fields, *mode)),
            _ => Err(ArrowError::oos(
                "The UnionArray requires a logical type of DataType::Union",
            )),
        }
    }
}

impl UnionArray {
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots skipped from the start of `types`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.types.offset()
    }

    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Whether this union is in sparse mode.
    #[inline]
    pub fn is_sparse(&self) -> bool {
        self.offsets.is_none()
    }

    /// The type id of each slot.
    #[inline]
    pub fn types(&self) -> &Buffer<i8> {
        &self.types
    }

    /// The position of each slot in its child; `None` in sparse mode.
    #[inline]
    pub fn offsets(&self) -> Option<&Buffer<i32>> {
        self.offsets.as_ref()
    }

    /// The children of this array, unsliced.
    #[inline]
    pub fn fields(&self) -> &[Arc<Array>] {
        &self.fields
    }

    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        self.validity.as_ref()
    }

    #[inline]
    pub fn null_count(&self) -> usize {
        self.validity.as_ref().map(|x| x.null_count()).unwrap_or(0)
    }

    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        self.validity.as_ref().map(|x| !x.get_bit(i)).unwrap_or(false)
    }

    /// Returns the single-slot array at index `i`, sliced from its child.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    pub fn value(&self, i: usize) -> Array {
        let field = &self.fields[self.types[i] as usize];
        let index = self
            .offsets
            .as_ref()
            .map(|x| x[i] as usize)
            .unwrap_or(self.offset() + i);
        field.slice(index, 1)
    }
}
