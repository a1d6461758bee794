use std::sync::Arc;

use num::ToPrimitive;

use crate::{
    bitmap::Bitmap,
    datatypes::{DataType, IntegerType},
    error::{ArrowError, Result},
    types::NativeType,
};

use super::{primitive::PrimitiveArray, Array};

/// Trait denoting [`NativeType`]s that can be used as keys of a dictionary.
pub trait DictionaryKey: NativeType + ToPrimitive {
    /// The corresponding [`IntegerType`] of this key
    const KEY_TYPE: IntegerType;
}

impl DictionaryKey for i8 {
    const KEY_TYPE: IntegerType = IntegerType::Int8;
}
impl DictionaryKey for i16 {
    const KEY_TYPE: IntegerType = IntegerType::Int16;
}
impl DictionaryKey for i32 {
    const KEY_TYPE: IntegerType = IntegerType::Int32;
}
impl DictionaryKey for i64 {
    const KEY_TYPE: IntegerType = IntegerType::Int64;
}
impl DictionaryKey for u8 {
    const KEY_TYPE: IntegerType = IntegerType::UInt8;
}
impl DictionaryKey for u16 {
    const KEY_TYPE: IntegerType = IntegerType::UInt16;
}
impl DictionaryKey for u32 {
    const KEY_TYPE: IntegerType = IntegerType::UInt32;
}
impl DictionaryKey for u64 {
    const KEY_TYPE: IntegerType = IntegerType::UInt64;
}

/// An [`Array`] whose values are encoded by keys. This [`Array`] is useful when the cardinality of
/// values is low compared to the length of the [`Array`].
///
/// The keys ("indices") carry the length, offset and validity of this array.
/// The values ("dictionary") are shared and never sliced.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryArray {
    data_type: DataType,
    keys: Box<Array>,
    values: Arc<Array>,
}

fn check_indexes<K: DictionaryKey>(keys: &PrimitiveArray<K>, len: usize) -> Result<()> {
    keys.values()
        .iter()
        .enumerate()
        .filter(|(i, _)| !keys.is_null(*i))
        .try_for_each(|(i, key)| match key.to_usize() {
            Some(key) if key < len => Ok(()),
            _ => Err(ArrowError::oos(format!(
                "The key at slot {} ({:?}) is out of bounds of a dictionary of length {}",
                i, key, len
            ))),
        })
}

impl DictionaryArray {
    /// The canonical method to create a new [`DictionaryArray`].
    /// # Errors
    /// This function errors iff:
    /// * `data_type` is not [`DataType::Dictionary`]
    /// * `keys`' type differs from the data type's key type
    /// * `values`' type differs from the data type's value type
    /// * a non-null key is negative or not smaller than `values.len()`
    pub fn try_new(data_type: DataType, keys: Array, values: Arc<Array>) -> Result<Self> {
        let (key_type, value_type) = Self::try_get_all(&data_type)?;
        if keys.data_type() != &DataType::from(key_type) {
            return Err(ArrowError::InvalidArgumentError(format!(
                "DictionaryArray's keys must be of type {:?}, got {:?}",
                key_type,
                keys.data_type()
            )));
        }
        if values.data_type() != value_type {
            return Err(ArrowError::InvalidArgumentError(format!(
                "DictionaryArray's values must be of type {:?}, got {:?}",
                value_type,
                values.data_type()
            )));
        }

        let len = values.len();
        match &keys {
            Array::Int8(keys) => check_indexes(keys, len),
            Array::Int16(keys) => check_indexes(keys, len),
            Array::Int32(keys) => check_indexes(keys, len),
            Array::Int64(keys) => check_indexes(keys, len),
            Array::UInt8(keys) => check_indexes(keys, len),
            Array::UInt16(keys) => check_indexes(keys, len),
            Array::UInt32(keys) => check_indexes(keys, len),
            Array::UInt64(keys) => check_indexes(keys, len),
            _ => Err(ArrowError::InvalidArgumentError(
                "DictionaryArray's keys must be an integer array".to_string(),
            )),
        }?;

        Ok(Self {
            data_type,
            keys: Box::new(keys),
            values,
        })
    }

    /// Creates a new [`DictionaryArray`] whose [`DataType`] is inferred from `keys` and `values`.
    /// # Errors
    /// Errors iff a non-null key is out of bounds of `values`.
    pub fn try_from_keys<K: DictionaryKey>(
        keys: PrimitiveArray<K>,
        values: Arc<Array>,
    ) -> Result<Self>
    where
        Array: From<PrimitiveArray<K>>,
    {
        let data_type = DataType::Dictionary(K::KEY_TYPE, Box::new(values.data_type().clone()));
        // keys with a custom logical type (e.g. date32) are reset to their natural type
        let keys = keys.to(K::KEY_TYPE.into());
        Self::try_new(data_type, keys.into(), values)
    }

    /// Returns a slice of this [`DictionaryArray`]. Only the keys are sliced.
    /// # Panics
    /// Panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self {
            data_type: self.data_type.clone(),
            keys: Box::new(self.keys.slice(offset, length)),
            values: self.values.clone(),
        }
    }

    /// Returns the key and value types of a [`DataType::Dictionary`].
    /// # Errors
    /// Errors iff `data_type` is not [`DataType::Dictionary`]
    pub fn try_get_all(data_type: &DataType) -> Result<(IntegerType, &DataType)> {
        match data_type {
            DataType::Dictionary(keys, values) => Ok((*keys, values.as_ref())),
            _ => Err(ArrowError::oos(
                "Dictionaries must be initialized with DataType::Dictionary",
            )),
        }
    }
}

impl DictionaryArray {
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.keys.offset()
    }

    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// The validity of the keys.
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        self.keys.validity()
    }

    #[inline]
    pub fn null_count(&self) -> usize {
        self.keys.null_count()
    }

    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        self.keys.is_null(i)
    }

    /// The keys of this dictionary, an integer array.
    #[inline]
    pub fn keys(&self) -> &Array {
        &self.keys
    }

    /// The values of this dictionary, unsliced.
    #[inline]
    pub fn values(&self) -> &Arc<Array> {
        &self.values
    }
}
