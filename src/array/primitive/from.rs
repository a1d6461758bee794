use std::iter::FromIterator;

use crate::{bitmap::MutableBitmap, buffer::Buffer, types::NativeType};

use super::PrimitiveArray;

impl<T: NativeType> PrimitiveArray<T> {
    /// Creates a new [`PrimitiveArray`] without nulls by copying `slice`.
    /// Its [`DataType`](crate::datatypes::DataType) is the natural one of `T`.
    pub fn from_slice<P: AsRef<[T]>>(slice: P) -> Self {
        Self::from_vec(slice.as_ref().to_vec())
    }

    /// Creates a new [`PrimitiveArray`] without nulls from a [`Vec`], without copying it.
    /// Its [`DataType`](crate::datatypes::DataType) is the natural one of `T`.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            data_type: T::PRIMITIVE.into(),
            values: values.into(),
            validity: None,
        }
    }
}

impl<T: NativeType> From<Vec<Option<T>>> for PrimitiveArray<T> {
    fn from(values: Vec<Option<T>>) -> Self {
        Self::from_iter(values)
    }
}

impl<T: NativeType> FromIterator<Option<T>> for PrimitiveArray<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut validity = MutableBitmap::with_capacity(iter.size_hint().0);

        let values: Buffer<T> = iter
            .map(|item| {
                validity.push(item.is_some());
                item.unwrap_or_default()
            })
            .collect();

        Self {
            data_type: T::PRIMITIVE.into(),
            values,
            validity: validity.into(),
        }
    }
}
