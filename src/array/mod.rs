//! Contains the [`Array`] enum and its concrete arrays, such as [`PrimitiveArray`] and [`ListArray`].
//!
//! Each variant of [`Array`] corresponds to one physical layout
//! ([`PhysicalType`](crate::datatypes::PhysicalType)). Slicing is `O(1)` on all of them:
//! flat arrays slice their buffers, while nested arrays only move a window over their
//! children, which are shared behind an [`Arc`](std::sync::Arc).
use crate::{bitmap::Bitmap, bitmap::MutableBitmap, datatypes::DataType, types::days_ms, types::f16};

mod binary;
mod boolean;
mod dictionary;
mod fixed_size_binary;
mod list;
mod null;
mod primitive;
mod specification;
mod struct_;
mod union;
mod utf8;

pub use binary::BinaryArray;
pub use boolean::BooleanArray;
pub use dictionary::{DictionaryArray, DictionaryKey};
pub use fixed_size_binary::FixedSizeBinaryArray;
pub use list::ListArray;
pub use null::NullArray;
pub use primitive::PrimitiveArray;
pub use struct_::StructArray;
pub use union::UnionArray;
pub use utf8::Utf8Array;

/// An Arrow array: one variant per physical layout.
///
/// The logical type of each variant is available via [`Array::data_type`], and may differ from
/// its "natural" type (e.g. [`Array::Int32`] can hold a `DataType::Date32`).
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Null(NullArray),
    Boolean(BooleanArray),
    Int8(PrimitiveArray<i8>),
    Int16(PrimitiveArray<i16>),
    Int32(PrimitiveArray<i32>),
    Int64(PrimitiveArray<i64>),
    /// The physical layout of `DataType::Decimal`
    Int128(PrimitiveArray<i128>),
    UInt8(PrimitiveArray<u8>),
    UInt16(PrimitiveArray<u16>),
    UInt32(PrimitiveArray<u32>),
    UInt64(PrimitiveArray<u64>),
    Float16(PrimitiveArray<f16>),
    Float32(PrimitiveArray<f32>),
    Float64(PrimitiveArray<f64>),
    /// The physical layout of `DataType::Interval(IntervalUnit::DayTime)`
    DaysMs(PrimitiveArray<days_ms>),
    Binary(BinaryArray),
    FixedSizeBinary(FixedSizeBinaryArray),
    Utf8(Utf8Array),
    List(ListArray),
    Struct(StructArray),
    Union(UnionArray),
    Dictionary(DictionaryArray),
}

macro_rules! match_array {
    ($array:expr, |$inner:ident| $body:expr) => {
        match $array {
            Array::Null($inner) => $body,
            Array::Boolean($inner) => $body,
            Array::Int8($inner) => $body,
            Array::Int16($inner) => $body,
            Array::Int32($inner) => $body,
            Array::Int64($inner) => $body,
            Array::Int128($inner) => $body,
            Array::UInt8($inner) => $body,
            Array::UInt16($inner) => $body,
            Array::UInt32($inner) => $body,
            Array::UInt64($inner) => $body,
            Array::Float16($inner) => $body,
            Array::Float32($inner) => $body,
            Array::Float64($inner) => $body,
            Array::DaysMs($inner) => $body,
            Array::Binary($inner) => $body,
            Array::FixedSizeBinary($inner) => $body,
            Array::Utf8($inner) => $body,
            Array::List($inner) => $body,
            Array::Struct($inner) => $body,
            Array::Union($inner) => $body,
            Array::Dictionary($inner) => $body,
        }
    };
}

impl Array {
    /// The number of slots of this array
    #[inline]
    pub fn len(&self) -> usize {
        match_array!(self, |array| array.len())
    }

    /// Whether this array has no slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots this array skips from the start of its underlying buffers
    /// (or, for [`StructArray`], of its children).
    #[inline]
    pub fn offset(&self) -> usize {
        match_array!(self, |array| array.offset())
    }

    /// The [`DataType`] of this array
    #[inline]
    pub fn data_type(&self) -> &DataType {
        match_array!(self, |array| array.data_type())
    }

    /// The validity of this array. `None` means that no slot is null, except for [`Array::Null`],
    /// whose slots are all null.
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        match_array!(self, |array| array.validity())
    }

    /// The number of null slots of this array.
    #[inline]
    pub fn null_count(&self) -> usize {
        match_array!(self, |array| array.null_count())
    }

    /// Whether slot `i` is null.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        match_array!(self, |array| array.is_null(i))
    }

    /// Whether slot `i` is not null.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        !self.is_null(i)
    }

    /// Returns a slice of this array. Nested arrays share their children.
    /// # Panics
    /// Panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Array {
        match_array!(self, |array| array.slice(offset, length).into())
    }
}

macro_rules! impl_from {
    ($array:ty, $variant:ident) => {
        impl From<$array> for Array {
            #[inline]
            fn from(array: $array) -> Self {
                Array::$variant(array)
            }
        }
    };
}

impl_from!(NullArray, Null);
impl_from!(BooleanArray, Boolean);
impl_from!(PrimitiveArray<i8>, Int8);
impl_from!(PrimitiveArray<i16>, Int16);
impl_from!(PrimitiveArray<i32>, Int32);
impl_from!(PrimitiveArray<i64>, Int64);
impl_from!(PrimitiveArray<i128>, Int128);
impl_from!(PrimitiveArray<u8>, UInt8);
impl_from!(PrimitiveArray<u16>, UInt16);
impl_from!(PrimitiveArray<u32>, UInt32);
impl_from!(PrimitiveArray<u64>, UInt64);
impl_from!(PrimitiveArray<f16>, Float16);
impl_from!(PrimitiveArray<f32>, Float32);
impl_from!(PrimitiveArray<f64>, Float64);
impl_from!(PrimitiveArray<days_ms>, DaysMs);
impl_from!(BinaryArray, Binary);
impl_from!(FixedSizeBinaryArray, FixedSizeBinary);
impl_from!(Utf8Array, Utf8);
impl_from!(ListArray, List);
impl_from!(StructArray, Struct);
impl_from!(UnionArray, Union);
impl_from!(DictionaryArray, Dictionary);

/// Splits an iterator of optional byte sequences into offsets, values and a validity.
/// `offsets` always starts with `0` and has one more entry than there are items.
pub(crate) fn unzip_bytes<T, I>(iter: I) -> (Vec<i32>, Vec<u8>, MutableBitmap)
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item = Option<T>>,
{
    let iter = iter.into_iter();
    let (lower, _) = iter.size_hint();
    let mut offsets = Vec::with_capacity(lower + 1);
    let mut values = Vec::new();
    let mut validity = MutableBitmap::with_capacity(lower);
    offsets.push(0);
    for item in iter {
        match item {
            Some(bytes) => {
                values.extend_from_slice(bytes.as_ref());
                validity.push(true);
            }
            None => validity.push(false),
        }
        offsets.push(values.len() as i32);
    }
    (offsets, values, validity)
}
