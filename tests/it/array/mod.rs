mod list;
mod union;

use std::iter::FromIterator;
use std::sync::Arc;

use arrow_pretty::array::*;
use arrow_pretty::bitmap::Bitmap;
use arrow_pretty::buffer::Buffer;
use arrow_pretty::datatypes::{DataType, Field, TimeUnit};

#[test]
fn offsets() {
    let array = Array::from(PrimitiveArray::<i32>::from_slice(&[1, 2, 3, 4]));
    assert_eq!(array.offset(), 0);
    let array = array.slice(1, 3).slice(1, 1);
    assert_eq!(array.offset(), 2);
    assert_eq!(array.len(), 1);

    let array = Array::from(Utf8Array::from_slice(&["a", "bb", "ccc"])).slice(1, 2);
    assert_eq!(array.offset(), 1);

    let array = Array::from(BooleanArray::from_slice(&[true, false, true])).slice(2, 1);
    assert_eq!(array.offset(), 2);

    let array = Array::from(NullArray::new_null(4)).slice(3, 1);
    assert_eq!(array.offset(), 3);
}

#[test]
fn nulls() {
    let arrays = vec![
        Array::from(PrimitiveArray::<i32>::from(vec![Some(1), None])),
        Array::from(PrimitiveArray::<f64>::from(vec![Some(1.0), None])),
        Array::from(Utf8Array::from(vec![Some("a"), None])),
        Array::from(BinaryArray::from(vec![Some(&b"a"[..]), None])),
        Array::from(BooleanArray::from(vec![Some(true), None])),
    ];
    for array in arrays {
        assert_eq!(array.null_count(), 1);
        assert!(array.is_valid(0));
        assert!(array.is_null(1));
    }

    let array = Array::from(NullArray::new_null(2));
    assert_eq!(array.null_count(), 2);
    assert!(array.is_null(0));
    assert_eq!(array.validity(), None);
}

#[test]
fn logical_type_is_kept() {
    let array = PrimitiveArray::<i64>::from_slice(&[1])
        .to(DataType::Timestamp(TimeUnit::Millisecond, None));
    let array = Array::from(array).slice(0, 1);
    assert_eq!(
        array.data_type(),
        &DataType::Timestamp(TimeUnit::Millisecond, None)
    );
}

#[test]
fn wrong_physical_type() {
    let result = PrimitiveArray::<i32>::try_new(DataType::Int64, Buffer::from(vec![1]), None);
    assert!(result.is_err());
}

#[test]
fn wrong_validity_length() {
    let validity = Some(Bitmap::from_iter(vec![true]));
    let result = PrimitiveArray::<i32>::try_new(DataType::Int32, Buffer::from(vec![1, 2]), validity);
    assert!(result.is_err());
}

#[test]
fn invalid_utf8() {
    let result = Utf8Array::try_new(
        DataType::Utf8,
        Buffer::from(vec![0, 2]),
        Buffer::from(vec![0xffu8, 0xfe]),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn struct_slice_is_a_window() {
    let a = Arc::new(Array::from(PrimitiveArray::<i32>::from_slice(&[1, 2, 3])));
    let fields = vec![Field::new("a", DataType::Int32, false)];
    let array = StructArray::try_new(DataType::Struct(fields), vec![a], None).unwrap();
    let array = Array::from(array).slice(1, 2);

    assert_eq!(array.offset(), 1);
    assert_eq!(array.len(), 2);
    match array {
        Array::Struct(array) => assert_eq!(array.values()[0].len(), 3),
        _ => unreachable!(),
    }
}
