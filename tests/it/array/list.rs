use std::sync::Arc;

use arrow_pretty::array::*;
use arrow_pretty::datatypes::DataType;

fn array() -> ListArray {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3, 4, 5, 6]);
    ListArray::try_new(
        ListArray::default_datatype(DataType::Int32),
        vec![0, 2, 3, 6, 6].into(),
        Arc::new(values.into()),
        None,
    )
    .unwrap()
}

#[test]
fn slice_windows_offsets() {
    let array = array().slice(1, 2);
    assert_eq!(array.len(), 2);
    assert_eq!(array.offset(), 1);
    assert_eq!(array.offsets().as_slice(), &[2, 3, 6]);
    assert_eq!(
        array.value(1),
        Array::from(PrimitiveArray::<i32>::from_slice(&[4, 5, 6]))
    );
}

#[test]
fn empty_slot() {
    let array = array();
    assert!(array.value(3).is_empty());
}

#[test]
fn decreasing_offsets() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2]);
    let result = ListArray::try_new(
        ListArray::default_datatype(DataType::Int32),
        vec![0, 2, 1].into(),
        Arc::new(values.into()),
        None,
    );
    assert!(result.is_err());
}
