use std::sync::Arc;

use arrow_pretty::array::*;
use arrow_pretty::datatypes::{DataType, Field, UnionMode};

fn data_type(mode: UnionMode) -> DataType {
    DataType::Union(
        vec![
            Field::new("a", DataType::Int32, true),
            Field::new("b", DataType::Boolean, true),
        ],
        mode,
    )
}

#[test]
fn dense_slice() {
    let fields = vec![
        Arc::new(PrimitiveArray::<i32>::from_slice(&[1, 2]).into()),
        Arc::new(BooleanArray::from_slice(&[true]).into()),
    ];
    let array = UnionArray::try_new(
        data_type(UnionMode::Dense),
        vec![0, 1, 0].into(),
        fields,
        Some(vec![0, 0, 1].into()),
        None,
    )
    .unwrap();

    let sliced = array.slice(1, 2);
    assert_eq!(sliced.offset(), 1);
    assert_eq!(sliced.types().as_slice(), &[1, 0]);
    assert_eq!(sliced.offsets().map(|x| x.as_slice()), Some(&[0, 1][..]));
    assert_eq!(sliced.fields().len(), 2);
    assert_eq!(
        sliced.value(1),
        Array::from(PrimitiveArray::<i32>::from_slice(&[2]))
    );
}

#[test]
fn sparse_with_offsets_is_invalid() {
    let fields = vec![
        Arc::new(PrimitiveArray::<i32>::from_slice(&[1]).into()),
        Arc::new(BooleanArray::from_slice(&[true]).into()),
    ];
    let result = UnionArray::try_new(
        data_type(UnionMode::Sparse),
        vec![0].into(),
        fields,
        Some(vec![0].into()),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn wrong_child_type() {
    let fields = vec![
        Arc::new(PrimitiveArray::<i64>::from_slice(&[1]).into()),
        Arc::new(BooleanArray::from_slice(&[true]).into()),
    ];
    let result = UnionArray::try_new(
        data_type(UnionMode::Sparse),
        vec![0].into(),
        fields,
        None,
        None,
    );
    assert!(result.is_err());
}
