use std::sync::Arc;

use arrow_pretty::array::*;
use arrow_pretty::columns::Columns;
use arrow_pretty::datatypes::{DataType, Field, Schema};
use arrow_pretty::record_batch::RecordBatch;

#[test]
fn columns_by_name() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int32, false),
        Field::new("name", DataType::Utf8, true),
    ]);
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(PrimitiveArray::<i32>::from_slice(&[1, 2]).into()),
            Arc::new(Utf8Array::from(vec![Some("a"), None]).into()),
        ],
    )
    .unwrap();

    let columns: &dyn Columns = &batch;
    assert_eq!(columns.num_columns(), 2);
    assert_eq!(columns.column_name(1), "name");
    assert_eq!(columns.column(1).null_count(), 1);
}

#[test]
fn field_count_mismatch() {
    let schema = Schema::new(vec![Field::new("id", DataType::Int32, false)]);
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(PrimitiveArray::<i32>::from_slice(&[1]).into()),
            Arc::new(PrimitiveArray::<i32>::from_slice(&[2]).into()),
        ],
    );
    assert!(batch.is_err());
}
