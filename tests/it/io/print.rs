use std::io::Write;
use std::iter::FromIterator;
use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use arrow_pretty::{
    array::*,
    bitmap::Bitmap,
    datatypes::*,
    error::{ArrowError, Result},
    io::print::*,
    record_batch::RecordBatch,
    types::{days_ms, f16},
};

fn list(offsets: Vec<i32>, values: Array, validity: Option<Bitmap>) -> ListArray {
    let data_type = ListArray::default_datatype(values.data_type().clone());
    ListArray::try_new(data_type, offsets.into(), Arc::new(values), validity).unwrap()
}

fn struct_(a: Array, b: Array, validity: Option<Bitmap>) -> StructArray {
    let fields = vec![
        Field::new("a", a.data_type().clone(), true),
        Field::new("b", b.data_type().clone(), true),
    ];
    StructArray::try_new(DataType::Struct(fields), vec![Arc::new(a), Arc::new(b)], validity)
        .unwrap()
}

fn union(
    mode: UnionMode,
    types: Vec<i8>,
    offsets: Option<Vec<i32>>,
    a: Array,
    b: Array,
) -> UnionArray {
    let fields = vec![
        Field::new("a", a.data_type().clone(), true),
        Field::new("b", b.data_type().clone(), true),
    ];
    UnionArray::try_new(
        DataType::Union(fields, mode),
        types.into(),
        vec![Arc::new(a), Arc::new(b)],
        offsets.map(|x| x.into()),
        None,
    )
    .unwrap()
}

fn render<A: Into<Array>>(array: A) -> String {
    format_array(&array.into()).unwrap()
}

#[test]
fn integers_with_null() {
    let array = PrimitiveArray::<i32>::from(vec![Some(1), None, Some(3)]);
    assert_eq!(render(array), "[1, null, 3]");
}

#[test]
fn strings() {
    let array = Utf8Array::from(vec![Some("a"), None, Some("bc")]);
    assert_eq!(render(array), "[\"a\", null, \"bc\"]");
}

#[test]
fn strings_are_not_escaped() {
    let array = Utf8Array::from_slice(&["say \"hi\""]);
    assert_eq!(render(array), "[\"say \"hi\"\"]");
}

#[test]
fn binary() {
    let array = BinaryArray::from_slice(&[&[0xABu8, 0xCD][..]]);
    assert_eq!(render(array), "[abcd]");

    let array = BinaryArray::from(vec![Some(&b"\x00\x01"[..]), None, Some(&b""[..])]);
    assert_eq!(render(array), "[0001, null, ]");
}

#[test]
fn fixed_size_binary() -> Result<()> {
    let array =
        FixedSizeBinaryArray::try_from_iter(vec![Some([1u8, 2]), None, Some([0xff, 0x00])], 2)?;
    assert_eq!(render(array), "[0102, null, ff00]");
    Ok(())
}

#[test]
fn booleans() {
    let array = BooleanArray::from(vec![Some(true), None, Some(false)]);
    assert_eq!(render(array), "[true, null, false]");
}

#[test]
fn integers_of_all_widths() {
    assert_eq!(render(PrimitiveArray::<i8>::from_slice(&[-128, 127])), "[-128, 127]");
    assert_eq!(render(PrimitiveArray::<i16>::from_slice(&[-1, 300])), "[-1, 300]");
    assert_eq!(
        render(PrimitiveArray::<i64>::from_slice(&[i64::MIN, i64::MAX])),
        "[-9223372036854775808, 9223372036854775807]"
    );
    assert_eq!(render(PrimitiveArray::<u8>::from_slice(&[0, 255])), "[0, 255]");
    assert_eq!(render(PrimitiveArray::<u16>::from_slice(&[65535])), "[65535]");
    assert_eq!(render(PrimitiveArray::<u32>::from_slice(&[u32::MAX])), "[4294967295]");
}

#[test]
fn u64_is_widened_to_i64() {
    let array = PrimitiveArray::<u64>::from_slice(&[1, u64::MAX]);
    assert_eq!(render(array), "[1, -1]");
}

#[test]
fn floats() {
    let array = PrimitiveArray::<f64>::from(vec![Some(1.5), None, Some(2.0)]);
    assert_eq!(render(array), "[1.5, null, 2]");

    let array = PrimitiveArray::<f32>::from_slice(&[0.25, -3.0]);
    assert_eq!(render(array), "[0.25, -3]");

    let array = PrimitiveArray::<f16>::from(vec![Some(f16::from_f32(1.5)), None]);
    assert_eq!(render(array), "[1.5, null]");
}

#[test]
fn temporal_as_integers() {
    let array = PrimitiveArray::<i32>::from(vec![Some(1), None]).to(DataType::Date32);
    assert_eq!(render(array), "[1, null]");

    let array = PrimitiveArray::<i64>::from_slice(&[86400000]).to(DataType::Date64);
    assert_eq!(render(array), "[86400000]");

    let array = PrimitiveArray::<i32>::from_slice(&[10]).to(DataType::Time32(TimeUnit::Second));
    assert_eq!(render(array), "[10]");

    let array =
        PrimitiveArray::<i64>::from_slice(&[10]).to(DataType::Time64(TimeUnit::Nanosecond));
    assert_eq!(render(array), "[10]");
}

#[test]
fn empty() {
    assert_eq!(render(PrimitiveArray::<i32>::new_empty()), "[]");
    assert_eq!(render(Utf8Array::new_empty()), "[]");
    assert_eq!(render(BinaryArray::new_empty()), "[]");
    assert_eq!(render(BooleanArray::new_empty()), "[]");
}

#[test]
fn null_array_renders_nothing() {
    assert_eq!(render(NullArray::new_null(3)), "");
}

#[test]
fn sliced_flat() {
    let array = PrimitiveArray::<i32>::from(vec![Some(1), None, Some(3), Some(4)]).slice(1, 2);
    assert_eq!(render(array), "[null, 3]");

    let array = Utf8Array::from_slice(&["a", "b", "c"]).slice(2, 1);
    assert_eq!(render(array), "[\"c\"]");
}

#[test]
fn list_without_nulls() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let array = list(vec![0, 2, 2, 3], values, None);

    let expected = "\n-- is_valid: all not null\
                    \n-- value_offsets: [0, 2, 2, 3]\
                    \n-- values: [1, 2, 3]";
    assert_eq!(render(array), expected);
}

#[test]
fn list_with_null() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let validity = Bitmap::from_iter(vec![true, false, true]);
    let array = list(vec![0, 2, 2, 3], values, Some(validity));

    let expected = "\n-- is_valid: [true, false, true]\
                    \n-- value_offsets: [0, 2, 2, 3]\
                    \n-- values: [1, 2, 3]";
    assert_eq!(render(array), expected);
}

#[test]
fn sliced_list() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3, 4, 5, 6]).into();
    let validity = Bitmap::from_iter(vec![true, false, true, true]);
    let array = list(vec![0, 2, 3, 6, 6], values, Some(validity)).slice(1, 2);

    let expected = "\n-- is_valid: [false, true]\
                    \n-- value_offsets: [2, 3, 6]\
                    \n-- values: [3, 4, 5, 6]";
    assert_eq!(render(array), expected);
}

#[test]
fn sliced_list_without_nulls_in_window() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let validity = Bitmap::from_iter(vec![false, true, true]);
    let array = list(vec![0, 1, 2, 3], values, Some(validity)).slice(1, 2);

    let expected = "\n-- is_valid: all not null\
                    \n-- value_offsets: [1, 2, 3]\
                    \n-- values: [2, 3]";
    assert_eq!(render(array), expected);
}

#[test]
fn struct_children() {
    let a = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let b = Utf8Array::from(vec![Some("x"), None, Some("z")]).into();
    let array = struct_(a, b, None);

    let expected = "\n-- is_valid: all not null\
                    \n-- child 0 type: int32 values: [1, 2, 3]\
                    \n-- child 1 type: string values: [\"x\", null, \"z\"]";
    assert_eq!(render(array), expected);
}

#[test]
fn sliced_struct() {
    let a = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let b = Utf8Array::from(vec![Some("x"), None, Some("z")]).into();
    let validity = Bitmap::from_iter(vec![true, false, true]);
    let array = struct_(a, b, Some(validity)).slice(1, 2);

    let expected = "\n-- is_valid: [false, true]\
                    \n-- child 0 type: int32 values: [2, 3]\
                    \n-- child 1 type: string values: [null, \"z\"]";
    assert_eq!(render(array), expected);
}

#[test]
fn sliced_struct_equals_fresh_struct() {
    let a = PrimitiveArray::<i32>::from_slice(&[1, 2, 3, 4]).into();
    let b = BooleanArray::from(vec![Some(true), None, Some(false), None]).into();
    let sliced = struct_(a, b, None).slice(1, 2);

    let a = PrimitiveArray::<i32>::from_slice(&[2, 3]).into();
    let b = BooleanArray::from(vec![None, Some(false)]).into();
    let fresh = struct_(a, b, None);

    assert_eq!(render(sliced), render(fresh));
}

#[test]
fn sparse_union() {
    let a = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let b = Utf8Array::from_slice(&["x", "y", "z"]).into();
    let array = union(UnionMode::Sparse, vec![0, 1, 0], None, a, b);

    let expected = "\n-- is_valid: all not null\
                    \n-- type_ids: [0, 1, 0]\
                    \n-- child 0 type: int32 values: [1, 2, 3]\
                    \n-- child 1 type: string values: [\"x\", \"y\", \"z\"]";
    assert_eq!(render(array.clone()), expected);

    // children cover `[0, offset + length)`
    let expected = "\n-- is_valid: all not null\
                    \n-- type_ids: [0, 1]\
                    \n-- child 0 type: int32 values: [1, 2]\
                    \n-- child 1 type: string values: [\"x\", \"y\"]";
    assert_eq!(render(array.slice(0, 2)), expected);

    let expected = "\n-- is_valid: all not null\
                    \n-- type_ids: [1, 0]\
                    \n-- child 0 type: int32 values: [1, 2, 3]\
                    \n-- child 1 type: string values: [\"x\", \"y\", \"z\"]";
    assert_eq!(render(array.slice(1, 2)), expected);
}

#[test]
fn dense_union() {
    let a = PrimitiveArray::<i32>::from_slice(&[5]).into();
    let b = Utf8Array::from_slice(&["p", "q"]).into();
    let array = union(UnionMode::Dense, vec![1, 1, 0], Some(vec![0, 1, 0]), a, b);

    let expected = "\n-- is_valid: all not null\
                    \n-- type_ids: [1, 1, 0]\
                    \n-- value_offsets: [0, 1, 0]\
                    \n-- child 0 type: int32 values: [5]\
                    \n-- child 1 type: string values: [\"p\", \"q\"]";
    assert_eq!(render(array.clone()), expected);

    let expected = "\n-- is_valid: all not null\
                    \n-- type_ids: [1, 0]\
                    \n-- value_offsets: [1, 0]\
                    \n-- child 0 type: int32 values: [5]\
                    \n-- child 1 type: string values: [\"p\", \"q\"]";
    assert_eq!(render(array.slice(1, 2)), expected);
}

#[test]
fn dictionary() -> Result<()> {
    let values = Arc::new(Utf8Array::from_slice(&["a", "b"]).into());
    let keys = PrimitiveArray::<i32>::from(vec![Some(1), None, Some(0)]);
    let array = DictionaryArray::try_from_keys(keys, values)?;

    let expected = "\n-- is_valid: [true, false, true]\
                    \n-- dictionary: [\"a\", \"b\"]\
                    \n-- indices: [1, null, 0]";
    assert_eq!(render(array.clone()), expected);

    let expected = "\n-- is_valid: [false, true]\
                    \n-- dictionary: [\"a\", \"b\"]\
                    \n-- indices: [null, 0]";
    assert_eq!(render(array.slice(1, 2)), expected);
    Ok(())
}

#[test]
fn nested_indentation() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let inner = list(vec![0, 1, 3], values, None);
    let fields = vec![Field::new("l", inner.data_type().clone(), true)];
    let array = StructArray::try_new(DataType::Struct(fields), vec![Arc::new(inner.into())], None)
        .unwrap();

    let expected = "\n-- is_valid: all not null\
                    \n-- child 0 type: list<item: int32> values: \
                    \n  -- is_valid: all not null\
                    \n  -- value_offsets: [0, 1, 3]\
                    \n  -- values: [1, 2, 3]";
    assert_eq!(render(array), expected);
}

#[test]
fn nested_validity_is_indented() {
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2]).into();
    let inner = list(vec![0, 1, 2], values, Some(Bitmap::from_iter(vec![true, false])));
    let array = list(vec![0, 2], inner.into(), None);

    let mut buffer = vec![];
    write_array(&mut buffer, &array.into(), 2).unwrap();
    let expected = "\n  -- is_valid: all not null\
                    \n  -- value_offsets: [0, 2]\
                    \n  -- values: \
                    \n    -- is_valid: [true, false]\
                    \n    -- value_offsets: [0, 1, 2]\
                    \n    -- values: [1, 2]";
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn idempotent() {
    let a = PrimitiveArray::<i32>::from(vec![Some(1), None, Some(3)]).into();
    let b = Utf8Array::from(vec![Some("x"), None, Some("z")]).into();
    let array = Array::from(struct_(a, b, Some(Bitmap::from_iter(vec![true, true, false]))));

    assert_eq!(format_array(&array).unwrap(), format_array(&array).unwrap());
    assert_eq!(array.to_string(), format_array(&array).unwrap());
}

#[test]
fn not_yet_implemented() {
    let cases: Vec<(Array, &str)> = vec![
        (
            PrimitiveArray::<i64>::from_slice(&[1])
                .to(DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".to_string())))
                .into(),
            "timestamp",
        ),
        (
            PrimitiveArray::<i32>::from_slice(&[1])
                .to(DataType::Interval(IntervalUnit::YearMonth))
                .into(),
            "interval",
        ),
        (
            PrimitiveArray::<days_ms>::from_slice(&[days_ms::new(1, 2)]).into(),
            "interval",
        ),
        (
            PrimitiveArray::<i128>::from_slice(&[1])
                .to(DataType::Decimal(5, 2))
                .into(),
            "decimal",
        ),
    ];
    for (array, name) in cases {
        let mut buffer = vec![];
        match write_array(&mut buffer, &array, 0) {
            Err(ArrowError::NotYetImplemented(x)) => assert_eq!(x, name),
            other => panic!("expected NotYetImplemented, got {:?}", other),
        }
        assert!(buffer.is_empty());
    }
}

#[test]
fn not_yet_implemented_in_child_keeps_prefix() {
    let a = PrimitiveArray::<i32>::from_slice(&[1]).into();
    let b = PrimitiveArray::<i64>::from_slice(&[1])
        .to(DataType::Timestamp(TimeUnit::Second, None))
        .into();
    let array: Array = struct_(a, b, None).into();

    let mut buffer = vec![];
    assert!(write_array(&mut buffer, &array, 0).is_err());
    let expected = "\n-- is_valid: all not null\
                    \n-- child 0 type: int32 values: [1]\
                    \n-- child 1 type: timestamp[s] values: ";
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn display_errors_on_not_yet_implemented() {
    use std::fmt::Write;

    let array = Array::from(
        PrimitiveArray::<i128>::from_slice(&[1]).to(DataType::Decimal(10, 0)),
    );
    let mut string = String::new();
    assert!(write!(string, "{}", array).is_err());
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn io_errors_propagate() {
    let array: Array = PrimitiveArray::<i32>::from_slice(&[1]).into();
    let result = write_array(&mut FailingWriter, &array, 0);
    assert!(matches!(result, Err(ArrowError::Io(_))));
}

#[test]
fn flat_format_is_a_bracketed_list() {
    let mut rng = StdRng::seed_from_u64(42);
    for length in 0..20 {
        let values = (0..length)
            .map(|_| {
                if rng.gen_bool(0.3) {
                    None
                } else {
                    Some(rng.gen_range(0, 1000))
                }
            })
            .collect::<Vec<Option<i32>>>();
        let nulls = values.iter().filter(|x| x.is_none()).count();

        let text = render(PrimitiveArray::<i32>::from(values));
        assert!(text.starts_with('['));
        assert!(text.ends_with(']'));
        assert_eq!(text.matches(", ").count(), length.max(1) - 1);
        assert_eq!(text.matches("null").count(), nulls);
    }
}

#[test]
fn columns() -> Result<()> {
    let schema = Schema::new(vec![
        Field::new("a", DataType::Int32, true),
        Field::new("b", ListArray::default_datatype(DataType::Int32), true),
        Field::new("c", DataType::Null, true),
    ]);
    let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]).into();
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(PrimitiveArray::<i32>::from_slice(&[1, 2]).into()),
            Arc::new(list(vec![0, 1, 3], values, None).into()),
            Arc::new(NullArray::new_null(2).into()),
        ],
    )?;

    let expected = "a: [1, 2]\
                    \nb: \
                    \n  -- is_valid: all not null\
                    \n  -- value_offsets: [0, 1, 3]\
                    \n  -- values: [1, 2, 3]\
                    \nc: \n";
    assert_eq!(format_columns(&batch)?, expected);
    Ok(())
}

#[test]
fn columns_abort_on_first_error() {
    let columns: Vec<(&str, Arc<Array>)> = vec![
        ("a", Arc::new(PrimitiveArray::<i32>::from_slice(&[1]).into())),
        (
            "t",
            Arc::new(
                PrimitiveArray::<i64>::from_slice(&[1])
                    .to(DataType::Timestamp(TimeUnit::Second, None))
                    .into(),
            ),
        ),
        ("c", Arc::new(PrimitiveArray::<i32>::from_slice(&[3]).into())),
    ];

    let mut buffer = vec![];
    let result = write_columns(&mut buffer, &columns, 0);
    assert!(matches!(result, Err(ArrowError::NotYetImplemented(_))));
    assert_eq!(String::from_utf8(buffer).unwrap(), "a: [1]\nt: ");
}
