//! APIs to render [`Array`]s and [`Columns`] as indented, human-readable text.
//!
//! Flat arrays render as a bracketed list, e.g. `[1, null, 3]`. Nested arrays render a
//! validity line followed by one labeled block per child structure, each on its own line
//! and indented by two more spaces than its parent:
//! ```
//! use std::sync::Arc;
//! use arrow_pretty::array::{Array, ListArray, PrimitiveArray};
//! use arrow_pretty::datatypes::DataType;
//! use arrow_pretty::io::print::format_array;
//!
//! let values = PrimitiveArray::<i32>::from_slice(&[1, 2, 3]);
//! let list = ListArray::try_new(
//!     ListArray::default_datatype(DataType::Int32),
//!     vec![0, 2, 2, 3].into(),
//!     Arc::new(values.into()),
//!     None,
//! )
//! .unwrap();
//!
//! let expected = "\n-- is_valid: all not null\n-- value_offsets: [0, 2, 2, 3]\n-- values: [1, 2, 3]";
//! assert_eq!(format_array(&Array::from(list)).unwrap(), expected);
//! ```
use std::io::Write;
use std::sync::Arc;

use lexical_core::FormattedSize;
use log::{debug, trace};
use num::traits::AsPrimitive;

use crate::{
    array::*,
    bitmap::Bitmap,
    buffer::Buffer,
    datatypes::{DataType, Field},
    error::{ArrowError, Result},
    types::{f16, NativeType},
};

pub use crate::columns::Columns;

/// Writes `array` to `sink`. Lines other than the first are indented by `indent` spaces.
/// # Errors
/// Errors with [`ArrowError::NotYetImplemented`] when `array` is or contains a timestamp,
/// interval or decimal array, and with [`ArrowError::Io`] when `sink` fails.
/// Text written before the error is left in `sink`.
pub fn write_array<W: Write>(sink: &mut W, array: &Array, indent: usize) -> Result<()> {
    ArrayPrinter::new(sink, indent).print(array)
}

/// Writes every column of `columns` to `sink`, in order, as `<name>: <array>\n`.
/// Each column is rendered at `indent + 2`.
/// # Errors
/// The first column that fails to render aborts the whole operation, see [`write_array`].
pub fn write_columns<W: Write, C: Columns + ?Sized>(
    sink: &mut W,
    columns: &C,
    indent: usize,
) -> Result<()> {
    for i in 0..columns.num_columns() {
        let name = columns.column_name(i);
        debug!("rendering column {} \"{}\"", i, name);
        sink.write_all(name.as_bytes())?;
        sink.write_all(b": ")?;
        write_array(sink, columns.column(i), indent + 2)?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Returns the rendering of `array` at indentation `0`, see [`write_array`].
pub fn format_array(array: &Array) -> Result<String> {
    let mut buffer = vec![];
    write_array(&mut buffer, array, 0)?;
    into_string(buffer)
}

/// Returns the rendering of `columns` at indentation `0`, see [`write_columns`].
pub fn format_columns<C: Columns + ?Sized>(columns: &C) -> Result<String> {
    let mut buffer = vec![];
    write_columns(&mut buffer, columns, 0)?;
    into_string(buffer)
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| ArrowError::oos(e.to_string()))
}

impl std::fmt::Display for Array {
    /// Renders this array at indentation `0`.
    /// Arrays that cannot be rendered (e.g. timestamps) result in [`std::fmt::Error`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = format_array(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

/// Returns the name of logical types whose values cannot be rendered.
fn unsupported(data_type: &DataType) -> Option<&'static str> {
    match data_type {
        DataType::Timestamp(_, _) => Some("timestamp"),
        DataType::Interval(_) => Some("interval"),
        DataType::Decimal(_, _) => Some("decimal"),
        _ => None,
    }
}

fn not_yet_implemented(data_type: &DataType) -> ArrowError {
    let name = unsupported(data_type)
        .map(|x| x.to_string())
        .unwrap_or_else(|| data_type.to_string());
    debug!("rendering {} is not yet implemented", data_type);
    ArrowError::NotYetImplemented(name)
}

#[inline]
fn write_integer<W: Write>(sink: &mut W, value: i64) -> std::io::Result<()> {
    let mut buffer = [0u8; i64::FORMATTED_SIZE_DECIMAL];
    sink.write_all(lexical_core::write(value, &mut buffer))
}

#[inline]
fn write_hex<W: Write>(sink: &mut W, value: &[u8]) -> std::io::Result<()> {
    sink.write_all(hex::encode(value).as_bytes())
}

/// Renders one [`Array`] at a fixed indentation.
/// Children are rendered by new printers at `indent + 2` sharing the same sink.
pub struct ArrayPrinter<'a, W: Write> {
    indent: usize,
    sink: &'a mut W,
}

impl<'a, W: Write> ArrayPrinter<'a, W> {
    /// Creates a new [`ArrayPrinter`].
    pub fn new(sink: &'a mut W, indent: usize) -> Self {
        Self { indent, sink }
    }

    /// Writes `array` to the sink.
    pub fn print(&mut self, array: &Array) -> Result<()> {
        trace!(
            "rendering {} array of length {} at indent {}",
            array.data_type(),
            array.len(),
            self.indent
        );
        match array {
            Array::Null(_) => Ok(()),
            Array::Boolean(array) => self.write_values(array.len(), array.validity(), |sink, i| {
                let text: &[u8] = if array.value(i) { b"true" } else { b"false" };
                sink.write_all(text)
            }),
            Array::Int8(array) => self.write_integers(array),
            Array::Int16(array) => self.write_integers(array),
            Array::Int32(array) => self.write_integers(array),
            Array::Int64(array) => self.write_integers(array),
            Array::UInt8(array) => self.write_integers(array),
            Array::UInt16(array) => self.write_integers(array),
            Array::UInt32(array) => self.write_integers(array),
            Array::UInt64(array) => self.write_integers(array),
            Array::Int128(array) => Err(not_yet_implemented(array.data_type())),
            Array::DaysMs(array) => Err(not_yet_implemented(array.data_type())),
            Array::Float16(array) => self.write_floats(array, |x: f16| x.to_f32()),
            Array::Float32(array) => self.write_floats(array, |x| x),
            Array::Float64(array) => self.write_floats(array, |x| x),
            Array::Binary(array) => self.write_values(array.len(), array.validity(), |sink, i| {
                write_hex(sink, array.value(i))
            }),
            Array::FixedSizeBinary(array) => {
                self.write_values(array.len(), array.validity(), |sink, i| {
                    write_hex(sink, array.value(i))
                })
            }
            Array::Utf8(array) => self.write_values(array.len(), array.validity(), |sink, i| {
                sink.write_all(b"\"")?;
                sink.write_all(array.value(i).as_bytes())?;
                sink.write_all(b"\"")
            }),
            Array::List(array) => self.write_list(array),
            Array::Struct(array) => self.write_struct(array),
            Array::Union(array) => self.write_union(array),
            Array::Dictionary(array) => self.write_dictionary(array),
        }
    }

    /// Writes `[`, the `length` values separated by `, ` with nulls as `null`, and `]`.
    fn write_values<F>(
        &mut self,
        length: usize,
        validity: Option<&Bitmap>,
        mut write: F,
    ) -> Result<()>
    where
        F: FnMut(&mut W, usize) -> std::io::Result<()>,
    {
        self.sink.write_all(b"[")?;
        for i in 0..length {
            if i > 0 {
                self.sink.write_all(b", ")?;
            }
            if validity.map(|x| !x.get_bit(i)).unwrap_or(false) {
                self.sink.write_all(b"null")?;
            } else {
                write(&mut *self.sink, i)?;
            }
        }
        self.sink.write_all(b"]")?;
        Ok(())
    }

    fn write_integers<T>(&mut self, array: &PrimitiveArray<T>) -> Result<()>
    where
        T: NativeType + AsPrimitive<i64>,
    {
        if unsupported(array.data_type()).is_some() {
            return Err(not_yet_implemented(array.data_type()));
        }
        self.write_values(array.len(), array.validity(), |sink, i| {
            write_integer(sink, array.value(i).as_())
        })
    }

    fn write_floats<T, F, D>(&mut self, array: &PrimitiveArray<T>, widen: F) -> Result<()>
    where
        T: NativeType,
        F: Fn(T) -> D,
        D: std::fmt::Display,
    {
        self.write_values(array.len(), array.validity(), |sink, i| {
            write!(sink, "{}", widen(array.value(i)))
        })
    }

    fn newline(&mut self) -> Result<()> {
        self.sink.write_all(b"\n")?;
        for _ in 0..self.indent {
            self.sink.write_all(b" ")?;
        }
        Ok(())
    }

    /// Writes a new line with `label` followed by `array` rendered at `indent + 2`.
    fn write_child(&mut self, label: &str, array: &Array) -> Result<()> {
        self.newline()?;
        self.sink.write_all(label.as_bytes())?;
        ArrayPrinter::new(&mut *self.sink, self.indent + 2).print(array)
    }

    fn write_validity(&mut self, validity: Option<&Bitmap>) -> Result<()> {
        self.newline()?;
        self.sink.write_all(b"-- is_valid: ")?;
        match validity {
            Some(validity) if validity.null_count() > 0 => {
                // a view over the same bits: offset and length are carried by the bitmap
                let is_valid = Array::from(BooleanArray::from_bitmap(validity.clone()));
                ArrayPrinter::new(&mut *self.sink, self.indent + 2).print(&is_valid)
            }
            _ => {
                self.sink.write_all(b"all not null")?;
                Ok(())
            }
        }
    }

    fn write_fields<F>(&mut self, fields: &[Field], children: &[Arc<Array>], window: F) -> Result<()>
    where
        F: Fn(&Array) -> Array,
    {
        for (i, (field, child)) in fields.iter().zip(children.iter()).enumerate() {
            let label = format!("-- child {} type: {} values: ", i, field.data_type());
            self.write_child(&label, &window(child))?;
        }
        Ok(())
    }

    fn write_list(&mut self, array: &ListArray) -> Result<()> {
        self.write_validity(array.validity())?;

        let offsets = int32(array.offsets().clone())?;
        self.write_child("-- value_offsets: ", &offsets)?;

        let values = array.values();
        if array.offset() != 0 {
            let offsets = array.offsets();
            let start = offsets[0] as usize;
            let end = offsets[array.len()] as usize;
            self.write_child("-- values: ", &values.slice(start, end - start))
        } else {
            self.write_child("-- values: ", values)
        }
    }

    fn write_struct(&mut self, array: &StructArray) -> Result<()> {
        self.write_validity(array.validity())?;
        let (offset, length) = (array.offset(), array.len());
        self.write_fields(array.fields(), array.values(), |child| {
            child.slice(offset, length)
        })
    }

    fn write_union(&mut self, array: &UnionArray) -> Result<()> {
        self.write_validity(array.validity())?;

        let types = PrimitiveArray::<i8>::try_new(DataType::Int8, array.types().clone(), None)?;
        self.write_child("-- type_ids: ", &types.into())?;

        if let Some(offsets) = array.offsets() {
            self.write_child("-- value_offsets: ", &int32(offsets.clone())?)?;
        }

        // type ids and dense offsets address the children from their start
        let end = array.offset() + array.len();
        let fields = UnionArray::try_get_all(array.data_type())?.0;
        self.write_fields(fields, array.fields(), |child| {
            child.slice(0, end.min(child.len()))
        })
    }

    fn write_dictionary(&mut self, array: &DictionaryArray) -> Result<()> {
        self.write_validity(array.validity())?;
        self.write_child("-- dictionary: ", array.values())?;
        self.write_child("-- indices: ", array.keys())
    }
}

fn int32(values: Buffer<i32>) -> Result<Array> {
    PrimitiveArray::<i32>::try_new(DataType::Int32, values, None).map(Array::from)
}
