// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! A two-dimensional batch of column-oriented data with a defined
//! [schema](crate::datatypes::Schema).

use std::sync::Arc;

use crate::array::*;
use crate::columns::Columns;
use crate::datatypes::*;
use crate::error::{ArrowError, Result};

type ArrayRef = Arc<Array>;

/// A two-dimensional batch of column-oriented data with a defined
/// [schema](crate::datatypes::Schema).
///
/// A `RecordBatch` is a two-dimensional dataset of a number of
/// contiguous arrays, each the same length.
/// A record batch has a schema which must match its arrays’
/// datatypes.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordBatch {
    schema: Schema,
    columns: Vec<ArrayRef>,
}

impl RecordBatch {
    /// Creates a `RecordBatch` from a schema and columns.
    ///
    /// Expects the following:
    ///  * the vec of columns to not be empty
    ///  * the schema and column data types to have equal lengths
    ///    and match
    ///  * each array in columns to have the same length
    ///
    /// If the conditions are not met, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use arrow_pretty::array::{Array, PrimitiveArray};
    /// use arrow_pretty::datatypes::{Schema, Field, DataType};
    /// use arrow_pretty::record_batch::RecordBatch;
    ///
    /// # fn main() -> arrow_pretty::error::Result<()> {
    /// let id_array = PrimitiveArray::<i32>::from_slice(&[1, 2, 3, 4, 5]);
    /// let schema = Schema::new(vec![
    ///     Field::new("id", DataType::Int32, false)
    /// ]);
    ///
    /// let batch = RecordBatch::try_new(
    ///     schema,
    ///     vec![Arc::new(Array::from(id_array))]
    /// )?;
    /// assert_eq!(batch.num_rows(), 5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_new(schema: Schema, columns: Vec<ArrayRef>) -> Result<Self> {
        Self::validate_new_batch(&schema, columns.as_slice())?;
        Ok(RecordBatch { schema, columns })
    }

    fn validate_new_batch(schema: &Schema, columns: &[ArrayRef]) -> Result<()> {
        // check that there are some columns
        if columns.is_empty() {
            return Err(ArrowError::InvalidArgumentError(
                "at least one column must be defined to create a record batch".to_string(),
            ));
        }
        // check that number of fields in schema match column length
        if schema.fields().len() != columns.len() {
            return Err(ArrowError::InvalidArgumentError(format!(
                "number of columns({}) must match number of fields({}) in schema",
                columns.len(),
                schema.fields().len(),
            )));
        }
        // check that all columns have the same row count, and match the schema
        let len = columns[0].len();
        for (i, column) in columns.iter().enumerate() {
            if column.len() != len {
                return Err(ArrowError::InvalidArgumentError(
                    "all columns in a record batch must have the same length".to_string(),
                ));
            }
            if column.data_type() != schema.field(i).data_type() {
                return Err(ArrowError::InvalidArgumentError(format!(
                    "column types must match schema types, expected {:?} but found {:?} at column index {}",
                    schema.field(i).data_type(),
                    column.data_type(),
                    i)));
            }
        }
        Ok(())
    }

    /// Returns the [`Schema`](crate::datatypes::Schema) of the record batch.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the number of columns in the record batch.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows in each column.
    pub fn num_rows(&self) -> usize {
        self.columns[0].len()
    }

    /// Get a reference to a column's array by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside of `0..num_columns`.
    pub fn column(&self, index: usize) -> &ArrayRef {
        &self.columns[index]
    }

    /// Get a reference to all columns in the record batch.
    pub fn columns(&self) -> &[ArrayRef] {
        &self.columns[..]
    }

    /// Returns the schema and the columns of this batch.
    pub fn into_inner(self) -> (Schema, Vec<ArrayRef>) {
        (self.schema, self.columns)
    }
}

impl From<&StructArray> for RecordBatch {
    /// Create a record batch from struct array, one column per field.
    ///
    /// This does not flatten nested struct types.
    fn from(struct_array: &StructArray) -> Self {
        let schema = Schema::new(struct_array.fields().to_vec());
        let (offset, length) = (struct_array.offset(), struct_array.len());
        let columns = struct_array
            .values()
            .iter()
            .map(|x| Arc::new(x.slice(offset, length)))
            .collect();
        RecordBatch { schema, columns }
    }
}

impl Columns for RecordBatch {
    fn num_columns(&self) -> usize {
        self.num_columns()
    }

    fn column_name(&self, i: usize) -> &str {
        self.schema.field(i).name()
    }

    fn column(&self, i: usize) -> &Array {
        self.columns[i].as_ref()
    }
}
