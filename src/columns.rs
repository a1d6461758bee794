//! Contains [`Columns`], the read-only view of a named, ordered collection of [`Array`]s
//! consumed by [`write_columns`](crate::io::print::write_columns).
use std::sync::Arc;

use crate::array::Array;

/// An ordered collection of named columns.
pub trait Columns {
    /// The number of columns
    fn num_columns(&self) -> usize;

    /// The name of column `i`.
    /// # Panics
    /// Implementations may panic iff `i >= self.num_columns()`.
    fn column_name(&self, i: usize) -> &str;

    /// The array of column `i`.
    /// # Panics
    /// Implementations may panic iff `i >= self.num_columns()`.
    fn column(&self, i: usize) -> &Array;
}

impl<N: AsRef<str>> Columns for [(N, Arc<Array>)] {
    fn num_columns(&self) -> usize {
        self.len()
    }

    fn column_name(&self, i: usize) -> &str {
        self[i].0.as_ref()
    }

    fn column(&self, i: usize) -> &Array {
        self[i].1.as_ref()
    }
}

impl<N: AsRef<str>> Columns for Vec<(N, Arc<Array>)> {
    fn num_columns(&self) -> usize {
        self.as_slice().num_columns()
    }

    fn column_name(&self, i: usize) -> &str {
        self.as_slice().column_name(i)
    }

    fn column(&self, i: usize) -> &Array {
        self.as_slice().column(i)
    }
}
