use super::Field;

/// An ordered sequence of [`Field`]s.
///
/// [`Schema`] describes the columns of a [`RecordBatch`](crate::record_batch::RecordBatch).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    /// The fields composing this schema.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Creates a new [`Schema`] from a sequence of [`Field`] values.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Returns an immutable reference of the vector of `Field` instances.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns an immutable reference of a specific [`Field`] instance selected using an
    /// offset within the internal `fields` vector.
    /// # Panics
    /// Panics iff `i` is out of bounds.
    #[inline]
    pub fn field(&self, i: usize) -> &Field {
        &self.fields[i]
    }
}

impl From<Vec<Field>> for Schema {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}
