use std::fmt::{Display, Formatter};

use super::DataType;

/// Represents the metadata of a "column".
///
/// A [`Schema`](super::Schema) is an ordered collection of [`Field`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    data_type: DataType,
    nullable: bool,
}

impl Field {
    /// Creates a new field
    pub fn new<T: Into<String>>(name: T, data_type: DataType, nullable: bool) -> Self {
        Field {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Returns an immutable reference to the `Field`'s name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns an immutable reference to the `Field`'s  data-type.
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Indicates whether this `Field` supports null values.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)?;
        if !self.nullable {
            f.write_str(" not null")?;
        }
        Ok(())
    }
}
