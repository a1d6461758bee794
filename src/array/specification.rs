use crate::bitmap::Bitmap;
use crate::error::{ArrowError, Result};

/// Checks that `offsets` are non-empty, non-negative, monotonically increasing and that the last
/// offset does not exceed `values_len`.
pub(crate) fn try_check_offsets(offsets: &[i32], values_len: usize) -> Result<()> {
    let first = *offsets
        .first()
        .ok_or_else(|| ArrowError::oos("offsets must have at least one element"))?;
    if first < 0 {
        return Err(ArrowError::oos("offsets must be non-negative"));
    }
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(ArrowError::oos("offsets must be monotonically increasing"));
    }
    let last = offsets[offsets.len() - 1] as usize;
    if last > values_len {
        return Err(ArrowError::oos("offsets must not exceed the values length"));
    }
    Ok(())
}

/// Checks that every slot delimited by two consecutive `offsets` is valid utf8.
/// Assumes that [`try_check_offsets`] succeeded.
pub(crate) fn try_check_utf8(offsets: &[i32], values: &[u8]) -> Result<()> {
    offsets.windows(2).try_for_each(|w| {
        std::str::from_utf8(&values[w[0] as usize..w[1] as usize])
            .map(|_| ())
            .map_err(|e| ArrowError::oos(format!("values must be valid utf8: {}", e)))
    })
}

/// Checks that the validity, if any, has the length of the array.
pub(crate) fn try_check_validity(validity: Option<&Bitmap>, len: usize) -> Result<()> {
    match validity {
        Some(validity) if validity.len() != len => Err(ArrowError::InvalidArgumentError(format!(
            "validity mask length ({}) must match the number of values ({})",
            validity.len(),
            len
        ))),
        _ => Ok(()),
    }
}
