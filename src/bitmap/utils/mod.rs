//! General utilities for bitmaps representing items where LSB is the first item.
mod iterator;

pub use iterator::BitmapIter;

const BIT_MASK: [u8; 8] = [1, 2, 4, 8, 16, 32, 64, 128];
const UNSET_BIT_MASK: [u8; 8] = [
    255 - 1,
    255 - 2,
    255 - 4,
    255 - 8,
    255 - 16,
    255 - 32,
    255 - 64,
    255 - 128,
];

/// Returns whether bit at position `i` in `byte` is set or not
#[inline]
pub fn is_set(byte: u8, i: usize) -> bool {
    (byte & BIT_MASK[i]) != 0
}

/// Sets bit at position `i` in `byte`
#[inline]
pub fn set(byte: u8, i: usize, value: bool) -> u8 {
    if value {
        byte | BIT_MASK[i]
    } else {
        byte & UNSET_BIT_MASK[i]
    }
}

/// Sets bit at position `i` in `data`
#[inline]
pub fn set_bit(data: &mut [u8], i: usize, value: bool) {
    data[i / 8] = set(data[i / 8], i % 8, value);
}

/// Returns whether bit at position `i` in `data` is set or not
#[inline]
pub fn get_bit(data: &[u8], i: usize) -> bool {
    is_set(data[i / 8], i % 8)
}

/// Returns the number of bytes required to hold `bits` bits.
#[inline]
pub fn bytes_for(bits: usize) -> usize {
    bits.saturating_add(7) / 8
}

/// Returns the number of unset bits in `slice`, starting at bit `offset` and for `len` bits.
/// # Panics
/// Panics iff `offset + len > slice.len() * 8`.
pub fn null_count(slice: &[u8], offset: usize, len: usize) -> usize {
    assert!(offset + len <= slice.len() * 8);
    let end = offset + len;

    // leading bits up to the first byte boundary
    let head_end = std::cmp::min(bytes_for(offset) * 8, end);
    let mut set_count = (offset..head_end).filter(|i| get_bit(slice, *i)).count();

    // whole bytes
    let whole_end = head_end + (end - head_end) / 8 * 8;
    set_count += slice[head_end / 8..whole_end / 8]
        .iter()
        .map(|byte| byte.count_ones() as usize)
        .sum::<usize>();

    // trailing bits
    set_count += (whole_end..end).filter(|i| get_bit(slice, *i)).count();

    len - set_count
}
