use std::iter::FromIterator;

use arrow_pretty::bitmap::{utils::null_count, Bitmap, MutableBitmap};

#[test]
fn from_iter() {
    let bitmap = Bitmap::from_iter(vec![true, false, true, true, false, false, true, true, false]);
    assert_eq!(bitmap.len(), 9);
    assert_eq!(bitmap.null_count(), 4);
    assert_eq!(bitmap.bytes(), &[0b11001101, 0b0]);
}

#[test]
fn slice_across_bytes() {
    let bitmap = Bitmap::from_u8_vec(vec![0b11110000, 0b00001111], 16);
    let sliced = bitmap.slice(6, 4);
    assert_eq!(sliced.null_count(), 0);
    assert_eq!(sliced.iter().collect::<Vec<_>>(), vec![true; 4]);

    let sliced = sliced.slice(1, 3).slice(2, 1);
    assert_eq!(sliced.offset(), 9);
    assert!(sliced.get_bit(0));
}

#[test]
fn null_count_with_offset() {
    let bytes = [0b01011011u8, 0b11111111, 0b00000001];
    assert_eq!(null_count(&bytes, 0, 8), 3);
    assert_eq!(null_count(&bytes, 2, 14), 3);
    assert_eq!(null_count(&bytes, 8, 9), 0);
    assert_eq!(null_count(&bytes, 17, 7), 7);
}

#[test]
fn mutable_into_option() {
    let mut bitmap = MutableBitmap::with_capacity(3);
    bitmap.push(true);
    bitmap.push(false);
    let bitmap: Option<Bitmap> = bitmap.into();
    assert_eq!(bitmap.map(|x| x.null_count()), Some(1));
}
