//! contains [`Bitmap`] and [`MutableBitmap`], containers of `bool`.
mod immutable;
pub use immutable::*;

mod mutable;
pub use mutable::MutableBitmap;

pub mod utils;
