//! Contains [`Buffer`], an immutable, `Arc`-shared container of
//! [`NativeType`](crate::types::NativeType)s.
//!
//! Together with [`crate::bitmap::Bitmap`], these declare all data (not metadata)
//! that is stored in memory by this crate.
mod immutable;

pub use immutable::Buffer;
