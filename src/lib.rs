//! Diagnostic text rendering of Apache Arrow arrays in safe Rust.
//!
//! The crate holds a minimal, immutable arrow data model ([`array`], [`bitmap`], [`buffer`],
//! [`datatypes`]) and a renderer ([`io::print`]) that writes any [`array::Array`] as
//! deterministic, indented text:
//! ```
//! use arrow_pretty::array::{Array, PrimitiveArray};
//!
//! let array = Array::from(PrimitiveArray::<i32>::from(vec![Some(1), None, Some(3)]));
//! assert_eq!(array.to_string(), "[1, null, 3]");
//! ```
// So that we have more control over what is `unsafe` inside an `unsafe` block
#![allow(unused_unsafe)]
//
#![allow(clippy::len_without_is_empty)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod array;
pub mod bitmap;
pub mod buffer;
pub mod columns;
pub mod error;
pub mod io;
pub mod record_batch;
pub mod types;

pub mod datatypes;
