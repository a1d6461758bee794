//! Contains modules to interface [`Array`](crate::array::Array)s with text, such as [`mod@print`].
pub mod print;
