//! Helpers for writing large utility-class catalogues.
//!
//! - [`draw_magic_table`]: expands `{ suffix: value }` tables into books
//! - [`Labels`]: resolves label phrases into class keys, failing fast on typos

mod drawer;
mod labels;

pub use drawer::{draw_magic_table, DrawProperty, SHARED};
pub use labels::{lab, Labels};
