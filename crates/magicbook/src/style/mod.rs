//! Style data model.
//!
//! - [`StyleValue`]: a terminal CSS value, a nested book, or nothing
//! - [`StyleBook`]: an ordered mapping of keys to values ("magic book")
//! - [`ClassTable`]: the compiled class-key to class-name table ("magic")

mod book;
mod classes;
mod value;

pub use book::StyleBook;
pub use classes::ClassTable;
pub use value::StyleValue;
