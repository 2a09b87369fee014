//! Domain types for extracted document fields.

pub mod value;

pub use value::StructuredValue;
