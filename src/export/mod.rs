//! Serialization of palette data into pasteable configuration text.

pub mod tailwind;

pub use tailwind::serialize;
