//! Mesh export formats.

pub mod stl;

pub use stl::{stl_bytes, write_stl};
