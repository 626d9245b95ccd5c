//! Geometry primitives

mod size;

pub use size::Size;
