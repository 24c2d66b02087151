//! # Bounds-checked numeric containers
//!
//! Two owning value types: a vector whose valid indices start at a
//! configurable offset, and a square matrix built on top of it that stores
//! only the upper triangle of each row. Every construction, index and binary
//! operation validates its preconditions and reports violations through
//! [`Error`] rather than panicking.
#![warn(missing_docs)]

pub use error::Error;
pub use matrix::TriangularMatrix;
pub use vector::Vector;

pub mod error;
pub mod matrix;
pub mod vector;

/// Largest number of elements a [`Vector`] may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest number of rows (and columns) a [`TriangularMatrix`] may have.
pub const MAX_MATRIX_SIZE: usize = 10_000;
