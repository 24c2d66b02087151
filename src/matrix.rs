//! # Triangular matrix
//!
//! A square matrix stored as one [`Vector`] per row, each holding only the
//! columns from the diagonal rightwards. Row `i` has length `size - i` and
//! start index `i`, so the row's own bounds check rejects the lower triangle.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub};

use itertools::{Itertools, zip_eq};
use num_traits::Zero;

use crate::MAX_MATRIX_SIZE;
use crate::error::Error;
use crate::vector::Vector;

/// Uses a `Vec` of row [`Vector`]s as underlying data structure. The size is
/// fixed at creation and rows keep their shape for the matrix's lifetime.
///
/// Rows are owned and never shared; clones deep-copy every row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T> TriangularMatrix<T> {
    /// Create a zero-filled matrix.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at most [`MAX_MATRIX_SIZE`].
    pub fn new(size: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        if size > MAX_MATRIX_SIZE {
            return Err(Error::InvalidSize { given: size, maximum: MAX_MATRIX_SIZE, });
        }

        Ok(Self {
            rows: (0..size)
                .map(|i| Vector::new(size - i, i))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Borrow row `i`.
    ///
    /// The returned vector's valid column indices are `[i, size)`; its own
    /// bounds check rejects the lower triangle. Mutation goes through
    /// [`TriangularMatrix::set`], which cannot change a row's shape.
    pub fn row(&self, i: usize) -> Result<&Vector<T>, Error> {
        self.validate_row(i)?;

        Ok(&self.rows[i])
    }

    fn validate_row(&self, i: usize) -> Result<(), Error> {
        if i < self.size() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index: i, start_index: 0, len: self.size(), })
        }
    }

    /// Read the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, Error> {
        self.row(i)?.get(j)
    }

    /// Overwrite the element at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), Error> {
        self.validate_row(i)?;

        self.rows[i].set(j, value)
    }

    fn same_size(&self, other: &Self) -> Result<(), Error> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.size(), right: other.size(), })
        }
    }

    /// Element-wise sum of two matrices of equal size, over the addressable
    /// upper triangle.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        T: Add<Output = T> + Clone,
    {
        self.same_size(other)?;

        Ok(Self {
            rows: zip_eq(&self.rows, &other.rows)
                .map(|(left, right)| left.try_add(right))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Element-wise difference of two matrices of equal size, over the
    /// addressable upper triangle.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        T: Sub<Output = T> + Clone,
    {
        self.same_size(other)?;

        Ok(Self {
            rows: zip_eq(&self.rows, &other.rows)
                .map(|(left, right)| left.try_sub(right))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Display> Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "{}{}",
                ". ".repeat(row.start_index()),
                row.values().iter().map(|value| value.to_string()).join(" "),
            )?;
        }
        writeln!(f)
    }
}
