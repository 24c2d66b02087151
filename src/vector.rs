//! # Offset vector
//!
//! Wrapping a `Vec` such that its valid indices start at a configurable
//! offset. Length is fixed at creation; all access is bounds checked.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

use itertools::zip_eq;
use num_traits::Zero;

use crate::MAX_VECTOR_SIZE;
use crate::error::Error;

/// Uses a `Vec` as underlying data structure, paired with the offset at which
/// valid logical indices begin.
///
/// An index `i` is valid when `start_index <= i < start_index + len`. The
/// buffer is exclusively owned; clones never share storage with the original.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vector<T> {
    start_index: usize,
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Create a zero-filled vector.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most [`MAX_VECTOR_SIZE`].
    /// * `start_index`: Offset of the first valid logical index.
    ///
    /// # Return value
    ///
    /// A vector with every element equal to `T::zero()`, or an error when the
    /// length exceeds the maximum or the range end `start_index + len` is not
    /// representable.
    pub fn new(len: usize, start_index: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::from_values(vec![T::zero(); Self::validate_len(len)?], start_index)
    }

    /// Create a vector from the provided values.
    ///
    /// # Arguments
    ///
    /// * `values`: Buffer to adopt, used directly without copying.
    /// * `start_index`: Offset of the first valid logical index.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Result<Self, Error> {
        let len = Self::validate_len(values.len())?;
        match start_index.checked_add(len) {
            Some(_) => Ok(Self { start_index, data: values, }),
            None => Err(Error::InvalidStartIndex { start_index, len, }),
        }
    }

    fn validate_len(len: usize) -> Result<usize, Error> {
        if len > MAX_VECTOR_SIZE {
            Err(Error::InvalidSize { given: len, maximum: MAX_VECTOR_SIZE, })
        } else {
            Ok(len)
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset at which valid logical indices begin.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Map a logical index to its physical offset, rejecting anything outside
    /// `[start_index, start_index + len)`.
    fn offset(&self, index: usize) -> Result<usize, Error> {
        if index >= self.start_index && index - self.start_index < self.len() {
            Ok(index - self.start_index)
        } else {
            Err(Error::IndexOutOfRange {
                index,
                start_index: self.start_index,
                len: self.len(),
            })
        }
    }

    /// Read the element at a logical index.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.offset(index).map(|i| &self.data[i])
    }

    /// Overwrite the element at a logical index.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        let i = self.offset(index)?;
        self.data[i] = value;

        Ok(())
    }

    fn same_shape(&self, other: &Self) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.len(), right: other.len(), })
        }
    }

    /// Element-wise sum of two vectors of equal length.
    ///
    /// Elements are paired by position within the buffers; the start indices
    /// of the operands need not match. The result takes this vector's shape.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        T: Add<Output = T> + Clone,
    {
        self.same_shape(other)?;

        Ok(Self {
            start_index: self.start_index,
            data: zip_eq(&self.data, &other.data)
                .map(|(left, right)| left.clone() + right.clone())
                .collect(),
        })
    }

    /// Element-wise difference of two vectors of equal length.
    ///
    /// Pairing is positional, as for [`Vector::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        T: Sub<Output = T> + Clone,
    {
        self.same_shape(other)?;

        Ok(Self {
            start_index: self.start_index,
            data: zip_eq(&self.data, &other.data)
                .map(|(left, right)| left.clone() - right.clone())
                .collect(),
        })
    }

    /// Inner product of two vectors of equal length.
    ///
    /// # Return value
    ///
    /// The sum of the pairwise element products, paired by position.
    pub fn dot(&self, other: &Self) -> Result<T, Error>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.same_shape(other)?;

        Ok(zip_eq(&self.data, &other.data)
            .fold(T::zero(), |total, (left, right)| {
                total + left.clone() * right.clone()
            }))
    }

    pub(crate) fn values(&self) -> &[T] {
        &self.data
    }

    fn map<F: FnMut(&T) -> T>(&self, f: F) -> Self {
        Self {
            start_index: self.start_index,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Add<Output = T> + Clone> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Add a scalar to every element.
    fn add(self, rhs: T) -> Self::Output {
        self.map(|value| value.clone() + rhs.clone())
    }
}

impl<T: Sub<Output = T> + Clone> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Subtract a scalar from every element.
    fn sub(self, rhs: T) -> Self::Output {
        self.map(|value| value.clone() - rhs.clone())
    }
}

impl<T: Mul<Output = T> + Clone> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Scale every element by a scalar.
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|value| value.clone() * rhs.clone())
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}
