//! Row-major `f32` matrix and the operations the benchmark runs on it.
//!
//! The container hands out unchecked element access for the timed loop
//! and checked access for everything else (tests, fixtures).

pub mod fill;
pub mod naive_ijk;

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of single-precision floats.
///
/// Element `(i, j)` lives at offset `i * cols + j`. The buffer length is
/// fixed at construction and always equals `rows * cols`.
#[derive(Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Allocates a `rows × cols` matrix, zero-filled.
    ///
    /// Zero dimensions are not rejected. If `rows * cols` overflows or the
    /// allocator refuses, returns [`MatrixError::Allocation`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let alloc_err = MatrixError::Allocation { rows, cols };
        let len = rows.checked_mul(cols).ok_or(alloc_err.clone())?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_err)?;
        data.resize(len, 0.0);

        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from row-major values.
    ///
    /// # Example
    ///
    /// ```
    /// use dotbench::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0,
    ///                                   4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.get(1, 0), Some(4.0));
    /// ```
    pub fn from_rows(rows: usize, cols: usize, values: &[f32]) -> Result<Self> {
        let mut m = Self::new(rows, cols)?;
        if values.len() != m.data.len() {
            return Err(MatrixError::Shape {
                expected: m.data.len(),
                found: values.len(),
            });
        }
        m.data.copy_from_slice(values);
        Ok(m)
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Reads element `(i, j)` without a bounds check.
    ///
    /// # Safety
    ///
    /// Caller must ensure `i < self.rows()` and `j < self.cols()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize, j: usize) -> f32 {
        debug_assert!(i < self.rows && j < self.cols, "({i}, {j}) out of range");
        unsafe { *self.data.get_unchecked(i * self.cols + j) }
    }

    /// Overwrites element `(i, j)` without a bounds check.
    ///
    /// # Safety
    ///
    /// Caller must ensure `i < self.rows()` and `j < self.cols()`.
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, i: usize, j: usize, value: f32) {
        debug_assert!(i < self.rows && j < self.cols, "({i}, {j}) out of range");
        unsafe { *self.data.get_unchecked_mut(i * self.cols + j) = value };
    }

    /// Checked read. `None` if `(i, j)` is outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Checked write. `None` if `(i, j)` is outside the matrix.
    pub fn set(&mut self, i: usize, j: usize, value: f32) -> Option<()> {
        if i < self.rows && j < self.cols {
            self.data[i * self.cols + j] = value;
            Some(())
        } else {
            None
        }
    }
}
