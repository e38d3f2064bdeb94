//! The measured kernel: textbook i-j-k multiplication.
//!
//! Kept deliberately naive. The innermost loop walks B with stride `m`
//! (column-wise), which is exactly the memory behaviour the benchmark is
//! there to time. Do not reorder the loops or block them.

use std::hint::black_box;

use super::Matrix;
use crate::error::{MatrixError, Result};

/// Multiply `a · b` and return element `(0, 0)` of the product.
///
/// The full `a.rows() × b.cols()` product is computed into a fresh matrix
/// every call and then discarded; only the corner escapes. The product
/// goes through [`black_box`] first so none of it can be optimized away.
///
/// # Safety
///
/// Caller must ensure:
/// - `a.cols() == b.rows()`
/// - `a.rows() >= 1` and `b.cols() >= 1` (so `(0, 0)` exists)
///
/// # Errors
///
/// [`MatrixError::Allocation`] if the result matrix can't be allocated.
#[inline(never)]
pub unsafe fn dot(a: &Matrix, b: &Matrix) -> Result<f32> {
    debug_assert!(a.rows() >= 1 && b.cols() >= 1, "empty product");
    let c = unsafe { multiply_unchecked(a, b)? };
    let c = black_box(c);
    Ok(unsafe { c.get_unchecked(0, 0) })
}

/// The i-j-k loop nest, returning the whole product.
///
/// Accumulates in a single `f32` per output element, `k` ascending.
///
/// # Safety
///
/// Caller must ensure `a.cols() == b.rows()`.
pub unsafe fn multiply_unchecked(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    debug_assert_eq!(a.cols(), b.rows(), "inner dimensions differ");

    let (n, p, m) = (a.rows(), a.cols(), b.cols());
    let mut c = Matrix::new(n, m)?;

    for i in 0..n {
        for j in 0..m {
            let mut s = 0.0f32;
            for k in 0..p {
                // SAFETY: i < n, k < p = b.rows(), j < m by the loop bounds
                s += unsafe { a.get_unchecked(i, k) * b.get_unchecked(k, j) };
            }
            unsafe { c.set_unchecked(i, j, s) };
        }
    }

    Ok(c)
}

/// Checked multiply: same loop nest, but rejects mismatched shapes.
///
/// Not used on the timed path. Handy for verifying the kernel against
/// known products.
///
/// ```
/// use dotbench::{Matrix, multiply};
///
/// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
/// let c = multiply(&a, &b).unwrap();
///
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::Shape {
            expected: a.cols(),
            found: b.rows(),
        });
    }
    // SAFETY: inner dimensions checked above
    unsafe { multiply_unchecked(a, b) }
}
