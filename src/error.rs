//! Error type shared by the matrix container, the kernel and the driver.

use thiserror::Error;

/// Things that can go wrong while building or multiplying matrices.
///
/// The unchecked fast path never reports shape problems; those are a
/// violated safety contract there. Only the checked helpers return
/// [`MatrixError::Shape`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The buffer for a `rows × cols` matrix could not be obtained.
    #[error("failed to allocate {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },

    #[error("shape mismatch: expected {expected}, found {found}")]
    Shape { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
