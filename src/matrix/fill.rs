use rand::Rng;

use super::Matrix;

/// Fill every element with a uniform value in `[-1, 1)`.
///
/// Values are drawn in row-major order, so the same seeded generator always
/// produces the same matrix.
pub fn fill_rand<R: Rng + ?Sized>(m: &mut Matrix, rng: &mut R) {
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            let v = rng.random::<f32>() * 2.0 - 1.0;
            // SAFETY: i < rows, j < cols by the loop bounds
            unsafe { m.set_unchecked(i, j, v) };
        }
    }
}
