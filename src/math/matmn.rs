use super::vecn::VecN;
use std::ops::{Index, IndexMut, Mul};

/// A small dense M x N matrix used by the constraint solver. M is the
/// number of constraint rows, N is 6 (three degrees of freedom per body).
#[derive(Debug, Clone, PartialEq)]
pub struct MatMN {
    rows_count: usize,
    cols_count: usize,
    rows: Vec<VecN>,
}

impl MatMN {
    /// Creates a zeroed M x N matrix. Panics if either dimension is zero.
    pub fn new(m: usize, n: usize) -> Self {
        assert!(m > 0 && n > 0, "MatMN dimensions must be greater than zero");
        Self {
            rows_count: m,
            cols_count: n,
            rows: (0..m).map(|_| VecN::new(n)).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows_count
    }

    pub fn cols(&self) -> usize {
        self.cols_count
    }

    /// Resets every element to zero.
    pub fn zero(&mut self) {
        for row in &mut self.rows {
            row.zero();
        }
    }

    pub fn row(&self, i: usize) -> &VecN {
        &self.rows[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut VecN {
        &mut self.rows[i]
    }

    /// Returns the N x M transpose.
    pub fn transpose(&self) -> MatMN {
        let mut result = MatMN::new(self.cols_count, self.rows_count);
        for i in 0..self.rows_count {
            for j in 0..self.cols_count {
                result.rows[j][i] = self.rows[i][j];
            }
        }
        result
    }

    /// Solves `a * x = b` with Gauss-Seidel iteration, sweeping as many
    /// times as the system has rows. `a` must be square. Rows with a zero
    /// diagonal are skipped, leaving the corresponding component unchanged.
    pub fn solve_gauss_seidel(a: &MatMN, b: &VecN) -> VecN {
        let n = b.len();
        assert_eq!(a.rows(), n, "system matrix rows must match rhs dimension");
        assert_eq!(a.cols(), n, "system matrix must be square");

        let mut x = VecN::new(n);
        for _ in 0..n {
            for i in 0..n {
                let diag = a.rows[i][i];
                if diag != 0.0 {
                    let dx = b[i] / diag - a.rows[i].dot(&x) / diag;
                    if dx.is_finite() {
                        x[i] += dx;
                    }
                }
            }
        }
        x
    }
}

impl Index<(usize, usize)> for MatMN {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for MatMN {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.rows[i][j]
    }
}

impl Mul<&VecN> for &MatMN {
    type Output = VecN;

    fn mul(self, v: &VecN) -> VecN {
        assert_eq!(
            self.cols_count,
            v.len(),
            "matrix columns must match vector dimension"
        );
        let mut result = VecN::new(self.rows_count);
        for i in 0..self.rows_count {
            result[i] = self.rows[i].dot(v);
        }
        result
    }
}

impl Mul<&MatMN> for &MatMN {
    type Output = MatMN;

    fn mul(self, other: &MatMN) -> MatMN {
        assert_eq!(
            self.cols_count, other.rows_count,
            "matrix dimensions incompatible for multiplication"
        );
        let mut result = MatMN::new(self.rows_count, other.cols_count);
        for i in 0..self.rows_count {
            for j in 0..other.cols_count {
                let mut sum = 0.0;
                for k in 0..self.cols_count {
                    sum += self.rows[i][k] * other.rows[k][j];
                }
                result.rows[i][j] = sum;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matmn_new_is_zeroed() {
        let m = MatMN::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_matmn_transpose() {
        let mut m = MatMN::new(2, 3);
        m[(0, 0)] = 1.0;
        m[(0, 1)] = 2.0;
        m[(0, 2)] = 3.0;
        m[(1, 0)] = 4.0;
        m[(1, 1)] = 5.0;
        m[(1, 2)] = 6.0;

        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn test_matmn_mul_vec() {
        let mut m = MatMN::new(2, 2);
        m[(0, 0)] = 1.0;
        m[(0, 1)] = 2.0;
        m[(1, 0)] = 3.0;
        m[(1, 1)] = 4.0;

        let mut v = VecN::new(2);
        v[0] = 5.0;
        v[1] = 6.0;

        let r = &m * &v;
        assert_relative_eq!(r[0], 17.0);
        assert_relative_eq!(r[1], 39.0);
    }

    #[test]
    fn test_matmn_mul_mat() {
        let mut a = MatMN::new(2, 3);
        a[(0, 0)] = 1.0;
        a[(0, 1)] = 2.0;
        a[(0, 2)] = 3.0;
        a[(1, 0)] = 4.0;
        a[(1, 1)] = 5.0;
        a[(1, 2)] = 6.0;

        let b = a.transpose();
        let c = &a * &b;
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_relative_eq!(c[(0, 0)], 14.0);
        assert_relative_eq!(c[(0, 1)], 32.0);
        assert_relative_eq!(c[(1, 0)], 32.0);
        assert_relative_eq!(c[(1, 1)], 77.0);
    }

    #[test]
    fn test_gauss_seidel_diagonal_system() {
        let mut a = MatMN::new(2, 2);
        a[(0, 0)] = 2.0;
        a[(1, 1)] = 4.0;
        let mut b = VecN::new(2);
        b[0] = 6.0;
        b[1] = 8.0;

        let x = MatMN::solve_gauss_seidel(&a, &b);
        assert_relative_eq!(x[0], 3.0);
        assert_relative_eq!(x[1], 2.0);
    }

    #[test]
    fn test_gauss_seidel_converges_on_dominant_system() {
        // 4x + y = 9, x + 3y = 7 => x = 2, y = 5/3
        let mut a = MatMN::new(2, 2);
        a[(0, 0)] = 4.0;
        a[(0, 1)] = 1.0;
        a[(1, 0)] = 1.0;
        a[(1, 1)] = 3.0;
        let mut b = VecN::new(2);
        b[0] = 9.0 + 2.0 / 3.0;
        b[1] = 7.0;

        let x = MatMN::solve_gauss_seidel(&a, &b);
        // Two sweeps of a diagonally dominant 2x2 gets close
        let r0 = a.row(0).dot(&x);
        let r1 = a.row(1).dot(&x);
        assert!((r0 - b[0]).abs() < 0.5);
        assert!((r1 - b[1]).abs() < 0.5);
    }

    #[test]
    fn test_gauss_seidel_skips_zero_diagonal() {
        let mut a = MatMN::new(2, 2);
        a[(0, 0)] = 0.0;
        a[(1, 1)] = 2.0;
        let mut b = VecN::new(2);
        b[0] = 5.0;
        b[1] = 4.0;

        let x = MatMN::solve_gauss_seidel(&a, &b);
        assert_eq!(x[0], 0.0);
        assert_relative_eq!(x[1], 2.0);
    }
}
