//! `Matrix` — a square or rectangular matrix of reals.
//!
//! Thin newtype around `nalgebra::DMatrix<f64>` carrying the covariance and
//! correlation matrices produced by [`crate::covariance`].

use ia_core::{errors::check_same_length, Real, Result};
use nalgebra::{DMatrix, DVector};
use std::ops::Index;

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Build an `n × n` matrix from a function of `(row, col)`.
    pub fn from_fn<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> Real,
    {
        Self(DMatrix::from_fn(n, n, f))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Return `true` if `|m_ij - m_ji| <= tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: Real) -> bool {
        self.is_square()
            && (0..self.rows()).all(|i| {
                (0..i).all(|j| (self.0[(i, j)] - self.0[(j, i)]).abs() <= tolerance)
            })
    }

    /// Diagonal elements.
    pub fn diagonal(&self) -> Vec<Real> {
        let n = self.0.nrows().min(self.0.ncols());
        (0..n).map(|i| self.0[(i, i)]).collect()
    }

    /// Quadratic form `xᵀ M x`.
    ///
    /// Fails unless the matrix is square and `x` has one entry per row.
    pub fn quadratic_form(&self, x: &[Real]) -> Result<Real> {
        check_same_length(self.rows(), self.cols())?;
        check_same_length(self.rows(), x.len())?;
        let v = DVector::from_column_slice(x);
        Ok(v.dot(&(&self.0 * &v)))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_form() {
        let m = Matrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        // [1, 2] · [[2, 1], [1, 3]] · [1, 2] = 2 + 2·1·2 + 3·4 = 18
        assert_eq!(m.quadratic_form(&[1.0, 2.0]).unwrap(), 18.0);
        assert!(m.quadratic_form(&[1.0]).is_err());
    }

    #[test]
    fn non_square_quadratic_form_rejected() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(!m.is_square());
        assert!(m.quadratic_form(&[1.0, 1.0]).is_err());
    }

    #[test]
    fn symmetry_and_diagonal() {
        let m = Matrix::from_fn(3, |i, j| (i + j) as Real);
        assert!(m.is_symmetric(0.0));
        assert_eq!(m.diagonal(), vec![0.0, 2.0, 4.0]);
        let skew = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(!skew.is_symmetric(1e-12));
    }
}
