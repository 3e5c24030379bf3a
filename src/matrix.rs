use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

use crate::error::CalcError;

/// A rectangular grid of reals, rows of columns. The grid is never
/// empty and every row has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build a matrix from rows, validating the shape invariant.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, CalcError> {
        if data.is_empty() || data[0].is_empty() {
            return Err(CalcError::InvalidInput(
                "matrix needs at least one row and one column",
            ));
        }
        let cols = data[0].len();
        if data.iter().any(|row| row.len() != cols) {
            return Err(CalcError::RaggedMatrix);
        }
        Ok(Matrix { data })
    }

    /// A rows x cols grid of zeros, the blank operand a user then edits
    /// cell by cell.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, CalcError> {
        if rows == 0 || cols == 0 {
            return Err(CalcError::InvalidInput(
                "matrix needs at least one row and one column",
            ));
        }
        Ok(Matrix { data: vec![vec![0.0; cols]; rows] })
    }

    pub fn identity(n: usize) -> Result<Self, CalcError> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i][i] = 1.0;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        value: f64,
    ) -> Result<(), CalcError> {
        match self.data.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(CalcError::InvalidInput("cell index out of range")),
        }
    }

    fn dims(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.dims();
        let mut data = vec![vec![0.0; rows]; cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j][i] = self.data[i][j];
            }
        }
        Matrix { data }
    }

    /// Determinant by cofactor expansion along the first row. The
    /// recursion is exponential in the matrix size, which is fine for
    /// the hand-entered grids this library exists for.
    pub fn determinant(&self) -> Result<f64, CalcError> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(CalcError::NotSquare { rows, cols });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        let n = self.rows();
        if n == 1 {
            return self.data[0][0];
        }
        if n == 2 {
            return self.data[0][0] * self.data[1][1] -
                self.data[0][1] * self.data[1][0];
        }
        let mut det = 0.0;
        for j in 0..n {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.data[0][j] * self.minor(j).det_unchecked();
        }
        det
    }

    // The submatrix excluding row 0 and the given column.
    fn minor(&self, col: usize) -> Matrix {
        let data = self.data[1..]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        Matrix { data }
    }

    fn zip_with<F>(&self, that: &Matrix, f: F) -> Result<Matrix, CalcError>
        where F: Fn(f64, f64) -> f64
    {
        if self.dims() != that.dims() {
            return Err(CalcError::DimensionMismatch {
                lhs: self.dims(),
                rhs: that.dims(),
            });
        }
        let data = self.data
            .iter()
            .zip(&that.data)
            .map(|(a, b)| {
                a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
            })
            .collect();
        Ok(Matrix { data })
    }
}

impl<'a> Add for &'a Matrix {
    type Output = Result<Matrix, CalcError>;

    fn add(self, that: Self) -> Self::Output {
        self.zip_with(that, |x, y| x + y)
    }
}

impl<'a> Sub for &'a Matrix {
    type Output = Result<Matrix, CalcError>;

    fn sub(self, that: Self) -> Self::Output {
        self.zip_with(that, |x, y| x - y)
    }
}

impl<'a> Mul for &'a Matrix {
    type Output = Result<Matrix, CalcError>;

    fn mul(self, that: Self) -> Self::Output {
        if self.cols() != that.rows() {
            return Err(CalcError::DimensionMismatch {
                lhs: self.dims(),
                rhs: that.dims(),
            });
        }
        let (rows, inner, cols) = (self.rows(), self.cols(), that.cols());
        let mut data = vec![vec![0.0; cols]; rows];
        for i in 0..rows {
            for j in 0..cols {
                for k in 0..inner {
                    data[i][j] += self.data[i][k] * that.data[k][j];
                }
            }
        }
        Ok(Matrix { data })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> =
                row.iter().map(|v| v.to_string()).collect();
            write!(f, "[ {} ]", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn shape_is_validated() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(CalcError::RaggedMatrix)
        );
        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::zeros(0, 3).is_err());
    }

    #[test]
    fn addition_and_subtraction() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!((&a + &b).unwrap(), matrix(&[&[6.0, 8.0], &[10.0, 12.0]]));
        assert_eq!((&b - &a).unwrap(), matrix(&[&[4.0, 4.0], &[4.0, 4.0]]));

        let c = matrix(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(
            &a + &c,
            Err(CalcError::DimensionMismatch { lhs: (2, 2), rhs: (1, 3) })
        );
    }

    #[test]
    fn multiplication() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(
            (&a * &b).unwrap(),
            matrix(&[&[19.0, 22.0], &[43.0, 50.0]])
        );

        let wide = matrix(&[&[1.0, 2.0, 3.0]]);
        assert!((&a * &wide).is_err());
    }

    #[test]
    fn multiply_by_identity_is_identity_law() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let id = Matrix::identity(3).unwrap();
        assert_eq!((&a * &id).unwrap(), a);
    }

    #[test]
    fn transpose_round_trips() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn determinants() {
        assert_eq!(Matrix::identity(3).unwrap().determinant(), Ok(1.0));
        assert_eq!(matrix(&[&[7.0]]).determinant(), Ok(7.0));
        assert_eq!(
            matrix(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant(),
            Ok(-2.0)
        );
        // Singular: rows are linearly dependent
        assert_eq!(
            matrix(&[
                &[1.0, 2.0, 3.0],
                &[4.0, 5.0, 6.0],
                &[7.0, 8.0, 9.0],
            ]).determinant(),
            Ok(0.0)
        );
        assert_eq!(
            matrix(&[&[1.0, 2.0, 3.0]]).determinant(),
            Err(CalcError::NotSquare { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn cell_edits_respect_bounds() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.set(0, 1, 5.0).unwrap();
        assert_eq!(m.get(0, 1), Some(5.0));
        assert!(m.set(2, 0, 1.0).is_err());
        assert_eq!(m.get(2, 0), None);
    }
}
