//! Dense linear-algebra capabilities used by the fitting pipeline.
//!
//! The covariance matrix of an AR(p) fit is symmetric, so [`SymmetricMatrix`]
//! stores only the upper triangle. Both it and [`CovarianceVector`] expose
//! element access through the [`Matrix`] capability, which is all the LU
//! bridge into `nalgebra` needs.

use nalgebra::{DMatrix, DVector};

/// Read-only access to a dense real matrix.
pub trait Matrix {
    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the index is out of bounds.
    fn at(&self, row: usize, col: usize) -> f64;

    /// Returns the transpose of this matrix.
    fn t(&self) -> Box<dyn Matrix + '_>;
}

/// A column vector that is also a `len x 1` [`Matrix`].
pub trait Vector: Matrix {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` when the vector has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns element `i`.
    fn at_vec(&self, i: usize) -> f64;
}

impl<M: Matrix + ?Sized> Matrix for &M {
    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        (**self).at(row, col)
    }

    fn t(&self) -> Box<dyn Matrix + '_> {
        (**self).t()
    }
}

/// Square symmetric matrix packed as its upper triangle.
///
/// Element `(row, col)` with `row <= col` lives at
/// `row*size - (row-1)*row/2 + col - row`; lower-triangle reads are mirrored.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetricMatrix {
    size: usize,
    elements: Vec<f64>,
}

impl SymmetricMatrix {
    /// Creates a zero-filled `size x size` symmetric matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            elements: vec![0.0; size * (size + 1) / 2],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets `(row, col)` and, implicitly, `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.elements[idx] = value;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        let (r, c) = if col < row { (col, row) } else { (row, col) };
        assert!(
            c < self.size,
            "SymmetricMatrix: index ({row}, {col}) out of bounds for size {}",
            self.size
        );
        // r*size - (r-1)*r/2, rearranged so r = 0 stays in unsigned range.
        r * (2 * self.size + 1 - r) / 2 + c - r
    }
}

impl Matrix for SymmetricMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.elements[self.index(row, col)]
    }

    fn t(&self) -> Box<dyn Matrix + '_> {
        Box::new(self)
    }
}

/// Right-hand side of the normal equations: one covariance per lag.
#[derive(Clone, Debug, PartialEq)]
pub struct CovarianceVector(Vec<f64>);

impl CovarianceVector {
    /// Wraps `values` as a column vector.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for CovarianceVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl Matrix for CovarianceVector {
    fn dims(&self) -> (usize, usize) {
        (self.0.len(), 1)
    }

    fn at(&self, row: usize, _col: usize) -> f64 {
        self.0[row]
    }

    fn t(&self) -> Box<dyn Matrix + '_> {
        Box::new(TransposeVec { vector: self })
    }
}

impl Vector for CovarianceVector {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn at_vec(&self, i: usize) -> f64 {
        self.0[i]
    }
}

/// Row-vector view of a [`CovarianceVector`].
#[derive(Clone, Copy, Debug)]
pub struct TransposeVec<'a> {
    vector: &'a CovarianceVector,
}

impl Matrix for TransposeVec<'_> {
    fn dims(&self) -> (usize, usize) {
        (1, self.vector.len())
    }

    fn at(&self, _row: usize, col: usize) -> f64 {
        self.vector.at_vec(col)
    }

    fn t(&self) -> Box<dyn Matrix + '_> {
        Box::new(self.vector)
    }
}

/// Failures of the LU solve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum LinalgError {
    #[error("matrix is singular")]
    Singular,

    #[error("matrix is ill-conditioned (condition number {condition:e})")]
    IllConditioned { condition: f64 },

    #[error("dimension mismatch: {rows}x{cols} matrix, vector of length {len}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
}

fn to_dmatrix<M: Matrix + ?Sized>(m: &M) -> DMatrix<f64> {
    let (rows, cols) = m.dims();
    DMatrix::from_fn(rows, cols, |i, j| m.at(i, j))
}

/// Maximum absolute column sum.
fn one_norm(m: &DMatrix<f64>) -> f64 {
    m.column_iter()
        .map(|col| col.iter().map(|x| x.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Solves `a * x = b` (or `a^T * x = b` when `transpose` is set) by LU
/// decomposition with partial pivoting.
///
/// Fails with [`LinalgError::Singular`] on a zero pivot or non-finite
/// solution, and with [`LinalgError::IllConditioned`] when the 1-norm
/// condition number exceeds `condition_tolerance`.
pub(crate) fn solve_vec<M, V>(
    a: &M,
    transpose: bool,
    b: &V,
    condition_tolerance: f64,
) -> Result<DVector<f64>, LinalgError>
where
    M: Matrix + ?Sized,
    V: Vector + ?Sized,
{
    let (rows, cols) = a.dims();
    if rows != cols || rows != b.len() {
        return Err(LinalgError::DimensionMismatch {
            rows,
            cols,
            len: b.len(),
        });
    }
    if rows == 0 {
        return Ok(DVector::zeros(0));
    }

    let dense = if transpose {
        to_dmatrix(&*a.t())
    } else {
        to_dmatrix(a)
    };
    let rhs = DVector::from_fn(rows, |i, _| b.at_vec(i));
    let norm = one_norm(&dense);

    let lu = dense.lu();
    let x = lu.solve(&rhs).ok_or(LinalgError::Singular)?;
    let inverse = lu.try_inverse().ok_or(LinalgError::Singular)?;

    let condition = norm * one_norm(&inverse);
    if !condition.is_finite() || condition > condition_tolerance {
        return Err(LinalgError::IllConditioned { condition });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(LinalgError::Singular);
    }
    Ok(x)
}
