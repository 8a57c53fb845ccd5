//! Fixed-size 3x3 linear algebra over `f64`
//!
//! Only what the offset search needs: cofactor inversion, matrix-vector
//! product and componentwise subtraction. Everything is `Copy` and lives on
//! the stack.

use log::{debug, info};
use std::fmt;
use std::ops::{Mul, Sub};
use thiserror::Error;

/// Errors from matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LinalgError {
    /// Determinant is exactly zero
    #[error("matrix is not invertible, determinant is zero ({determinant})")]
    NotInvertible { determinant: f64 },
}

/// An ordered triple of reals
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a vector from integer lattice coordinates
    #[inline]
    pub fn from_ints(x: i64, y: i64, z: i64) -> Self {
        Self::new(x as f64, y as f64, z as f64)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        subtract(self, rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A 3x3 matrix stored row-major
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 =
        Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    #[inline]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Determinant by expansion along the first row
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Cofactor-expansion inverse
    ///
    /// Rejects only an exactly-zero determinant; nearly singular matrices are
    /// inverted as-is.
    pub fn invert(&self) -> Result<Matrix3, LinalgError> {
        let det = self.determinant();
        info!("Determinant of matrix: {}", det);

        if det == 0.0 {
            return Err(LinalgError::NotInvertible { determinant: det });
        }

        let m = &self.rows;
        let inv_det = 1.0 / det;
        let inverse = Matrix3::new([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]);
        debug!("Inverse matrix: {:?}", inverse.rows);
        Ok(inverse)
    }

    /// Largest absolute componentwise difference, for approximate comparisons
    pub fn max_abs_diff(&self, other: &Matrix3) -> f64 {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        multiply(&self, rhs)
    }
}

impl Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        multiply(self, rhs)
    }
}

/// Inverse of `matrix`, see [`Matrix3::invert`]
pub fn invert(matrix: &Matrix3) -> Result<Matrix3, LinalgError> {
    matrix.invert()
}

/// Standard matrix-vector product
#[inline]
pub fn multiply(m: &Matrix3, v: Vector3) -> Vector3 {
    let r = &m.rows;
    Vector3 {
        x: r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
        y: r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
        z: r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
    }
}

/// Componentwise `a - b`
#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    Vector3 {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
}
