//! Tests for 3x3 inversion and matrix-vector arithmetic

use affine_offset::dataset::FORWARD_MATRIX;
use affine_offset::linalg::{invert, multiply, subtract, LinalgError};
use affine_offset::{Matrix3, Vector3};

fn close(a: Vector3, b: Vector3, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol
}

#[test]
fn test_public_matrix_round_trip() {
    let inverse = invert(&FORWARD_MATRIX).unwrap();
    let vectors = [
        Vector3::new(72.0, 0.0, 0.0),
        Vector3::new(84.0, 100.0, 100.0),
        Vector3::new(-4365.0, 4923.0, -5772.0),
        Vector3::new(0.25, -0.5, 1e3),
    ];
    for v in vectors {
        let back = multiply(&inverse, multiply(&FORWARD_MATRIX, v));
        assert!(close(back, v, 1e-6), "{} -> {}", v, back);
    }
}

#[test]
fn test_double_inverse() {
    let inverse = invert(&FORWARD_MATRIX).unwrap();
    let back = invert(&inverse).unwrap();
    assert!(back.max_abs_diff(&FORWARD_MATRIX) < 1e-6);
}

#[test]
fn test_inverse_times_forward_is_identity() {
    let inverse = FORWARD_MATRIX.invert().unwrap();
    for (col, unit) in [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]
    .into_iter()
    .enumerate()
    {
        let e = inverse * (FORWARD_MATRIX * unit);
        let expected = Matrix3::IDENTITY.rows()[col];
        assert!(close(e, Vector3::from(expected), 1e-12));
    }
}

#[test]
fn test_zero_determinant_is_exact() {
    let singular = Matrix3::new([[2.0, 4.0, 6.0], [1.0, 2.0, 3.0], [7.0, -1.0, 0.5]]);
    match invert(&singular) {
        Err(LinalgError::NotInvertible { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected NotInvertible, got {:?}", other),
    }

    // Tiny but non-zero determinants are still inverted
    let tiny = Matrix3::new([[1e-6, 0.0, 0.0], [0.0, 1e-6, 0.0], [0.0, 0.0, 1e-6]]);
    assert!(invert(&tiny).is_ok());
}

#[test]
fn test_error_message() {
    let err = Matrix3::new([[0.0; 3]; 3]).invert().unwrap_err();
    assert!(err.to_string().contains("not invertible"));
}

#[test]
fn test_subtract_componentwise() {
    let a = Vector3::new(-981.0, 1395.0, -1668.0);
    let r = Vector3::new(-4365.0, 4923.0, -5772.0);
    assert_eq!(subtract(a, r), Vector3::new(3384.0, -3528.0, 4104.0));
    assert_eq!(a - r, subtract(a, r));
}
