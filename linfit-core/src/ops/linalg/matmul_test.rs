use crate::matrix::{Matrix, RowVector, Vector};
use crate::ops::linalg::matmul::matmul;
use crate::utils::testing::check_matrix_near;
use approx::assert_relative_eq;

#[test]
fn test_matmul_forward() {
    let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
    let output = matmul(&a, &b);
    check_matrix_near(&output, &[[19.0, 22.0], [43.0, 50.0]], 1e-12);
}

#[test]
fn test_matmul_forward_non_square() {
    let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::new([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
    let output: Matrix<2, 2> = a * b;
    check_matrix_near(&output, &[[58.0, 64.0], [139.0, 154.0]], 1e-12);
}

#[test]
fn test_matmul_reference_and_method_forms_agree() {
    let a = Matrix::new([[1.0, -2.0], [0.5, 4.0], [3.0, 0.0]]);
    let b = Matrix::new([[2.0, 1.0, 0.0, -1.0], [1.0, 1.0, 1.0, 1.0]]);
    let owned: Matrix<3, 4> = a * b;
    assert_eq!(owned, &a * &b);
    assert_eq!(owned, a.matmul(&b));
}

#[test]
fn test_row_times_column_is_dot_product() {
    let r = RowVector::<3>::new([[1.0, 2.0, 3.0]]);
    let c = Vector::<3>::from_slice(&[4.0, 5.0, 6.0]).unwrap();
    let dot: Matrix<1, 1> = r * c;
    assert_relative_eq!(dot.scalar(), 32.0);
}

#[test]
fn test_column_times_row_is_outer_product() {
    let c = Vector::<2>::from_slice(&[1.0, 2.0]).unwrap();
    let r = RowVector::<3>::new([[3.0, 4.0, 5.0]]);
    let outer: Matrix<2, 3> = c * r;
    check_matrix_near(&outer, &[[3.0, 4.0, 5.0], [6.0, 8.0, 10.0]], 1e-12);
}

#[test]
fn test_identity_is_neutral() {
    let a = Matrix::new([[1.5, 2.0, -1.0], [0.0, 3.0, 7.0]]);
    assert_eq!(Matrix::<2, 2>::identity() * a, a);
    assert_eq!(a * Matrix::<3, 3>::identity(), a);
}

#[test]
fn test_matmul_one_by_one() {
    let a = Matrix::new([[3.0]]);
    let b = Matrix::new([[-2.0]]);
    assert_eq!((a * b).scalar(), -6.0);
}

#[test]
fn test_matmul_associative() {
    let a = Matrix::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let b = Matrix::new([[0.5, -1.0, 2.0], [1.5, 0.0, -0.5]]);
    let c = Matrix::new([[2.0], [1.0], [-3.0]]);
    assert_relative_eq!((a * b) * c, a * (b * c), epsilon = 1e-9);
}
