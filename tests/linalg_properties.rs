// Algebraic identities of the vector/matrix layer, checked on seeded random inputs.
// Float products are compared with a tolerance; integer determinants are exact.

mod util;

#[cfg(feature = "linear_algebra")]
mod linalg_properties_tests {
    use super::util::{assert_close, assert_matrix_close, random_int_matrix, random_matrix};
    use emu_math::{ComparisonOperator, Matrix, RowMajor, Vector};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TRIALS: usize = 32;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed_ab1e)
    }

    #[test]
    fn product_is_associative() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let a = random_matrix::<3, 2>(&mut rng);
            let b = random_matrix::<4, 3>(&mut rng);
            let c = random_matrix::<2, 4>(&mut rng);
            let left: Matrix<2, 2, f64> = (a * b) * c;
            let right: Matrix<2, 2, f64> = a * (b * c);
            assert_matrix_close(&left, &right, 1e-9);
        }
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let m = random_matrix::<3, 4>(&mut rng);
            assert_eq!(m * Matrix::<3, 3, f64>::identity(), m);
            assert_eq!(Matrix::<4, 4, f64>::identity() * m, m);
        }
    }

    #[test]
    fn transpose_identities() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let a = random_int_matrix::<3, 2>(&mut rng);
            let b = random_int_matrix::<4, 3>(&mut rng);
            assert_eq!(a.transpose().transpose(), a);
            // (AB)^T = B^T A^T
            assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        }
    }

    #[test]
    fn duplicated_row_has_zero_determinant() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let mut m = random_int_matrix::<4, 4>(&mut rng);
            m.set_row(3, m.row(1));
            assert_eq!(m.determinant(), 0);
            let mut m = random_int_matrix::<3, 3>(&mut rng);
            m.set_column(0, m.column(2));
            assert_eq!(m.determinant(), 0);
        }
    }

    #[test]
    fn determinant_is_multiplicative_and_transpose_invariant() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let a = random_int_matrix::<4, 4>(&mut rng);
            let b = random_int_matrix::<4, 4>(&mut rng);
            assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
            assert_eq!(a.transpose().determinant(), a.determinant());
        }
    }

    #[test]
    fn layouts_agree() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let a = random_int_matrix::<3, 3>(&mut rng);
            let r: Matrix<3, 3, i64, RowMajor> = a.into_layout();
            assert_eq!(r.determinant(), a.determinant());
            assert_eq!(r.trace(), a.trace());
            assert!((r * r).equals(&(a * a)));
            assert!(r.adjugate().equals(&a.adjugate()));
        }
    }

    #[test]
    fn inverse_recovers_identity() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            // diagonally dominant, so never singular
            let m = random_matrix::<3, 3>(&mut rng) + Matrix::<3, 3, f64>::identity() * 40.0;
            let inv = m.inverse().expect("diagonally dominant matrix is invertible");
            assert_matrix_close(&(m * inv), &Matrix::<3, 3, f64>::identity(), 1e-12);
            assert_close(inv.determinant() * m.determinant(), 1.0, 1e-10);
        }
    }

    #[test]
    fn vector_add_sub_round_trip() {
        let a = Vector::new([3i32, -8, 12, 0, 7]);
        let b = Vector::new([100i32, 5, -5, 1, -7]);
        assert_eq!((a + b) - b, a);
        assert!(((a + b) - b).cmp_all(ComparisonOperator::Equals, a));
        assert_eq!((a * 2) / 2, a);
    }

    #[test]
    fn exclusive_submatrix_minor_expansion() {
        let mut rng = rng();
        for _ in 0..TRIALS {
            let m = random_int_matrix::<4, 4>(&mut rng);
            // expansion along column 2 matches the row-0 expansion
            let mut det = 0;
            for row in 0..4 {
                let sub: Matrix<3, 3, i64> = m.exclusive_submatrix(2, row);
                let sign = if (2 + row) % 2 == 0 { 1 } else { -1 };
                det += sign * m.at(2, row) * sub.determinant();
            }
            assert_eq!(det, m.determinant());
        }
    }
}
