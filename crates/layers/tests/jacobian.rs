//! # Jacobian Tests
//!
//! End-to-end checks of the chain-rule composition:
//! - fixed scenarios with hand-computed Jacobians
//! - the chained-layer identity (chained = local · parent)
//! - full-chain Jacobians against central finite differences with
//!   randomized weights and inputs

use chainrule_layers::{Affine, Backward, Forward, Matrix, Sum, Tanh, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Central-difference column of the Jacobian of `f` at `x`, for coordinate `j`.
fn central_difference<const IN: usize, const OUT: usize>(
    f: &dyn Fn(&Vector<IN>) -> Vector<OUT>,
    x: &Vector<IN>,
    j: usize,
    h: f64,
) -> Vector<OUT> {
    let mut x_plus = x.clone();
    let mut x_minus = x.clone();
    x_plus.set(j, 0, x.get(j, 0) + h);
    x_minus.set(j, 0, x.get(j, 0) - h);

    let f_plus = f(&x_plus);
    let f_minus = f(&x_minus);

    Vector::from_fn(|i, _| (f_plus.get(i, 0) - f_minus.get(i, 0)) / (2.0 * h))
}

/// Assert that an analytic Jacobian matches its finite-difference estimate
/// within a relative tolerance.
fn assert_jacobian_close<const IN: usize, const OUT: usize>(
    analytic: &Matrix<OUT, IN>,
    f: &dyn Fn(&Vector<IN>) -> Vector<OUT>,
    x: &Vector<IN>,
    tolerance: f64,
) {
    let h = 1e-5;
    for j in 0..IN {
        let column = central_difference(f, x, j, h);
        for i in 0..OUT {
            let numerical = column.get(i, 0);
            let value = analytic.get(i, j);
            let scale = numerical.abs().max(value.abs()).max(1.0);
            assert!(
                (numerical - value).abs() / scale < tolerance,
                "Jacobian mismatch at [{}, {}]: analytic={}, numerical={}",
                i,
                j,
                value,
                numerical
            );
        }
    }
}

fn random_tensor<const M: usize, const N: usize>(rng: &mut StdRng) -> Matrix<M, N> {
    Matrix::from_fn(|_, _| rng.gen_range(-1.0..1.0))
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

#[test]
fn test_root_affine_scenario() {
    // W = [[2, 3]], b = [1], x = [1, 1]
    let mut layer = Affine::<2, 1>::root();
    layer.set_weights(Matrix::from_data([[2.0, 3.0]]), Vector::from_data([[1.0]]));

    let y = layer.forward(&Vector::from_data([[1.0], [1.0]]));
    assert_eq!(y.get(0, 0), 6.0);

    assert_eq!(layer.backward().unwrap(), Matrix::from_data([[2.0, 3.0]]));
}

#[test]
fn test_identity_affine_into_tanh_scenario() {
    // W = I₂, b = 0, x = 0: forward is 0 and the Jacobian is I₂.
    let mut l0 = Affine::<2, 2>::root();
    l0.set_weights(Matrix::identity(), Vector::zeros());
    let l1: Tanh<2, _> = Tanh::chained(&l0);

    let y = l1.forward(&l0.forward(&Vector::zeros()));
    assert_eq!(y, Vector::zeros());

    assert_eq!(l1.backward().unwrap(), Matrix::identity());
}

#[test]
fn test_affine_forward_matches_w_x_plus_b_randomized() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let w: Matrix<2, 3> = random_tensor(&mut rng);
        let b: Vector<2> = random_tensor(&mut rng);
        let x: Vector<3> = random_tensor(&mut rng);

        let mut layer = Affine::<3, 2>::root();
        layer.set_weights(w.clone(), b.clone());

        let y = layer.forward(&x);
        let expected = w.matmul(&x).add(&b);
        for i in 0..2 {
            assert!((y.get(i, 0) - expected.get(i, 0)).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Chained-Layer Identity
// ============================================================================

#[test]
fn test_chained_affine_equals_local_times_parent() {
    let mut rng = StdRng::seed_from_u64(11);

    let mut parent = Affine::<4, 3>::root();
    parent.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let mut child: Affine<3, 2, _> = Affine::chained(&parent);
    child.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));

    let x: Vector<4> = random_tensor(&mut rng);
    child.forward(&parent.forward(&x));

    // Exact identity on the matrix construction.
    let expected = child.weights().matmul(&parent.backward().unwrap());
    assert_eq!(child.backward().unwrap(), expected);
}

#[test]
fn test_chained_tanh_equals_local_times_parent() {
    let mut rng = StdRng::seed_from_u64(13);

    let mut parent = Affine::<3, 3>::root();
    parent.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let child: Tanh<3, _> = Tanh::chained(&parent);

    let x: Vector<3> = random_tensor(&mut rng);
    let hidden = parent.forward(&x);
    child.forward(&hidden);

    // Rebuild the local diagonal from the forwarded pre-activation.
    let local = hidden.tanh().map(|t| 1.0 - t * t).diag();
    let expected = local.matmul(&parent.backward().unwrap());
    assert_eq!(child.backward().unwrap(), expected);
}

#[test]
fn test_chained_sum_equals_ones_times_parent() {
    let mut rng = StdRng::seed_from_u64(17);

    let mut parent = Affine::<2, 3>::root();
    parent.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let child: Sum<3, _> = Sum::chained(&parent);

    let x: Vector<2> = random_tensor(&mut rng);
    child.forward(&parent.forward(&x));

    let expected = Matrix::<1, 3>::ones().matmul(&parent.backward().unwrap());
    assert_eq!(child.backward().unwrap(), expected);
}

// ============================================================================
// Finite-Difference Checks
// ============================================================================

#[test]
fn test_two_layer_chain_against_finite_differences() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..5 {
        let mut l0 = Affine::<2, 3>::root();
        l0.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
        let l1: Tanh<3, _> = Tanh::chained(&l0);

        let x: Vector<2> = random_tensor(&mut rng);
        l1.forward(&l0.forward(&x));
        let jacobian = l1.backward().unwrap();

        let f = |x: &Vector<2>| l1.forward(&l0.forward(x));
        assert_jacobian_close(&jacobian, &f, &x, 1e-4);
    }
}

#[test]
fn test_four_layer_chain_against_finite_differences() {
    let mut rng = StdRng::seed_from_u64(29);

    let mut l0 = Affine::<4, 6>::root();
    l0.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let l1: Tanh<6, _> = Tanh::chained(&l0);
    let mut l2: Affine<6, 2, _> = Affine::chained(&l1);
    l2.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let l3: Tanh<2, _> = Tanh::chained(&l2);

    let x: Vector<4> = random_tensor(&mut rng);
    l3.forward(&l2.forward(&l1.forward(&l0.forward(&x))));
    let jacobian = l3.backward().unwrap();

    let f = |x: &Vector<4>| l3.forward(&l2.forward(&l1.forward(&l0.forward(x))));
    assert_jacobian_close(&jacobian, &f, &x, 1e-4);
}

#[test]
fn test_sum_headed_chain_against_finite_differences() {
    let mut rng = StdRng::seed_from_u64(31);

    let mut l0 = Affine::<3, 4>::root();
    l0.set_weights(random_tensor(&mut rng), random_tensor(&mut rng));
    let l1: Tanh<4, _> = Tanh::chained(&l0);
    let l2: Sum<4, _> = Sum::chained(&l1);

    let x: Vector<3> = random_tensor(&mut rng);
    l2.forward(&l1.forward(&l0.forward(&x)));
    let gradient = l2.backward().unwrap();

    let f = |x: &Vector<3>| l2.forward(&l1.forward(&l0.forward(x)));
    assert_jacobian_close(&gradient, &f, &x, 1e-4);
}

#[test]
fn test_sum_backward_is_ones_for_any_input() {
    let mut rng = StdRng::seed_from_u64(37);
    let layer = Sum::<5>::root();

    for _ in 0..10 {
        let x: Vector<5> = random_tensor(&mut rng);
        layer.forward(&x);
        assert_eq!(layer.backward().unwrap(), Matrix::ones());
    }
}
