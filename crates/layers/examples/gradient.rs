//! Gradient of a scalar-valued chain.
//!
//! Run with: cargo run -p chainrule-layers --example gradient
//!
//! Chaining a sum layer onto a network collapses its output to a scalar, so
//! the tail's Jacobian is a single row — the gradient. This demo builds
//!
//!   affine 3 → 4, tanh, sum
//!
//! and compares the gradient row against a central finite difference for
//! one input coordinate.

use chainrule_layers::{Affine, Backward, Forward, Matrix, Sum, Tanh, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut l0 = Affine::<3, 4>::root();
    l0.set_weights(
        Matrix::from_fn(|_, _| rng.gen_range(-1.0..1.0)),
        Vector::from_fn(|_, _| rng.gen_range(-1.0..1.0)),
    );
    let l1: Tanh<4, _> = Tanh::chained(&l0);
    let l2: Sum<4, _> = Sum::chained(&l1);

    let run = |x: &Vector<3>| l2.forward(&l1.forward(&l0.forward(x))).scalar();

    let x = Vector::from_data([[0.3], [-1.2], [0.8]]);
    let value = run(&x);
    println!("f(x) = sum(tanh(W·x + b)) = {value:.6}");

    let gradient = l2.backward().expect("chain was forwarded");
    let row: Vec<f64> = (0..3).map(|j| gradient.get(0, j)).collect();
    println!("∇f(x) = {row:?}");
    println!();

    // Sanity: central difference along the first coordinate.
    let h = 1e-5;
    let mut x_plus = x.clone();
    let mut x_minus = x.clone();
    x_plus.set(0, 0, x.get(0, 0) + h);
    x_minus.set(0, 0, x.get(0, 0) - h);
    let numerical = (run(&x_plus) - run(&x_minus)) / (2.0 * h);
    println!("∂f/∂x₀ analytic  = {:.8}", gradient.get(0, 0));
    println!("∂f/∂x₀ numerical = {numerical:.8}");
}
