//! A four-layer network and its exact input Jacobian.
//!
//! Run with: cargo run -p chainrule-layers --example network
//!
//! Assembles the chain
//!
//!   affine 4 → 64, tanh, affine 64 → 2, tanh
//!
//! on the stack (parents first, so every borrow outlives its child), streams
//! one forward pass through it, then asks the tail for the full 2×4 Jacobian
//! of the output with respect to the input.

use chainrule_layers::{Affine, Backward, Forward, Matrix, Tanh, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const IN: usize = 4;
const HIDDEN: usize = 64;
const OUT: usize = 2;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    // Layer 0: affine 4 → 64 at the root of the chain.
    let mut l0 = Affine::<IN, HIDDEN>::root();
    l0.set_weights(
        Matrix::from_fn(|_, _| rng.gen_range(-0.5..0.5)),
        Vector::zeros(),
    );

    // Layer 1: elementwise tanh over the hidden width.
    let l1: Tanh<HIDDEN, _> = Tanh::chained(&l0);

    // Layer 2: affine 64 → 2.
    let mut l2: Affine<HIDDEN, OUT, _> = Affine::chained(&l1);
    l2.set_weights(
        Matrix::from_fn(|_, _| rng.gen_range(-0.5..0.5)),
        Vector::zeros(),
    );

    // Layer 3: tanh over the output width — the tail of the chain.
    let l3: Tanh<OUT, _> = Tanh::chained(&l2);

    let x = Vector::from_data([[1.0], [-0.5], [0.25], [2.0]]);
    println!("input x = {:?}", x);
    println!();

    // Forward must stream root → tail before backward is asked at the tail.
    let y = l3.forward(&l2.forward(&l1.forward(&l0.forward(&x))));
    println!("forward output y = {:?}", y);
    println!();

    // One call at the tail; delegation walks the chain back to the root.
    let jacobian = l3.backward().expect("chain was forwarded");
    println!("Jacobian dy/dx ({}×{}):", OUT, IN);
    for i in 0..OUT {
        let row: Vec<f64> = (0..IN).map(|j| jacobian.get(i, j)).collect();
        println!("  {:?}", row);
    }
}
