//! Affine layer: `forward(x) = W·x + b`.
//!
//! The Jacobian of an affine map with respect to its input is the weight
//! matrix itself, independent of `x`, so this layer never caches its input —
//! only the forwarded/uninitialized flag.

use std::cell::Cell;
use std::fmt;

use crate::chain::{Backward, Forward, Jacobian, Matrix, Root, Vector};
use crate::error::ChainError;

/// Affine (fully connected) layer with weight matrix and bias.
///
/// # Type Parameters
///
/// - `IN`: Input width (const generic)
/// - `OUT`: Output width (const generic)
/// - `P`: Chain position — [`Root`] for the head of a chain, or a borrowed
///   parent layer for a chained position
///
/// # Example
///
/// ```rust
/// use chainrule_layers::{Affine, Backward, Forward, Matrix, Vector};
///
/// let mut layer = Affine::<2, 1>::root();
/// layer.set_weights(Matrix::from_data([[2.0, 3.0]]), Vector::from_data([[1.0]]));
///
/// let y = layer.forward(&Vector::from_data([[1.0], [1.0]]));
/// assert_eq!(y.get(0, 0), 6.0);
///
/// let jacobian = layer.backward().unwrap();
/// assert_eq!(jacobian, Matrix::from_data([[2.0, 3.0]]));
/// ```
pub struct Affine<const IN: usize, const OUT: usize, P = Root> {
    weights: Matrix<OUT, IN>,
    bias: Vector<OUT>,
    forwarded: Cell<bool>,
    parent: P,
}

impl<const IN: usize, const OUT: usize> Affine<IN, OUT, Root> {
    /// Create an affine layer at the head of a chain.
    ///
    /// Weights and bias start at zero; load real parameters with
    /// [`set_weights`](Self::set_weights).
    pub fn root() -> Self {
        Self {
            weights: Matrix::zeros(),
            bias: Vector::zeros(),
            forwarded: Cell::new(false),
            parent: Root,
        }
    }
}

impl<'p, const IN: usize, const OUT: usize, P> Affine<IN, OUT, &'p P> {
    /// Create an affine layer chained onto `parent`.
    ///
    /// The borrow is non-owning: the parent must outlive this layer, which
    /// the borrow checker enforces.
    pub fn chained(parent: &'p P) -> Self {
        Self {
            weights: Matrix::zeros(),
            bias: Vector::zeros(),
            forwarded: Cell::new(false),
            parent,
        }
    }
}

impl<const IN: usize, const OUT: usize, P> Affine<IN, OUT, P> {
    /// Replace weights and bias together.
    ///
    /// Both parameters are updated in one call; no gradient accumulation or
    /// parameter history is kept. Weights are laid out `OUT × IN`, so a
    /// row-vector convention (`x·W + b`) needs its matrix transposed before
    /// loading.
    pub fn set_weights(&mut self, weights: Matrix<OUT, IN>, bias: Vector<OUT>) {
        self.weights = weights;
        self.bias = bias;
    }

    /// The current weight matrix.
    pub fn weights(&self) -> &Matrix<OUT, IN> {
        &self.weights
    }

    /// The current bias vector.
    pub fn bias(&self) -> &Vector<OUT> {
        &self.bias
    }

    fn ensure_forwarded(&self) -> Result<(), ChainError> {
        if self.forwarded.get() {
            Ok(())
        } else {
            Err(ChainError::NotForwarded { layer: "affine" })
        }
    }
}

impl<const IN: usize, const OUT: usize, P> Forward<IN, OUT> for Affine<IN, OUT, P> {
    fn forward(&self, x: &Vector<IN>) -> Vector<OUT> {
        self.forwarded.set(true);
        self.weights.matmul(x).add(&self.bias)
    }
}

// Root position: the local derivative of W·x + b is W itself.
impl<const IN: usize, const OUT: usize> Backward<OUT, IN> for Affine<IN, OUT, Root> {
    fn backward(&self) -> Result<Jacobian<OUT, IN>, ChainError> {
        self.ensure_forwarded()?;
        Ok(self.weights.clone())
    }
}

// Chained position: left-multiply W into the parent's accumulated Jacobian.
impl<'p, const IN: usize, const OUT: usize, const ROOT: usize, P> Backward<OUT, ROOT>
    for Affine<IN, OUT, &'p P>
where
    P: Backward<IN, ROOT>,
{
    fn backward(&self) -> Result<Jacobian<OUT, ROOT>, ChainError> {
        self.ensure_forwarded()?;
        Ok(self.weights.matmul(&self.parent.backward()?))
    }
}

impl<const IN: usize, const OUT: usize, P> fmt::Debug for Affine<IN, OUT, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Affine<{}, {}>", IN, OUT)
    }
}
