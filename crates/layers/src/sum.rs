//! Sum-reduction layer: `forward(x) = Σᵢ xᵢ`.
//!
//! The gradient of a sum with respect to each coordinate is 1, so the local
//! Jacobian is a `1 × N` row of ones regardless of the forwarded values.
//! Chaining a sum onto a network therefore turns the network's Jacobian
//! into a gradient row.

use std::cell::Cell;
use std::fmt;

use crate::chain::{Backward, Forward, Jacobian, Matrix, Root, Vector};
use crate::error::ChainError;

/// Reduction layer summing an `N`-vector to a single output.
///
/// The output keeps the `Vector<1>` shape of the shared layer contract;
/// use [`scalar`](chainrule_tensor::Tensor::scalar) on the result to get the
/// plain number.
pub struct Sum<const N: usize, P = Root> {
    forwarded: Cell<bool>,
    parent: P,
}

impl<const N: usize> Sum<N, Root> {
    /// Create a sum layer at the head of a chain.
    pub fn root() -> Self {
        Self {
            forwarded: Cell::new(false),
            parent: Root,
        }
    }
}

impl<'p, const N: usize, P> Sum<N, &'p P> {
    /// Create a sum layer chained onto `parent`.
    pub fn chained(parent: &'p P) -> Self {
        Self {
            forwarded: Cell::new(false),
            parent,
        }
    }
}

impl<const N: usize, P> Sum<N, P> {
    fn ensure_forwarded(&self) -> Result<(), ChainError> {
        if self.forwarded.get() {
            Ok(())
        } else {
            Err(ChainError::NotForwarded { layer: "sum" })
        }
    }
}

impl<const N: usize, P> Forward<N, 1> for Sum<N, P> {
    fn forward(&self, x: &Vector<N>) -> Vector<1> {
        self.forwarded.set(true);
        Vector::from_data([[x.sum()]])
    }
}

// Root position: a row of ones.
impl<const N: usize> Backward<1, N> for Sum<N, Root> {
    fn backward(&self) -> Result<Jacobian<1, N>, ChainError> {
        self.ensure_forwarded()?;
        Ok(Matrix::ones())
    }
}

// Chained position: ones(1×N) · parent Jacobian, i.e. the column sums of the
// parent's Jacobian.
impl<'p, const N: usize, const ROOT: usize, P> Backward<1, ROOT> for Sum<N, &'p P>
where
    P: Backward<N, ROOT>,
{
    fn backward(&self) -> Result<Jacobian<1, ROOT>, ChainError> {
        self.ensure_forwarded()?;
        Ok(Matrix::<1, N>::ones().matmul(&self.parent.backward()?))
    }
}

impl<const N: usize, P> fmt::Debug for Sum<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sum<{}>", N)
    }
}
