//! Elementwise tanh layer.
//!
//! Since `d/dx tanh(x) = 1 − tanh(x)²`, the local Jacobian is the diagonal
//! matrix `diag(1 − tanh(x)²)` evaluated at the pre-activation input of the
//! most recent forward pass, which this layer caches for exactly that
//! purpose. At `x = 0` the diagonal entry is exactly 1.

use std::cell::RefCell;
use std::fmt;

use crate::chain::{Backward, Forward, Jacobian, Matrix, Root, Vector};
use crate::error::ChainError;

/// Elementwise hyperbolic-tangent layer of width `N`.
///
/// The cached input doubles as the lifecycle state: `None` until the first
/// forward pass, overwritten on every subsequent one.
pub struct Tanh<const N: usize, P = Root> {
    cached: RefCell<Option<Vector<N>>>,
    parent: P,
}

impl<const N: usize> Tanh<N, Root> {
    /// Create a tanh layer at the head of a chain.
    pub fn root() -> Self {
        Self {
            cached: RefCell::new(None),
            parent: Root,
        }
    }
}

impl<'p, const N: usize, P> Tanh<N, &'p P> {
    /// Create a tanh layer chained onto `parent`.
    pub fn chained(parent: &'p P) -> Self {
        Self {
            cached: RefCell::new(None),
            parent,
        }
    }
}

impl<const N: usize, P> Tanh<N, P> {
    /// `diag(1 − tanh(x)²)` at the cached input, or the lifecycle error if
    /// no forward pass has happened yet.
    fn local_jacobian(&self) -> Result<Matrix<N, N>, ChainError> {
        let cached = self.cached.borrow();
        let x = cached
            .as_ref()
            .ok_or(ChainError::NotForwarded { layer: "tanh" })?;
        Ok(x.tanh().map(|t| 1.0 - t * t).diag())
    }
}

impl<const N: usize, P> Forward<N, N> for Tanh<N, P> {
    fn forward(&self, x: &Vector<N>) -> Vector<N> {
        self.cached.replace(Some(x.clone()));
        x.tanh()
    }
}

// Root position: the local diagonal is the whole Jacobian.
impl<const N: usize> Backward<N, N> for Tanh<N, Root> {
    fn backward(&self) -> Result<Jacobian<N, N>, ChainError> {
        self.local_jacobian()
    }
}

// Chained position: diag(1 − tanh(x)²) · parent Jacobian.
impl<'p, const N: usize, const ROOT: usize, P> Backward<N, ROOT> for Tanh<N, &'p P>
where
    P: Backward<N, ROOT>,
{
    fn backward(&self) -> Result<Jacobian<N, ROOT>, ChainError> {
        Ok(self.local_jacobian()?.matmul(&self.parent.backward()?))
    }
}

impl<const N: usize, P> fmt::Debug for Tanh<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tanh<{}>", N)
    }
}
