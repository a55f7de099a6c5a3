//! # chainrule-layers — Reverse-Mode Jacobians by Delegation
//!
//! This crate evaluates fixed-topology feed-forward chains of numeric layers
//! and computes the exact Jacobian of the final output with respect to the
//! original input. Composition is the whole design:
//!
//! - Every layer implements the capability contract ([`Forward`] and
//!   [`Backward`]) with its output width and its chain's root input width as
//!   const generics.
//! - Every layer kind exists in two chain positions: *root* (no upstream
//!   layer, `backward` returns the local derivative) and *chained* (holds a
//!   shared borrow of its parent, `backward` returns
//!   `local_derivative · parent.backward()`).
//! - Invoking `backward` at the tail recurses to the root and unwinds as
//!   the tail-to-root matrix product — the chain rule.
//!
//! Dimension compatibility between adjacent layers is checked entirely at
//! compile time; the one runtime error is calling `backward` on a layer that
//! has never been forwarded ([`ChainError::NotForwarded`]).
//!
//! ## Modules
//!
//! - [`chain`]: the capability contract, the [`Root`] marker, and the
//!   vector/matrix/Jacobian aliases
//! - [`affine`]: `W·x + b` (local derivative: `W`)
//! - [`tanh`]: elementwise tanh (local derivative: `diag(1 − tanh(x)²)`)
//! - [`sum`]: reduction to a scalar (local derivative: a row of ones)
//! - [`error`]: the lifecycle error
//!
//! ## Example
//!
//! ```rust
//! use chainrule_layers::{Affine, Backward, Forward, Matrix, Sum, Tanh, Vector};
//!
//! // A chain 2 → 2 → tanh → sum, assembled root first.
//! let mut l0 = Affine::<2, 2>::root();
//! l0.set_weights(Matrix::identity(), Vector::zeros());
//! let l1: Tanh<2, _> = Tanh::chained(&l0);
//! let l2: Sum<2, _> = Sum::chained(&l1);
//!
//! // Forward streams root to tail; backward is invoked at the tail.
//! let x = Vector::from_data([[0.0], [0.0]]);
//! let y = l2.forward(&l1.forward(&l0.forward(&x)));
//! assert_eq!(y.scalar(), 0.0);
//!
//! // d(sum(tanh(I·x)))/dx at 0 is a row of ones.
//! let gradient = l2.backward().unwrap();
//! assert_eq!(gradient, Matrix::from_data([[1.0, 1.0]]));
//! ```

pub mod affine;
pub mod chain;
pub mod error;
pub mod sum;
pub mod tanh;

// Re-export key types at crate root for convenience
pub use affine::Affine;
pub use chain::{Backward, Forward, Jacobian, Matrix, Root, Vector};
pub use error::ChainError;
pub use sum::Sum;
pub use tanh::Tanh;
