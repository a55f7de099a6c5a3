//! # The Layer Contract and the Root/Chained Split
//!
//! A chain is a fixed sequence of layers in which every layer past the first
//! holds a shared borrow of its parent. The first layer is the *root*: it
//! has no upstream link, and its `backward` is simply its own local
//! derivative. Every other layer is *chained*: its `backward` left-multiplies
//! its local derivative into whatever its parent's `backward` returns.
//! Invoking `backward` on the tail therefore recurses up to the root and
//! unwinds as the product
//!
//! ```text
//! J_tail = L_tail · L_{tail-1} · … · L_root
//! ```
//!
//! which is the Jacobian of the tail's output with respect to the root's
//! input — reverse-mode differentiation by delegation.
//!
//! ## Dimensions are types
//!
//! Every layer carries two compile-time widths: its own output width and the
//! input width of its chain's root. The latter is identical for every layer
//! in one chain; it is pinned when a layer is chained onto its parent and
//! can never drift. Chaining a layer onto a parent with the wrong output
//! width is a compile error — there is no runtime shape check anywhere in a
//! chain, because no ill-shaped chain can be assembled.
//!
//! ## Protocol
//!
//! `forward` must be driven through the whole chain, root to tail, before
//! `backward` is invoked at the tail: nonlinear layers differentiate at the
//! input cached by their most recent forward pass. A layer that has never
//! been forwarded reports [`ChainError::NotForwarded`] instead of
//! differentiating garbage.
//!
//! ## Lifetimes
//!
//! Parent links are plain shared borrows, so the borrow checker enforces the
//! assembly discipline: a parent must be constructed before, and outlive,
//! every descendant that references it. One chain instance belongs to one
//! caller at a time; the cached forward state uses interior mutability and
//! is not shareable across threads.

use crate::error::ChainError;

/// A real-valued column vector of fixed width.
pub type Vector<const N: usize> = chainrule_tensor::Vector<f64, N>;

/// A real-valued matrix with fixed dimensions.
pub type Matrix<const R: usize, const C: usize> = chainrule_tensor::Tensor<f64, R, C>;

/// The derivative of a layer's output with respect to its chain's root input.
pub type Jacobian<const OUT: usize, const ROOT: usize> = Matrix<OUT, ROOT>;

/// Marker for a layer at the head of a chain.
///
/// A layer whose parent slot is `Root` has no upstream link; its root width
/// equals its own input width and its `backward` returns the local
/// derivative directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Root;

/// Forward evaluation: a pure function of the input and current parameters,
/// plus caching of whatever state the derivative will need.
///
/// Calling `forward` moves the layer into its forwarded state, making
/// `backward` meaningful. It may be called any number of times; each call
/// overwrites the cached state of the previous one.
pub trait Forward<const IN: usize, const OUT: usize> {
    fn forward(&self, x: &Vector<IN>) -> Vector<OUT>;
}

/// Reverse-mode derivative with respect to the chain's root input.
///
/// For a root layer `ROOT` is the layer's own input width; for a chained
/// layer it is inherited from the parent. `backward` uses the state cached
/// by the most recent [`Forward::forward`] call and fails with
/// [`ChainError::NotForwarded`] if there has been none.
pub trait Backward<const OUT: usize, const ROOT: usize> {
    /// Output width of this layer.
    const OUT_DIM: usize = OUT;

    /// Input width of the chain's root layer.
    const ROOT_DIM: usize = ROOT;

    fn backward(&self) -> Result<Jacobian<OUT, ROOT>, ChainError>;
}
