//! # Error Types
//!
//! All dimensional misuse in a chain is a compile error: a layer whose
//! output width does not match the next layer's input width cannot be
//! assembled at all. What remains at runtime is misuse of the temporal
//! contract — asking a layer for its Jacobian before it has seen a forward
//! pass, when nonlinear layers have no cached input to differentiate at.

use thiserror::Error;

/// Runtime errors for chain evaluation.
///
/// These represent contract violations by the caller, reported immediately
/// and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// `backward` was invoked on a layer still in its uninitialized state.
    /// The derivative of a nonlinear layer depends on cached forward state,
    /// so there is no meaningful value to return.
    #[error("backward called on {layer} layer before any forward pass")]
    NotForwarded { layer: &'static str },
}
