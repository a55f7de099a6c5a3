//! # Lifecycle Tests
//!
//! Every layer instance moves through two states — uninitialized, then
//! forwarded — and `backward` is only meaningful in the second. These tests
//! pin down the error behavior for every layer kind in both chain
//! positions, including error propagation from an unforwarded parent.

use chainrule_layers::{Affine, Backward, ChainError, Forward, Matrix, Sum, Tanh, Vector};

// ============================================================================
// Backward Before Forward: Root Position
// ============================================================================

#[test]
fn test_fresh_root_affine_rejects_backward() {
    let layer = Affine::<2, 2>::root();
    assert_eq!(
        layer.backward(),
        Err(ChainError::NotForwarded { layer: "affine" })
    );
}

#[test]
fn test_fresh_root_tanh_rejects_backward() {
    let layer = Tanh::<3>::root();
    assert_eq!(
        layer.backward(),
        Err(ChainError::NotForwarded { layer: "tanh" })
    );
}

#[test]
fn test_fresh_root_sum_rejects_backward() {
    let layer = Sum::<4>::root();
    assert_eq!(
        layer.backward(),
        Err(ChainError::NotForwarded { layer: "sum" })
    );
}

// ============================================================================
// Backward Before Forward: Chained Position
// ============================================================================

#[test]
fn test_fresh_chained_layer_rejects_backward() {
    let mut parent = Affine::<2, 2>::root();
    parent.set_weights(Matrix::identity(), Vector::zeros());
    parent.forward(&Vector::zeros());

    // The parent has been forwarded; the child has not.
    let child: Tanh<2, _> = Tanh::chained(&parent);
    assert_eq!(
        child.backward(),
        Err(ChainError::NotForwarded { layer: "tanh" })
    );
}

#[test]
fn test_unforwarded_parent_error_propagates_to_child() {
    let parent = Affine::<2, 2>::root();
    let child: Sum<2, _> = Sum::chained(&parent);

    // Forward only the child; its delegated backward must surface the
    // parent's lifecycle error.
    child.forward(&Vector::zeros());
    assert_eq!(
        child.backward(),
        Err(ChainError::NotForwarded { layer: "affine" })
    );
}

// ============================================================================
// Recovery After Forward
// ============================================================================

#[test]
fn test_forward_unlocks_backward() {
    let layer = Tanh::<2>::root();
    assert!(layer.backward().is_err());

    layer.forward(&Vector::zeros());
    assert_eq!(layer.backward().unwrap(), Matrix::identity());
}

#[test]
fn test_whole_chain_forward_unlocks_tail_backward() {
    let mut l0 = Affine::<2, 2>::root();
    l0.set_weights(Matrix::identity(), Vector::zeros());
    let l1: Tanh<2, _> = Tanh::chained(&l0);
    let l2: Sum<2, _> = Sum::chained(&l1);

    assert!(l2.backward().is_err());

    l2.forward(&l1.forward(&l0.forward(&Vector::zeros())));
    assert_eq!(l2.backward().unwrap(), Matrix::from_data([[1.0, 1.0]]));
}

#[test]
fn test_error_message_names_the_layer() {
    let layer = Tanh::<1>::root();
    let err = layer.backward().unwrap_err();
    assert_eq!(
        err.to_string(),
        "backward called on tanh layer before any forward pass"
    );
}
