//! # chainrule-tensor — Fixed-Dimension Linear Algebra
//!
//! Dense vectors and matrices whose dimensions are const generics, so that
//! every shape requirement is a property of the type. A matrix product with
//! mismatched inner dimensions, or an addition of differently shaped
//! operands, is a compile error rather than a runtime panic.
//!
//! This crate is the substrate for the layer-composition crate; it knows
//! nothing about layers, derivatives, or chains. It provides exactly the
//! operations a reverse-mode chain needs: products, elementwise maps,
//! diagonal construction, and summation.
//!
//! ## Example
//!
//! ```rust
//! use chainrule_tensor::{Tensor, Vector};
//!
//! let w: Tensor<f64, 2, 3> = Tensor::from_data([[1.0, 0.0, 2.0], [0.0, 1.0, 0.0]]);
//! let x: Vector<f64, 3> = Tensor::from_data([[1.0], [2.0], [3.0]]);
//! let y: Vector<f64, 2> = w.matmul(&x);
//! assert_eq!(y.get(0, 0), 7.0);
//!
//! // A 2-vector on the right would not compile:
//! // let bad: Vector<f64, 2> = Tensor::zeros();
//! // let _ = w.matmul(&bad);
//! ```

pub mod tensor;

pub use tensor::{Tensor, Vector};
