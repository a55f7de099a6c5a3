//! Const-generic dense tensors.
//!
//! `Tensor<T, M, N>` stores an M×N coefficient table with both dimensions in
//! the type. Column vectors are `Tensor<T, N, 1>` (aliased as [`Vector`]).
//! Operations that constrain shapes — `matmul`, `add`, `diag` — encode the
//! constraint in their signatures, so an ill-shaped expression fails to
//! typecheck instead of failing at evaluation time.

use std::fmt;

/// A dense tensor with compile-time known dimensions.
///
/// # Type Parameters
///
/// - `T`: Element type (usually `f64`)
/// - `M`: Number of rows (const generic)
/// - `N`: Number of columns (const generic)
#[derive(Clone, PartialEq)]
pub struct Tensor<T, const M: usize, const N: usize> {
    /// Row-major data storage
    data: [[T; N]; M],
}

/// A column vector of fixed width.
pub type Vector<T, const N: usize> = Tensor<T, N, 1>;

impl<T: Default + Copy, const M: usize, const N: usize> Default for Tensor<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Default + Copy, const M: usize, const N: usize> Tensor<T, M, N> {
    /// Create a tensor filled with zeros (default values).
    pub fn zeros() -> Self {
        Self {
            data: [[T::default(); N]; M],
        }
    }

    /// Build a tensor by evaluating `f(row, col)` for every entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainrule_tensor::Tensor;
    ///
    /// let t: Tensor<f64, 2, 2> = Tensor::from_fn(|i, j| (i * 2 + j) as f64);
    /// assert_eq!(t.get(1, 1), 3.0);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut result = Self::zeros();
        for i in 0..M {
            for j in 0..N {
                result.data[i][j] = f(i, j);
            }
        }
        result
    }
}

impl<T: Copy, const M: usize, const N: usize> Tensor<T, M, N> {
    /// Create a tensor from raw row-major data.
    pub fn from_data(data: [[T; N]; M]) -> Self {
        Self { data }
    }

    /// Get the element at position (i, j).
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i][j]
    }

    /// Set the element at position (i, j).
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i][j] = value;
    }

    /// Borrow the raw data.
    pub fn data(&self) -> &[[T; N]; M] {
        &self.data
    }
}

impl<T, const M: usize, const N: usize> Tensor<T, M, N> {
    /// Number of rows (compile-time constant).
    pub const ROWS: usize = M;

    /// Number of columns (compile-time constant).
    pub const COLS: usize = N;

    /// Total number of elements.
    pub const SIZE: usize = M * N;
}

// ============================================================================
// Shape-Checked Operations
// ============================================================================

impl<T, const M: usize, const N: usize> Tensor<T, M, N>
where
    T: Default + Copy + std::ops::Add<Output = T> + std::ops::Mul<Output = T>,
{
    /// Matrix multiplication with compile-time dimension checking.
    ///
    /// Computes `self · other` where `self` is M×N, `other` is N×P and the
    /// result is M×P. The inner dimension must match — enforced by the type
    /// system, so there is no runtime shape check to fail.
    pub fn matmul<const P: usize>(&self, other: &Tensor<T, N, P>) -> Tensor<T, M, P> {
        let mut result = Tensor::zeros();
        for i in 0..M {
            for j in 0..P {
                let mut sum = T::default();
                for k in 0..N {
                    sum = sum + self.data[i][k] * other.data[k][j];
                }
                result.data[i][j] = sum;
            }
        }
        result
    }
}

impl<T, const M: usize, const N: usize> Tensor<T, M, N>
where
    T: Default + Copy + std::ops::Add<Output = T>,
{
    /// Element-wise addition (same shape required by the type system).
    pub fn add(&self, other: &Tensor<T, M, N>) -> Tensor<T, M, N> {
        let mut result = Tensor::zeros();
        for i in 0..M {
            for j in 0..N {
                result.data[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        result
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut total = T::default();
        for row in &self.data {
            for &value in row {
                total = total + value;
            }
        }
        total
    }
}

impl<T: Default + Copy, const M: usize, const N: usize> Tensor<T, M, N> {
    /// Apply a function to every element.
    pub fn map(&self, f: impl Fn(T) -> T) -> Tensor<T, M, N> {
        let mut result = Tensor::zeros();
        for i in 0..M {
            for j in 0..N {
                result.data[i][j] = f(self.data[i][j]);
            }
        }
        result
    }

    /// Transpose: (M × N) → (N × M).
    pub fn transpose(&self) -> Tensor<T, N, M> {
        let mut result = Tensor::zeros();
        for i in 0..M {
            for j in 0..N {
                result.data[j][i] = self.data[i][j];
            }
        }
        result
    }
}

impl<T: Copy> Tensor<T, 1, 1> {
    /// The single element of a 1×1 tensor.
    pub fn scalar(&self) -> T {
        self.data[0][0]
    }
}

// ============================================================================
// f64 Constructors and Transcendentals
// ============================================================================

impl<const M: usize, const N: usize> Tensor<f64, M, N> {
    /// Create a tensor filled with ones.
    pub fn ones() -> Self {
        Self {
            data: [[1.0; N]; M],
        }
    }

    /// Element-wise hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        self.map(f64::tanh)
    }
}

impl<const N: usize> Tensor<f64, N, N> {
    /// The N×N identity matrix.
    pub fn identity() -> Self {
        let mut result = Self::zeros();
        for i in 0..N {
            result.data[i][i] = 1.0;
        }
        result
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Build the N×N diagonal matrix whose diagonal is this vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainrule_tensor::{Tensor, Vector};
    ///
    /// let v: Vector<f64, 2> = Tensor::from_data([[3.0], [4.0]]);
    /// let d = v.diag();
    /// assert_eq!(d.get(0, 0), 3.0);
    /// assert_eq!(d.get(0, 1), 0.0);
    /// assert_eq!(d.get(1, 1), 4.0);
    /// ```
    pub fn diag(&self) -> Tensor<f64, N, N> {
        let mut result = Tensor::zeros();
        for i in 0..N {
            result.data[i][i] = self.data[i][0];
        }
        result
    }
}

// ============================================================================
// Debug
// ============================================================================

impl<T: fmt::Debug, const M: usize, const N: usize> fmt::Debug for Tensor<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor<{}, {}> {:?}", M, N, self.data)
    }
}

// ============================================================================
// Tests
// ============================================================================
