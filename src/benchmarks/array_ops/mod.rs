//! The two array implementations compared by the array operation suites.

pub mod framework;
pub mod manual;

pub use framework::NdArray;
pub use manual::ManualArray;

use crate::errors::ArrayOpResult;

/// The operations an array implementation exposes to the benchmarks.
pub trait NumericArray: Sized {
    /// Label used in benchmark names, e.g. `"manual add"`.
    const IMPLEMENTATION: &'static str;

    /// Builds a one-dimensional array that owns `data`.
    fn from_vec(data: Vec<f64>) -> ArrayOpResult<Self>;

    fn shape(&self) -> Vec<usize>;

    fn size(&self) -> usize;

    fn ndim(&self) -> usize;

    fn dtype(&self) -> &'static str {
        "float64"
    }

    fn get(&self, indices: &[usize]) -> ArrayOpResult<f64>;

    /// Element-wise sum. Shapes must match exactly.
    fn add(&self, other: &Self) -> ArrayOpResult<Self>;

    fn add_scalar(&self, scalar: f64) -> Self;

    /// Elements in logical (row-major) order.
    fn to_vec(&self) -> Vec<f64>;
}
