use super::NumericArray;
use crate::errors::{ArrayOpError, ArrayOpResult};
use ndarray::{ArrayD, IxDyn};
use std::sync::Arc;

/// `ndarray`-backed implementation.
///
/// The array sits behind an `Arc` so clones share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    array: Arc<ArrayD<f64>>,
}

impl NdArray {
    /// Builds an n-dimensional array from row-major `data`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> ArrayOpResult<Self> {
        if data.is_empty() {
            return Err(ArrayOpError::EmptyArray);
        }
        let len = data.len();
        let array = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|e| {
            ArrayOpError::InvalidShape {
                shape: shape.to_vec(),
                len,
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            array: Arc::new(array),
        })
    }

    pub fn as_array(&self) -> &ArrayD<f64> {
        &self.array
    }
}

impl NumericArray for NdArray {
    const IMPLEMENTATION: &'static str = "ndarray";

    fn from_vec(data: Vec<f64>) -> ArrayOpResult<Self> {
        let len = data.len();
        Self::from_shape_vec(&[len], data)
    }

    fn shape(&self) -> Vec<usize> {
        self.array.shape().to_vec()
    }

    fn size(&self) -> usize {
        self.array.len()
    }

    fn ndim(&self) -> usize {
        self.array.ndim()
    }

    fn get(&self, indices: &[usize]) -> ArrayOpResult<f64> {
        if indices.len() != self.array.ndim() {
            return Err(ArrayOpError::IndexOutOfBounds {
                indices: indices.to_vec(),
                shape: self.shape(),
            });
        }
        self.array
            .get(IxDyn(indices))
            .copied()
            .ok_or_else(|| ArrayOpError::IndexOutOfBounds {
                indices: indices.to_vec(),
                shape: self.shape(),
            })
    }

    fn add(&self, other: &Self) -> ArrayOpResult<Self> {
        if self.array.shape() != other.array.shape() {
            return Err(ArrayOpError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let sum = &*self.array + &*other.array;
        Ok(Self {
            array: Arc::new(sum),
        })
    }

    fn add_scalar(&self, scalar: f64) -> Self {
        Self {
            array: Arc::new(&*self.array + scalar),
        }
    }

    fn to_vec(&self) -> Vec<f64> {
        self.array.iter().copied().collect()
    }
}
