use super::NumericArray;
use crate::errors::{ArrayOpError, ArrayOpResult};

/// Flat one-dimensional baseline backed by a plain `Vec<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualArray {
    data: Vec<f64>,
}

impl NumericArray for ManualArray {
    const IMPLEMENTATION: &'static str = "manual";

    fn from_vec(data: Vec<f64>) -> ArrayOpResult<Self> {
        if data.is_empty() {
            return Err(ArrayOpError::EmptyArray);
        }
        Ok(Self { data })
    }

    fn shape(&self) -> Vec<usize> {
        vec![self.data.len()]
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn ndim(&self) -> usize {
        1
    }

    fn get(&self, indices: &[usize]) -> ArrayOpResult<f64> {
        let value = match indices {
            [index] => self.data.get(*index).copied(),
            _ => None,
        };
        value.ok_or_else(|| ArrayOpError::IndexOutOfBounds {
            indices: indices.to_vec(),
            shape: self.shape(),
        })
    }

    fn add(&self, other: &Self) -> ArrayOpResult<Self> {
        if self.data.len() != other.data.len() {
            return Err(ArrayOpError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { data })
    }

    fn add_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x + scalar).collect(),
        }
    }

    fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }
}
