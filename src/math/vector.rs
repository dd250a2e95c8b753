use std::fmt;
use std::ops::Index;

use crate::error::NnError;

/// Fixed-length buffer of `f64` values.
///
/// The length is set at creation and never changes; inputs, outputs,
/// activations and deltas all travel as `Vector`s.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// A vector of `size` zeros.
    pub fn zeros(size: usize) -> Vector {
        Vector { values: vec![0.0; size] }
    }

    /// A zeroed vector with the same length as `like`.
    pub fn like(like: &Vector) -> Vector {
        Vector::zeros(like.len())
    }

    pub fn from_vec(values: Vec<f64>) -> Vector {
        Vector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Overwrites every entry of `self` with the leading entries of `src`.
    ///
    /// `src` may be longer (a dataset row feeding a narrower input vector);
    /// it may not be shorter.
    pub fn copy_from(&mut self, src: &[f64]) -> Result<(), NnError> {
        if src.len() < self.len() {
            return Err(NnError::ShapeMismatch {
                context: "vector copy source",
                expected: self.len(),
                got: src.len(),
            });
        }
        let n = self.len();
        self.values.copy_from_slice(&src[..n]);
        Ok(())
    }

    /// Sets entry `index` to `1.0` and every other entry to `0.0`.
    pub fn one_hot(&mut self, index: usize) -> Result<(), NnError> {
        if index >= self.len() {
            return Err(NnError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.values.iter_mut().for_each(|v| *v = 0.0);
        self.values[index] = 1.0;
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Vector::from_vec(values)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:.6}")?;
        }
        write!(f, "]")
    }
}
