use rand::Rng;

use crate::error::NnError;

/// Row-major weight storage.
///
/// Row `i` holds the weights feeding output unit `i`, so a layer mapping
/// `input_size -> output_size` stores an `output_size x input_size` matrix.
/// Every row has exactly `cols` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples every entry uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.fill_uniform(rng);
        res
    }

    /// Builds a matrix from explicit rows; ragged input is rejected.
    ///
    /// `cols` is passed separately so an empty row list still has a width.
    pub fn from_rows(data: Vec<Vec<f64>>, cols: usize) -> Result<Matrix, NnError> {
        for (row, values) in data.iter().enumerate() {
            if values.len() != cols {
                return Err(NnError::RaggedMatrix {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn fill_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.data {
            for w in row.iter_mut() {
                *w = rng.gen::<f64>();
            }
        }
    }

    /// `self^T * v`: for each column `j`, `sum_i self[i][j] * v[i]`.
    ///
    /// Used to push output-layer deltas back onto the hidden units.
    pub fn transpose_mul(&self, v: &[f64]) -> Result<Vec<f64>, NnError> {
        NnError::check_len("transposed product", self.rows, v.len())?;
        let mut res = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v) {
            for (acc, w) in res.iter_mut().zip(row) {
                *acc += w * scale;
            }
        }
        Ok(res)
    }
}
