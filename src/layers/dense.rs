use log::debug;
use rand::Rng;

use crate::{
    activation::sigmoid,
    error::NnError,
    math::{Matrix, Vector},
};

/// A fully connected sigmoid layer: `output = sigmoid(W * input + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    input_size: usize,
    output_size: usize,
    /// `output_size x input_size`; row `i` feeds output unit `i`.
    weights: Matrix,
    biases: Vector,
}

impl Layer {
    /// A layer with every weight and bias set to `0.0`.
    pub fn new(input_size: usize, output_size: usize) -> Layer {
        Layer {
            input_size,
            output_size,
            weights: Matrix::zeros(output_size, input_size),
            biases: Vector::zeros(output_size),
        }
    }

    /// Builds a layer from explicit parameters.
    ///
    /// The bias length fixes `output_size`; the weight matrix must have one
    /// row per output unit.
    pub fn from_parts(weights: Matrix, biases: Vector) -> Result<Layer, NnError> {
        NnError::check_len("layer weight rows", biases.len(), weights.rows())?;
        Ok(Layer {
            input_size: weights.cols(),
            output_size: biases.len(),
            weights,
            biases,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Vector {
        &self.biases
    }

    /// Draws every weight uniformly from `[0, 1)`. Biases are left untouched.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weights.fill_uniform(rng);
        debug!(
            "initialized {}x{} layer weights",
            self.output_size, self.input_size
        );
    }

    /// Pre-activation sum for one output unit: `b[unit] + W[unit] . input`.
    pub fn activation(&self, input: &Vector, unit: usize) -> Result<f64, NnError> {
        NnError::check_len("layer input", self.input_size, input.len())?;
        if unit >= self.output_size {
            return Err(NnError::IndexOutOfRange {
                index: unit,
                len: self.output_size,
            });
        }
        Ok(self.weighted_sum(input, unit))
    }

    /// Writes `sigmoid(activation(input, i))` into `output[i]` for every unit.
    pub fn forward_into(&self, input: &Vector, output: &mut Vector) -> Result<(), NnError> {
        NnError::check_len("layer input", self.input_size, input.len())?;
        NnError::check_len("layer output", self.output_size, output.len())?;
        for (unit, out) in output.as_mut_slice().iter_mut().enumerate() {
            *out = sigmoid(self.weighted_sum(input, unit));
        }
        Ok(())
    }

    /// Allocating variant of [`Layer::forward_into`].
    pub fn forward(&self, input: &Vector) -> Result<Vector, NnError> {
        let mut output = Vector::zeros(self.output_size);
        self.forward_into(input, &mut output)?;
        Ok(output)
    }

    /// Gradient-descent step:
    /// `W[i][j] -= lr * deltas[i] * input[j]`, then `b[i] -= lr * deltas[i]`.
    ///
    /// Both shapes are checked before anything is written.
    pub fn update(&mut self, input: &Vector, deltas: &Vector, learning_rate: f64) -> Result<(), NnError> {
        NnError::check_len("layer update input", self.input_size, input.len())?;
        NnError::check_len("layer update deltas", self.output_size, deltas.len())?;

        for (unit, &delta) in deltas.iter().enumerate() {
            let step = learning_rate * delta;
            for (w, x) in self.weights.row_mut(unit).iter_mut().zip(input.iter()) {
                *w -= step * x;
            }
            self.biases.as_mut_slice()[unit] -= step;
        }
        Ok(())
    }

    fn weighted_sum(&self, input: &Vector, unit: usize) -> f64 {
        self.weights
            .row(unit)
            .iter()
            .zip(input.iter())
            .fold(self.biases[unit], |acc, (w, x)| acc + w * x)
    }
}
