use crate::{error::NnError, math::Vector};

/// Sum of squared errors (not the mean) over one example.
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// `sum_k (predicted[k] - expected[k])^2`
    pub fn loss(predicted: &Vector, expected: &Vector) -> Result<f64, NnError> {
        NnError::check_len("loss target", predicted.len(), expected.len())?;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, e)| (p - e).powi(2))
            .sum())
    }

    /// Per-output error term `predicted - expected` that seeds the output deltas.
    pub fn error(predicted: &Vector, expected: &Vector) -> Result<Vector, NnError> {
        NnError::check_len("loss target", predicted.len(), expected.len())?;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect::<Vec<_>>()
            .into())
    }
}
