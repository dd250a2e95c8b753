use serde::{Deserialize, Serialize};

/// Hyperparameters for a `train_loop` run.
///
/// - `epochs`        — full passes over the training examples
/// - `learning_rate` — gradient-descent step size
/// - `seed`          — seeds weight initialization; `None` draws from entropy
/// - `separator`     — column separator of the dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: Option<u64>,
    pub separator: char,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 40,
            learning_rate: 0.5,
            seed: None,
            separator: ',',
        }
    }
}
