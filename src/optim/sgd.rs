use crate::{error::NnError, math::Vector, network::Network};

/// Plain per-example gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Runs one backpropagation step of `network` towards `expected`.
    pub fn step(&self, network: &mut Network, input: &Vector, expected: &Vector) -> Result<(), NnError> {
        network.backpropagate(input, expected, self.learning_rate)
    }
}
