use log::debug;
use rand::Rng;

use crate::{
    error::NnError,
    layers::Layer,
    loss::SquaredErrorLoss,
    math::Vector,
    network::spec::NetworkSpec,
};

/// One hidden layer feeding one output layer.
///
/// `hidden.output_size() == output.input_size()` holds for the lifetime of
/// the network; no other topology exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub(super) hidden: Layer,
    pub(super) output: Layer,
}

impl Network {
    /// Builds a zero-initialized `input -> hidden -> output` network.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Network {
        debug!("creating network {input_size} -> {hidden_size} -> {output_size}");
        Network {
            hidden: Layer::new(input_size, hidden_size),
            output: Layer::new(hidden_size, output_size),
        }
    }

    pub fn from_spec(spec: &NetworkSpec) -> Network {
        Network::new(spec.input_size, spec.hidden_size, spec.output_size)
    }

    /// Wires two existing layers together, rejecting a size disagreement
    /// at the junction.
    pub fn from_layers(hidden: Layer, output: Layer) -> Result<Network, NnError> {
        NnError::check_len("layer junction", hidden.output_size(), output.input_size())?;
        Ok(Network { hidden, output })
    }

    pub fn hidden(&self) -> &Layer {
        &self.hidden
    }

    pub fn output(&self) -> &Layer {
        &self.output
    }

    pub fn input_size(&self) -> usize {
        self.hidden.input_size()
    }

    pub fn output_size(&self) -> usize {
        self.output.output_size()
    }

    /// Randomizes the weights of both layers from `rng`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.hidden.initialize(rng);
        self.output.initialize(rng);
    }

    /// Forward pass into a caller-owned buffer. The hidden activations live
    /// only for the duration of the call.
    pub fn forward_into(&self, input: &Vector, output: &mut Vector) -> Result<(), NnError> {
        let hidden_out = self.hidden.forward(input)?;
        self.output.forward_into(&hidden_out, output)
    }

    pub fn forward(&self, input: &Vector) -> Result<Vector, NnError> {
        let mut output = Vector::zeros(self.output_size());
        self.forward_into(input, &mut output)?;
        Ok(output)
    }

    /// Sum of squared errors between `forward(input)` and `expected`.
    pub fn loss(&self, input: &Vector, expected: &Vector) -> Result<f64, NnError> {
        NnError::check_len("network target", self.output_size(), expected.len())?;
        let output = self.forward(input)?;
        SquaredErrorLoss::loss(&output, expected)
    }
}
