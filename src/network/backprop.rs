use log::trace;

use crate::{
    activation::sigmoid_derivative,
    error::NnError,
    loss::SquaredErrorLoss,
    math::Vector,
    network::network::Network,
};

/// Everything one training step needs after the backward pass: the cached
/// forward activations and the per-unit deltas of both layers.
///
/// Produced by [`Network::compute_deltas`] from the current (pre-update)
/// weights and consumed by [`Network::apply_deltas`].
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    pub hidden_output: Vector,
    pub output: Vector,
    pub output_deltas: Vector,
    pub hidden_deltas: Vector,
}

impl Network {
    /// Forward pass with cached activations followed by the backward pass.
    /// Does not modify the network.
    ///
    /// ```text
    /// delta_out[k]    = (output[k] - expected[k]) * output[k] * (1 - output[k])
    /// delta_hidden[h] = (sum_k W_out[k][h] * delta_out[k]) * hidden[h] * (1 - hidden[h])
    /// ```
    pub fn compute_deltas(&self, input: &Vector, expected: &Vector) -> Result<Deltas, NnError> {
        NnError::check_len("network input", self.input_size(), input.len())?;
        NnError::check_len("network target", self.output_size(), expected.len())?;

        let hidden_output = self.hidden.forward(input)?;
        let output = self.output.forward(&hidden_output)?;

        let error = SquaredErrorLoss::error(&output, expected)?;
        let output_deltas: Vector = error
            .iter()
            .zip(output.iter())
            .map(|(e, &y)| e * sigmoid_derivative(y))
            .collect::<Vec<_>>()
            .into();

        let hidden_error = self.output.weights().transpose_mul(output_deltas.as_slice())?;
        let hidden_deltas: Vector = hidden_error
            .iter()
            .zip(hidden_output.iter())
            .map(|(e, &y)| e * sigmoid_derivative(y))
            .collect::<Vec<_>>()
            .into();

        Ok(Deltas {
            hidden_output,
            output,
            output_deltas,
            hidden_deltas,
        })
    }

    /// Applies the gradient-descent update to both layers.
    ///
    /// Every shape is checked before either layer is written, so a bad
    /// `Deltas` leaves the network unchanged.
    pub fn apply_deltas(&mut self, input: &Vector, deltas: &Deltas, learning_rate: f64) -> Result<(), NnError> {
        NnError::check_len("network input", self.input_size(), input.len())?;
        NnError::check_len("hidden deltas", self.hidden.output_size(), deltas.hidden_deltas.len())?;
        NnError::check_len("hidden activations", self.output.input_size(), deltas.hidden_output.len())?;
        NnError::check_len("output deltas", self.output.output_size(), deltas.output_deltas.len())?;

        self.output.update(&deltas.hidden_output, &deltas.output_deltas, learning_rate)?;
        self.hidden.update(input, &deltas.hidden_deltas, learning_rate)?;
        Ok(())
    }

    /// One training step on a single example.
    ///
    /// All deltas are derived from the current weights before either layer
    /// is updated.
    pub fn backpropagate(&mut self, input: &Vector, expected: &Vector, learning_rate: f64) -> Result<(), NnError> {
        let deltas = self.compute_deltas(input, expected)?;
        trace!(
            "backprop: output={} output_deltas={} hidden_deltas={}",
            deltas.output,
            deltas.output_deltas,
            deltas.hidden_deltas
        );
        self.apply_deltas(input, &deltas, learning_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        activation::sigmoid,
        layers::Layer,
        math::Matrix,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_network() -> Network {
        let hidden = Layer::from_parts(
            Matrix::from_rows(vec![vec![0.2, 0.4], vec![-0.3, 0.1]], 2).unwrap(),
            Vector::from_vec(vec![0.0, 0.1]),
        )
        .unwrap();
        let output = Layer::from_parts(
            Matrix::from_rows(vec![vec![0.5, -0.6], vec![0.7, 0.8]], 2).unwrap(),
            Vector::from_vec(vec![0.05, -0.05]),
        )
        .unwrap();
        Network::from_layers(hidden, output).unwrap()
    }

    #[test]
    fn deltas_match_hand_derivation() {
        let network = fixed_network();
        let input = Vector::from_vec(vec![1.0, 0.5]);
        let expected = Vector::from_vec(vec![1.0, 0.0]);
        let d = network.compute_deltas(&input, &expected).unwrap();

        let h0 = sigmoid(0.2 + 0.2);
        let h1 = sigmoid(0.1 - 0.3 + 0.05);
        let o0 = sigmoid(0.05 + 0.5 * h0 - 0.6 * h1);
        let o1 = sigmoid(-0.05 + 0.7 * h0 + 0.8 * h1);
        let do0 = (o0 - 1.0) * o0 * (1.0 - o0);
        let do1 = o1 * o1 * (1.0 - o1);
        let dh0 = (0.5 * do0 + 0.7 * do1) * h0 * (1.0 - h0);
        let dh1 = (-0.6 * do0 + 0.8 * do1) * h1 * (1.0 - h1);

        let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
        assert!(close(d.hidden_output[0], h0) && close(d.hidden_output[1], h1));
        assert!(close(d.output[0], o0) && close(d.output[1], o1));
        assert!(close(d.output_deltas[0], do0) && close(d.output_deltas[1], do1));
        assert!(close(d.hidden_deltas[0], dh0) && close(d.hidden_deltas[1], dh1));
    }

    #[test]
    fn hidden_deltas_use_pre_update_output_weights() {
        let mut network = fixed_network();
        let input = Vector::from_vec(vec![1.0, 0.5]);
        let expected = Vector::from_vec(vec![1.0, 0.0]);
        let deltas = network.compute_deltas(&input, &expected).unwrap();

        let mut stepped = network.clone();
        stepped.backpropagate(&input, &expected, 0.5).unwrap();
        network.apply_deltas(&input, &deltas, 0.5).unwrap();
        assert_eq!(stepped, network);
    }

    #[test]
    fn step_applies_update_rule_to_both_layers() {
        let network = fixed_network();
        let input = Vector::from_vec(vec![1.0, 0.5]);
        let expected = Vector::from_vec(vec![0.0, 1.0]);
        let d = network.compute_deltas(&input, &expected).unwrap();
        let lr = 0.3;

        let mut stepped = network.clone();
        stepped.backpropagate(&input, &expected, lr).unwrap();

        for k in 0..2 {
            for h in 0..2 {
                let want = network.output().weights().get(k, h) - lr * d.output_deltas[k] * d.hidden_output[h];
                assert!((stepped.output().weights().get(k, h) - want).abs() < 1e-12);
            }
            let want = network.output().biases()[k] - lr * d.output_deltas[k];
            assert!((stepped.output().biases()[k] - want).abs() < 1e-12);
        }
        for h in 0..2 {
            for j in 0..2 {
                let want = network.hidden().weights().get(h, j) - lr * d.hidden_deltas[h] * input[j];
                assert!((stepped.hidden().weights().get(h, j) - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn repeated_steps_reduce_loss_on_one_example() {
        let mut network = Network::new(2, 2, 2);
        network.initialize(&mut ChaCha8Rng::seed_from_u64(3));
        let input = Vector::from_vec(vec![1.0, 1.0]);
        let expected = Vector::from_vec(vec![0.0, 1.0]);
        let before = network.loss(&input, &expected).unwrap();
        for _ in 0..50 {
            network.backpropagate(&input, &expected, 0.5).unwrap();
        }
        assert!(network.loss(&input, &expected).unwrap() < before);
    }

    #[test]
    fn shape_errors_leave_parameters_untouched() {
        let mut network = fixed_network();
        let snapshot = network.clone();
        assert!(network
            .backpropagate(&Vector::zeros(3), &Vector::zeros(2), 0.5)
            .is_err());
        assert!(network
            .backpropagate(&Vector::zeros(2), &Vector::zeros(1), 0.5)
            .is_err());

        let mut deltas = network
            .compute_deltas(&Vector::zeros(2), &Vector::zeros(2))
            .unwrap();
        deltas.hidden_deltas = Vector::zeros(5);
        assert!(network.apply_deltas(&Vector::zeros(2), &deltas, 0.5).is_err());
        assert_eq!(network, snapshot);
    }
}
