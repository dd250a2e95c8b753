use log::trace;

use crate::{
    data::dataset::{class_label, Dataset},
    error::NnError,
    math::Vector,
    network::Network,
    optim::Sgd,
};

/// One training pair: the feature vector and its one-hot target.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Vector,
    pub expected: Vector,
}

/// Turns dataset rows into examples for a network of the given shape.
///
/// The leading `input_size` columns are the features and column
/// `input_size` holds the class index. Every row is checked here, so a bad
/// row fails the run before any weight is touched.
pub fn encode_examples(dataset: &Dataset, input_size: usize, output_size: usize) -> Result<Vec<Example>, NnError> {
    let mut input = Vector::zeros(input_size);
    let mut expected = Vector::zeros(output_size);

    dataset
        .rows()
        .iter()
        .map(|row| -> Result<Example, NnError> {
            input.copy_from(row)?;
            expected.one_hot(class_label(row, input_size, output_size)?)?;
            Ok(Example {
                input: input.clone(),
                expected: expected.clone(),
            })
        })
        .collect()
}

/// One pass over `examples` in order, one gradient step per example.
///
/// Returns the summed squared error, each term measured right after its
/// own step.
pub fn train_epoch(network: &mut Network, examples: &[Example], optimizer: &Sgd) -> Result<f64, NnError> {
    let mut error2 = 0.0;

    for (i, example) in examples.iter().enumerate() {
        optimizer.step(network, &example.input, &example.expected)?;
        let loss = network.loss(&example.input, &example.expected)?;
        trace!("example {i}: loss={loss:.6}");
        error2 += loss;
    }

    Ok(error2)
}
