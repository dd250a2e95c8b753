use serde::{Deserialize, Serialize};

/// Layer sizes of a two-layer network.
///
/// - `input_size`  — features consumed per example
/// - `hidden_size` — units in the hidden layer
/// - `output_size` — units in the output layer, one per class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
}

impl NetworkSpec {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        NetworkSpec {
            input_size,
            hidden_size,
            output_size,
        }
    }

    /// Width of a dataset row for this network: the features, the class
    /// label and one trailing column.
    pub fn dataset_columns(&self) -> usize {
        self.input_size + 2
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::new(2, 1, 2)
    }
}
