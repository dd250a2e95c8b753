use serde::{Deserialize, Serialize};

use crate::{network::NetworkSpec, train::TrainConfig};

/// Everything one training run needs, stored as JSON.
///
/// ```json
/// {
///   "network": { "input_size": 2, "hidden_size": 1, "output_size": 2 },
///   "train":   { "epochs": 40, "learning_rate": 0.5, "seed": 7, "separator": "," }
/// }
/// ```
///
/// Missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub train: TrainConfig,
}

impl RunConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Rejects sizes, epoch counts and learning rates no run can use.
    pub fn validate(&self) -> Result<(), String> {
        let n = &self.network;
        if n.input_size == 0 || n.hidden_size == 0 || n.output_size == 0 {
            return Err(format!(
                "layer sizes must be positive, got {} -> {} -> {}",
                n.input_size, n.hidden_size, n.output_size
            ));
        }
        if self.train.epochs == 0 {
            return Err("epochs must be at least 1".into());
        }
        let lr = self.train.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(format!("learning_rate must be a positive number, got {lr}"));
        }
        Ok(())
    }
}
