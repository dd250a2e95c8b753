use serde::{Deserialize, Serialize};

/// Statistics for one completed epoch, reported by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Sum over all examples of the squared error measured right after that
    /// example's training step.
    pub error2: f64,
    pub elapsed_ms: u64,
}
