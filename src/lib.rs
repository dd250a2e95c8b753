pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use config::RunConfig;
pub use data::Dataset;
pub use error::{DatasetError, NnError};
pub use layers::Layer;
pub use loss::SquaredErrorLoss;
pub use math::{Matrix, Vector};
pub use network::{Deltas, Network, NetworkSpec};
pub use optim::Sgd;
pub use train::{encode_examples, train_epoch, train_loop, EpochStats, Example, TrainConfig};
