pub mod backprop;
pub mod network;
pub mod spec;

pub use backprop::Deltas;
pub use network::Network;
pub use spec::NetworkSpec;
