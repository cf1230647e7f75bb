pub mod config;
pub mod network;
pub mod options;
pub mod status;

pub use config::{LayerConfig, NetworkConfig, NeuronConfig};
pub use network::NeuralNetwork;
pub use options::NetworkOptions;
pub use status::NetworkStatus;
