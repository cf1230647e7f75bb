//! A small fully-connected feed-forward network trained by per-sample
//! backpropagation, with an exact save/load configuration record.
//!
//! ```
//! use ferrite_mlp::{ActivationKind, NeuralNetwork};
//!
//! let mut net = NeuralNetwork::new(&[2, 3, 1], ActivationKind::Linear).unwrap();
//! net.input_buffer_mut().copy_from_slice(&[0.5, 0.25]);
//! net.feed_forward();
//! net.expected_output_buffer_mut()[0] = 1.0;
//! net.back_propagate(0.1).unwrap();
//! net.update_weights().unwrap();
//!
//! let copy = NeuralNetwork::from_configuration(&net.save_configuration()).unwrap();
//! assert_eq!(copy.layer_sizes(), vec![2, 3, 1]);
//! ```

pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::random::{UniformSource, WeightInit};
pub use activation::activation::ActivationKind;
pub use layers::{Neuron, NeuronLayer};
pub use network::{LayerConfig, NetworkConfig, NetworkOptions, NetworkStatus, NeuralNetwork, NeuronConfig};
pub use loss::{BceLoss, CostFunction, MseLoss};
pub use optim::BackPropagationType;
pub use train::{evaluate, train_loop, train_network, train_sample, EpochStats, TrainConfig};
