pub mod neuron;
pub mod neuron_layer;

pub use neuron::Neuron;
pub use neuron_layer::NeuronLayer;
