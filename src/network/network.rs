use tracing::{debug, warn};

use crate::activation::activation::ActivationKind;
use crate::error::{Error, Result};
use crate::layers::neuron::Neuron;
use crate::layers::neuron_layer::NeuronLayer;
use crate::loss::cost_function::CostFunction;
use crate::math::random::{UniformSource, WeightInit};
use crate::network::config::{validate_layer_sizes, LayerConfig, NetworkConfig, NeuronConfig};
use crate::network::options::NetworkOptions;
use crate::network::status::NetworkStatus;
use crate::optim::back_propagation::BackPropagationType;

/// A fully-connected feed-forward network trained one sample at a time.
///
/// Layer 0 is a pass-through input layer. Every hidden layer uses
/// [`ActivationKind::HIDDEN`]; the output layer uses the kind chosen at
/// construction. [`NetworkOptions`] fix the initializer, update rule, cost
/// and bias use for the network's lifetime.
///
/// The three buffers are owned separately from the layers and kept in sync
/// by copying: `feed_forward` reads `input_buffer` and writes
/// `output_buffer`, `back_propagate` reads `expected_output_buffer`.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<NeuronLayer>,
    input_buffer: Vec<f32>,
    output_buffer: Vec<f32>,
    expected_output_buffer: Vec<f32>,
    output_activation: ActivationKind,
    options: NetworkOptions,
    status: NetworkStatus,
    learning_rate: Option<f32>,
}

impl NeuralNetwork {
    /// Builds a network with parameters drawn from `rand::thread_rng()`.
    pub fn new(sizes: &[usize], output_activation: ActivationKind) -> Result<NeuralNetwork> {
        NeuralNetwork::with_layer_sizes(sizes, output_activation, &mut rand::thread_rng())
    }

    /// Builds a network with parameters drawn from `rng`.
    ///
    /// `sizes` lists the neuron count of every layer, input first. Fails with
    /// [`Error::InvalidTopology`] for fewer than two layers or an empty one.
    pub fn with_layer_sizes<S: UniformSource + ?Sized>(
        sizes: &[usize],
        output_activation: ActivationKind,
        rng: &mut S,
    ) -> Result<NeuralNetwork> {
        NeuralNetwork::with_initializer(sizes, output_activation, WeightInit::default(), rng)
    }

    pub fn with_initializer<S: UniformSource + ?Sized>(
        sizes: &[usize],
        output_activation: ActivationKind,
        init: WeightInit,
        rng: &mut S,
    ) -> Result<NeuralNetwork> {
        let options = NetworkOptions::default().with_weight_init(init);
        NeuralNetwork::with_options(sizes, output_activation, options, rng)
    }

    pub fn with_options<S: UniformSource + ?Sized>(
        sizes: &[usize],
        output_activation: ActivationKind,
        options: NetworkOptions,
        rng: &mut S,
    ) -> Result<NeuralNetwork> {
        validate_layer_sizes(sizes)?;

        let last = sizes.len() - 1;
        let mut layers = Vec::with_capacity(sizes.len());
        layers.push(NeuronLayer::input(sizes[0]));
        for i in 1..sizes.len() {
            layers.push(NeuronLayer::random(
                sizes[i],
                sizes[i - 1],
                layer_activation(i, last, output_activation),
                options.use_bias,
                options.weight_init,
                rng,
            ));
        }

        debug!(?sizes, ?output_activation, ?options, "Built network");
        Ok(NeuralNetwork::from_layers(layers, output_activation, options))
    }

    /// Rebuilds an independent network from a configuration record.
    pub fn from_configuration(config: &NetworkConfig) -> Result<NeuralNetwork> {
        config.validate()?;

        let sizes = &config.layer_sizes;
        let last = sizes.len() - 1;
        let mut layers = Vec::with_capacity(sizes.len());
        layers.push(NeuronLayer::input(sizes[0]));
        for (i, layer) in config.layers.iter().enumerate() {
            let neurons = layer.neurons.iter()
                .map(|n| Neuron::with_parameters(n.bias, n.weights.clone()))
                .collect();
            let layer = NeuronLayer::from_neurons(
                neurons,
                layer_activation(i + 1, last, config.output_activation),
            );
            layers.push(if config.options.use_bias { layer } else { layer.without_bias() });
        }

        debug!(?sizes, output_activation = ?config.output_activation, options = ?config.options, "Loaded network");
        Ok(NeuralNetwork::from_layers(layers, config.output_activation, config.options))
    }

    fn from_layers(
        layers: Vec<NeuronLayer>,
        output_activation: ActivationKind,
        options: NetworkOptions,
    ) -> NeuralNetwork {
        let input_size = layers[0].len();
        let output_size = layers[layers.len() - 1].len();
        NeuralNetwork {
            layers,
            input_buffer: vec![0.0; input_size],
            output_buffer: vec![0.0; output_size],
            expected_output_buffer: vec![0.0; output_size],
            output_activation,
            options,
            status: NetworkStatus::Ready,
            learning_rate: None,
        }
    }

    /// Snapshot of the topology and every bias and weight.
    pub fn save_configuration(&self) -> NetworkConfig {
        NetworkConfig {
            layer_sizes: self.layer_sizes(),
            output_activation: self.output_activation,
            options: self.options,
            layers: self.layers[1..].iter()
                .map(|layer| LayerConfig {
                    neurons: layer.neurons.iter()
                        .map(|n| NeuronConfig { bias: n.bias, weights: n.weights.clone() })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        self.save_configuration().to_json()
    }

    pub fn from_json(json: &str) -> Result<NeuralNetwork> {
        NeuralNetwork::from_configuration(&NetworkConfig::from_json(json)?)
    }

    /// Re-draws every bias and weight with the network's initializer and
    /// forgets any pending train step, Rprop step sizes included.
    pub fn randomize_weights<S: UniformSource + ?Sized>(&mut self, rng: &mut S) {
        let init = self.options.weight_init;
        for layer in &mut self.layers[1..] {
            layer.randomize(init, rng);
        }
        self.status = NetworkStatus::Ready;
        self.learning_rate = None;
    }

    // -----------------------------------------------------------------------
    // Train step
    // -----------------------------------------------------------------------

    /// Propagates `input_buffer` through every layer into `output_buffer`.
    ///
    /// Only cached per-neuron state and the output buffer change.
    pub fn feed_forward(&mut self) {
        self.layers[0].load_input(&self.input_buffer);
        for i in 1..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(i);
            rest[0].feed_from(&previous[i - 1]);
        }

        let output = &self.layers[self.layers.len() - 1];
        for (slot, y) in self.output_buffer.iter_mut().zip(output.outputs()) {
            *slot = y;
        }
        self.status = NetworkStatus::FedForward;
    }

    /// Computes every neuron's error term against `expected_output_buffer`,
    /// output layer first. Weights are left alone; `rate` is kept for the
    /// following [`update_weights`](Self::update_weights). Resilient
    /// networks ignore it.
    pub fn back_propagate(&mut self, rate: f32) -> Result<()> {
        if !self.status.can_back_propagate() {
            return Err(self.precondition("back_propagate requires a preceding feed_forward"));
        }

        let last = self.layers.len() - 1;
        let cost = self.options.cost_function;
        self.layers[last].compute_output_errors(&self.expected_output_buffer, cost);
        for l in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(l + 1);
            head[l].compute_hidden_errors(&tail[0]);
        }

        self.learning_rate = Some(rate);
        self.status = NetworkStatus::BackPropagated;
        Ok(())
    }

    /// Applies the error terms from the last `back_propagate` to every bias
    /// and weight.
    pub fn update_weights(&mut self) -> Result<()> {
        let rate = match self.learning_rate {
            Some(rate) if self.status.can_update_weights() => rate,
            _ => return Err(self.precondition("update_weights requires a preceding back_propagate")),
        };

        let rule = self.options.back_propagation;
        for i in 1..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(i);
            rest[0].update_weights(&previous[i - 1], rate, rule);
        }

        self.status = NetworkStatus::Updated;
        Ok(())
    }

    fn precondition(&self, message: &str) -> Error {
        warn!(status = ?self.status, "{message}");
        Error::PreconditionViolation(format!("{message} (status: {:?})", self.status))
    }

    // -----------------------------------------------------------------------
    // Buffers
    // -----------------------------------------------------------------------

    /// Copies `input` into the input buffer and runs a forward pass.
    pub fn predict(&mut self, input: &[f32]) -> Result<&[f32]> {
        self.set_input(input)?;
        self.feed_forward();
        Ok(&self.output_buffer)
    }

    pub fn set_input(&mut self, input: &[f32]) -> Result<()> {
        if input.len() != self.input_buffer.len() {
            return Err(Error::dimension("input buffer", self.input_buffer.len(), input.len()));
        }
        self.input_buffer_mut().copy_from_slice(input);
        Ok(())
    }

    pub fn set_expected_output(&mut self, expected: &[f32]) -> Result<()> {
        if expected.len() != self.expected_output_buffer.len() {
            return Err(Error::dimension(
                "expected output buffer",
                self.expected_output_buffer.len(),
                expected.len(),
            ));
        }
        self.expected_output_buffer.copy_from_slice(expected);
        Ok(())
    }

    pub fn input_buffer(&self) -> &[f32] {
        &self.input_buffer
    }

    /// Writable input buffer. Borrowing it invalidates the last forward pass.
    pub fn input_buffer_mut(&mut self) -> &mut [f32] {
        self.status = NetworkStatus::Ready;
        &mut self.input_buffer
    }

    pub fn output_buffer(&self) -> &[f32] {
        &self.output_buffer
    }

    pub fn expected_output_buffer(&self) -> &[f32] {
        &self.expected_output_buffer
    }

    pub fn expected_output_buffer_mut(&mut self) -> &mut [f32] {
        &mut self.expected_output_buffer
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn layers(&self) -> &[NeuronLayer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&NeuronLayer> {
        self.layers.get(index)
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(NeuronLayer::len).collect()
    }

    pub fn input_size(&self) -> usize {
        self.input_buffer.len()
    }

    pub fn output_size(&self) -> usize {
        self.output_buffer.len()
    }

    pub fn output_activation(&self) -> ActivationKind {
        self.output_activation
    }

    pub fn options(&self) -> NetworkOptions {
        self.options
    }

    pub fn back_propagation(&self) -> BackPropagationType {
        self.options.back_propagation
    }

    pub fn cost_function(&self) -> CostFunction {
        self.options.cost_function
    }

    pub fn status(&self) -> NetworkStatus {
        self.status
    }

    /// Rate captured by the last `back_propagate`, if any.
    pub fn learning_rate(&self) -> Option<f32> {
        self.learning_rate
    }
}

fn layer_activation(index: usize, last: usize, output: ActivationKind) -> ActivationKind {
    if index == last { output } else { ActivationKind::HIDDEN }
}
