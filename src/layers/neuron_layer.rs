use crate::activation::activation::ActivationKind;
use crate::layers::neuron::Neuron;
use crate::loss::cost_function::CostFunction;
use crate::math::random::{UniformSource, WeightInit};
use crate::optim::back_propagation::BackPropagationType;

/// An ordered group of neurons sharing one activation kind.
///
/// Layers do not keep pointers to their neighbours; the network hands the
/// previous (or next) layer in by reference for each pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronLayer {
    pub neurons: Vec<Neuron>,
    pub activation: ActivationKind,
    /// When off, biases stay at zero and are never trained.
    pub use_bias: bool,
}

impl NeuronLayer {
    /// Pass-through layer of `size` input neurons.
    pub fn input(size: usize) -> NeuronLayer {
        NeuronLayer {
            neurons: (0..size).map(|_| Neuron::input()).collect(),
            activation: ActivationKind::Linear,
            use_bias: false,
        }
    }

    /// `size` neurons, each connected to all `input_size` neurons of the
    /// previous layer, parameters drawn from `init`.
    pub fn random<S: UniformSource + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationKind,
        use_bias: bool,
        init: WeightInit,
        rng: &mut S,
    ) -> NeuronLayer {
        let neurons = (0..size)
            .map(|_| Neuron::random(input_size, init, &mut *rng))
            .collect();
        let mut layer = NeuronLayer { neurons, activation, use_bias };
        layer.clear_biases();
        layer
    }

    pub fn from_neurons(neurons: Vec<Neuron>, activation: ActivationKind) -> NeuronLayer {
        NeuronLayer { neurons, activation, use_bias: true }
    }

    pub fn without_bias(mut self) -> NeuronLayer {
        self.use_bias = false;
        self.clear_biases();
        self
    }

    fn clear_biases(&mut self) {
        if !self.use_bias {
            for neuron in &mut self.neurons {
                neuron.bias = 0.0;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Last activated value of every neuron, in order.
    pub fn outputs(&self) -> impl Iterator<Item = f32> + '_ {
        self.neurons.iter().map(|n| n.last_output)
    }

    /// Copies raw values into an input layer; no activation is applied.
    pub fn load_input(&mut self, values: &[f32]) {
        for (neuron, &v) in self.neurons.iter_mut().zip(values) {
            neuron.last_weighted_sum = v;
            neuron.last_output = v;
        }
    }

    pub fn feed_from(&mut self, previous: &NeuronLayer) {
        let activation = self.activation;
        for neuron in &mut self.neurons {
            let z = neuron.weighted_sum(previous.outputs());
            neuron.last_weighted_sum = z;
            neuron.last_output = activation.activate(z);
        }
    }

    /// Output-layer error terms against `expected`, as defined by `cost`.
    pub fn compute_output_errors(&mut self, expected: &[f32], cost: CostFunction) {
        let activation = self.activation;
        for (neuron, &target) in self.neurons.iter_mut().zip(expected) {
            neuron.error_term = cost.output_error(activation, target, neuron.last_output);
        }
    }

    /// Hidden-layer error terms, pulled back through the weights of `next`
    /// that connect to each of this layer's neurons.
    pub fn compute_hidden_errors(&mut self, next: &NeuronLayer) {
        let activation = self.activation;
        for (j, neuron) in self.neurons.iter_mut().enumerate() {
            let downstream: f32 = next.neurons.iter()
                .map(|k| k.weights[j] * k.error_term)
                .sum();
            neuron.error_term = activation.derivative(neuron.last_output) * downstream;
        }
    }

    pub fn update_weights(&mut self, previous: &NeuronLayer, rate: f32, rule: BackPropagationType) {
        let use_bias = self.use_bias;
        for neuron in &mut self.neurons {
            match rule {
                BackPropagationType::Standard => neuron.apply_error(rate, previous.outputs(), use_bias),
                BackPropagationType::Resilient => neuron.apply_resilient(previous.outputs(), use_bias),
            }
        }
    }

    pub(crate) fn randomize<S: UniformSource + ?Sized>(&mut self, init: WeightInit, rng: &mut S) {
        for neuron in &mut self.neurons {
            neuron.randomize(init, rng);
        }
        self.clear_biases();
    }
}
