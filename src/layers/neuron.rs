use crate::math::random::{UniformSource, WeightInit};
use crate::optim::{rprop, sgd};
use crate::optim::rprop::RpropState;

/// A single unit: its parameters plus the state left behind by the most
/// recent forward/backward pass.
///
/// Input-layer neurons have no weights and never apply an activation; they
/// only hold the value copied in from the network's input buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub bias: f32,
    pub weights: Vec<f32>,
    pub last_output: f32,
    pub last_weighted_sum: f32,
    pub error_term: f32,
    /// Adaptive step sizes, allocated on the first resilient update.
    pub rprop: Option<RpropState>,
}

impl Neuron {
    /// A pass-through neuron for the input layer.
    pub fn input() -> Neuron {
        Neuron::with_parameters(0.0, Vec::new())
    }

    /// A neuron with `input_size` weights and a bias drawn from `init`.
    pub fn random<S: UniformSource + ?Sized>(input_size: usize, init: WeightInit, rng: &mut S) -> Neuron {
        let weights = (0..input_size).map(|_| init.sample(input_size, &mut *rng)).collect();
        let bias = init.sample(input_size, rng);
        Neuron::with_parameters(bias, weights)
    }

    pub fn with_parameters(bias: f32, weights: Vec<f32>) -> Neuron {
        Neuron {
            bias,
            weights,
            last_output: 0.0,
            last_weighted_sum: 0.0,
            error_term: 0.0,
            rprop: None,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// `bias + Σ weights[j] * inputs[j]`.
    pub fn weighted_sum<I>(&self, inputs: I) -> f32
    where
        I: IntoIterator<Item = f32>,
    {
        self.weights.iter()
            .zip(inputs)
            .fold(self.bias, |sum, (w, x)| sum + w * x)
    }

    /// Moves bias and weights along the error term, scaled by `rate`.
    /// The bias is left alone when `use_bias` is off.
    pub fn apply_error<I>(&mut self, rate: f32, inputs: I, use_bias: bool)
    where
        I: IntoIterator<Item = f32>,
    {
        let delta = self.error_term;
        if use_bias {
            self.bias += sgd::delta(rate, delta, 1.0);
        }
        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w += sgd::delta(rate, delta, x);
        }
    }

    /// Rprop update: each parameter moves by its own step size in the
    /// direction of `δ * input`.
    pub fn apply_resilient<I>(&mut self, inputs: I, use_bias: bool)
    where
        I: IntoIterator<Item = f32>,
    {
        let delta = self.error_term;
        let input_size = self.weights.len();
        let state = self.rprop.get_or_insert_with(|| RpropState::new(input_size));

        if use_bias {
            self.bias += rprop::delta(&mut state.bias_step, &mut state.bias_gradient, delta);
        }
        let params = self.weights.iter_mut()
            .zip(state.weight_steps.iter_mut())
            .zip(state.weight_gradients.iter_mut());
        for (((w, step), last), x) in params.zip(inputs) {
            *w += rprop::delta(step, last, delta * x);
        }
    }

    pub(crate) fn randomize<S: UniformSource + ?Sized>(&mut self, init: WeightInit, rng: &mut S) {
        let fan_in = self.weights.len();
        for w in self.weights.iter_mut() {
            *w = init.sample(fan_in, rng);
        }
        self.bias = init.sample(fan_in, rng);
        self.rprop = None;
        self.last_output = 0.0;
        self.last_weighted_sum = 0.0;
        self.error_term = 0.0;
    }
}
