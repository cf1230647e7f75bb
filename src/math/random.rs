use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// Source of uniformly distributed reals.
///
/// Every `rand::Rng` is a `UniformSource`, so a seeded
/// `rand::rngs::StdRng` gives reproducible networks and a `thread_rng()`
/// gives fresh ones.
pub trait UniformSource {
    /// Returns a value uniformly distributed in `[min, max)`.
    fn next_uniform(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.gen::<f64>() * (max - min)
    }
}

/// Distribution used to draw initial weights and biases.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    /// Uniform in `[-1/sqrt(fan_in), 1/sqrt(fan_in))`.
    #[default]
    Uniform,
    /// Xavier (Glorot): samples from N(0, sqrt(1 / fan_in)).
    Gaussian,
}

impl WeightInit {
    /// Draws one parameter for a neuron with `fan_in` incoming connections.
    pub fn sample<S: UniformSource + ?Sized>(self, fan_in: usize, rng: &mut S) -> f32 {
        let scale = 1.0 / (fan_in.max(1) as f64).sqrt();
        let value = match self {
            WeightInit::Uniform => rng.next_uniform(-scale, scale),
            WeightInit::Gaussian => sample_standard_normal(rng) * scale,
        };
        value as f32
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal<S: UniformSource + ?Sized>(rng: &mut S) -> f64 {
    // Map [0, 1) onto (0, 1] to avoid log(0).
    let u1 = 1.0 - rng.next_uniform(0.0, 1.0);
    let u2 = 1.0 - rng.next_uniform(0.0, 1.0);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
