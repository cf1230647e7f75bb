use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationKind;
use crate::loss::bce::BceLoss;
use crate::loss::mse::MseLoss;

/// Cost the output layer's error terms are derived from.
///
/// - `SquaredError` — ½(t − y)²; δ = (t − y)·f'(y).
/// - `CrossEntropy` — binary cross-entropy; pair with a Logistic output,
///   where the derivative cancels and δ = t − y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFunction {
    #[default]
    SquaredError,
    CrossEntropy,
}

impl CostFunction {
    /// Error term of an output neuron whose activated value is `y`.
    #[inline]
    pub fn output_error(self, activation: ActivationKind, target: f32, y: f32) -> f32 {
        match self {
            CostFunction::SquaredError => (target - y) * activation.derivative(y),
            CostFunction::CrossEntropy => target - y,
        }
    }

    /// Scalar cost of one sample, used for progress reporting.
    pub fn loss(self, predicted: &[f32], expected: &[f32]) -> f32 {
        match self {
            CostFunction::SquaredError => MseLoss::loss(predicted, expected),
            CostFunction::CrossEntropy => BceLoss::loss(predicted, expected),
        }
    }
}
