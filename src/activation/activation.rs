use serde::{Serialize, Deserialize};

/// Activation applied by every neuron of a layer.
///
/// Derivatives are expressed in terms of the *activated* value `y`, which is
/// what each neuron caches as its last output, so backpropagation never has
/// to revisit the raw weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    Step,
    Linear,
    Logistic,
    Tanh,
    ReLU,
}

/// An `(activate, derivative)` pair.
#[derive(Clone, Copy)]
pub struct ActivationFns {
    pub activate: fn(f32) -> f32,
    pub derivative: fn(f32) -> f32,
}

// Indexed by `ActivationKind as usize`; keep in declaration order.
static ACTIVATION_TABLE: [ActivationFns; 5] = [
    ActivationFns { activate: step, derivative: unit },
    ActivationFns { activate: linear, derivative: unit },
    ActivationFns { activate: logistic, derivative: logistic_derivative },
    ActivationFns { activate: tanh, derivative: tanh_derivative },
    ActivationFns { activate: relu, derivative: relu_derivative },
];

impl ActivationKind {
    /// Kind used by every hidden layer.
    pub const HIDDEN: ActivationKind = ActivationKind::Logistic;

    pub const ALL: [ActivationKind; 5] = [
        ActivationKind::Step,
        ActivationKind::Linear,
        ActivationKind::Logistic,
        ActivationKind::Tanh,
        ActivationKind::ReLU,
    ];

    #[inline]
    pub fn functions(self) -> &'static ActivationFns {
        &ACTIVATION_TABLE[self as usize]
    }

    #[inline]
    pub fn activate(self, x: f32) -> f32 {
        (self.functions().activate)(x)
    }

    /// Derivative at the point whose activated value is `y`.
    #[inline]
    pub fn derivative(self, y: f32) -> f32 {
        (self.functions().derivative)(y)
    }
}

fn step(x: f32) -> f32 {
    if x >= 0.0 { 1.0 } else { 0.0 }
}

fn linear(x: f32) -> f32 {
    x
}

// Step is treated as the identity for gradient purposes (perceptron rule).
fn unit(_y: f32) -> f32 {
    1.0
}

fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

fn logistic_derivative(y: f32) -> f32 {
    y * (1.0 - y)
}

fn tanh(x: f32) -> f32 {
    x.tanh()
}

fn tanh_derivative(y: f32) -> f32 {
    1.0 - y * y
}

fn relu(x: f32) -> f32 {
    if x > 0.0 { x } else { 0.0 }
}

fn relu_derivative(y: f32) -> f32 {
    if y > 0.0 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn step_fires_at_zero() {
        assert_eq!(ActivationKind::Step.activate(0.0), 1.0);
        assert_eq!(ActivationKind::Step.activate(-1e-6), 0.0);
        assert_eq!(ActivationKind::Step.activate(3.0), 1.0);
        assert_eq!(ActivationKind::Step.derivative(0.0), 1.0);
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(ActivationKind::Linear.activate(-2.5), -2.5);
        assert_eq!(ActivationKind::Linear.derivative(42.0), 1.0);
    }

    #[test]
    fn logistic_derivative_uses_activated_value() {
        let y = ActivationKind::Logistic.activate(0.0);
        assert_abs_diff_eq!(y, 0.5);
        assert_abs_diff_eq!(ActivationKind::Logistic.derivative(y), 0.25);

        let x = 1.3_f32;
        let y = ActivationKind::Logistic.activate(x);
        let h = 1e-3_f32;
        let numeric = (ActivationKind::Logistic.activate(x + h)
            - ActivationKind::Logistic.activate(x - h)) / (2.0 * h);
        assert_abs_diff_eq!(ActivationKind::Logistic.derivative(y), numeric, epsilon = 1e-3);
    }

    #[test]
    fn tanh_and_relu() {
        let y = ActivationKind::Tanh.activate(0.5);
        assert_abs_diff_eq!(ActivationKind::Tanh.derivative(y), 1.0 - 0.5_f32.tanh().powi(2));
        assert_eq!(ActivationKind::ReLU.activate(-1.0), 0.0);
        assert_eq!(ActivationKind::ReLU.derivative(0.0), 0.0);
        assert_eq!(ActivationKind::ReLU.derivative(2.0), 1.0);
    }

    #[test]
    fn table_matches_declaration_order() {
        assert_eq!(ActivationKind::ALL.len(), ACTIVATION_TABLE.len());
        assert_eq!(ActivationKind::Linear.activate(7.0), 7.0);
        assert_eq!(ActivationKind::Step.activate(7.0), 1.0);
        assert_eq!(ActivationKind::ReLU.activate(7.0), 7.0);
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&ActivationKind::Logistic).unwrap();
        assert_eq!(json, "\"logistic\"");
        let kind: ActivationKind = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(kind, ActivationKind::ReLU);
    }
}
