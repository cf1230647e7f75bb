use serde::{Serialize, Deserialize};

/// How `update_weights` turns error terms into parameter changes.
///
/// - `Standard`  — plain SGD: every parameter moves by `rate * δ * input`.
/// - `Resilient` — Rprop: only the sign of `δ * input` is used, and each
///   parameter keeps its own adaptive step size. The learning rate passed to
///   `back_propagate` is not used by this rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackPropagationType {
    #[default]
    Standard,
    Resilient,
}
