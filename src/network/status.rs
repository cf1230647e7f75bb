/// Where a network stands inside the three-call train step
/// (`feed_forward` → `back_propagate` → `update_weights`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    /// Freshly built, re-randomized, or the input buffer was written since
    /// the last forward pass.
    #[default]
    Ready,
    /// Outputs reflect the current input and weights.
    FedForward,
    /// Error terms are computed and a learning rate is captured.
    BackPropagated,
    /// Weights changed; cached outputs are stale.
    Updated,
}

impl NetworkStatus {
    pub fn can_back_propagate(self) -> bool {
        matches!(self, NetworkStatus::FedForward | NetworkStatus::BackPropagated)
    }

    pub fn can_update_weights(self) -> bool {
        self == NetworkStatus::BackPropagated
    }
}
