use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of passes over the training data
/// - `learning_rate` — rate handed to every `back_propagate` call
/// - `shuffle`       — visit samples in a fresh random order each epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f32,
    #[serde(default)]
    pub shuffle: bool,
}

impl TrainConfig {
    /// Creates a `TrainConfig` that visits samples in their given order.
    pub fn new(epochs: usize, learning_rate: f32) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            shuffle: false,
        }
    }

    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }
}
