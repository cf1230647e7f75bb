use serde::{Serialize, Deserialize};

use crate::loss::cost_function::CostFunction;
use crate::math::random::WeightInit;
use crate::optim::back_propagation::BackPropagationType;

/// Training choices fixed when a network is built and kept in its
/// configuration record.
///
/// Records written without an `options` table load with the defaults:
/// uniform init, standard backprop, squared error, biases on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOptions {
    pub weight_init: WeightInit,
    pub back_propagation: BackPropagationType,
    pub cost_function: CostFunction,
    pub use_bias: bool,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        NetworkOptions {
            weight_init: WeightInit::default(),
            back_propagation: BackPropagationType::default(),
            cost_function: CostFunction::default(),
            use_bias: true,
        }
    }
}

impl NetworkOptions {
    pub fn with_weight_init(mut self, init: WeightInit) -> Self {
        self.weight_init = init;
        self
    }

    pub fn with_back_propagation(mut self, kind: BackPropagationType) -> Self {
        self.back_propagation = kind;
        self
    }

    pub fn with_cost_function(mut self, cost: CostFunction) -> Self {
        self.cost_function = cost;
        self
    }

    pub fn without_bias(mut self) -> Self {
        self.use_bias = false;
        self
    }
}
