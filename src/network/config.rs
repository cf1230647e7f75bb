use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationKind;
use crate::error::{Error, Result};
use crate::network::options::NetworkOptions;

/// Parameters of one neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronConfig {
    pub bias: f32,
    pub weights: Vec<f32>,
}

/// Parameters of one non-input layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub neurons: Vec<NeuronConfig>,
}

/// A complete snapshot of a network's topology and learned parameters.
///
/// `layers` holds one entry per non-input layer, so
/// `layers.len() == layer_sizes.len() - 1`. Values are kept as `f32`, which
/// makes the in-memory round trip exact; the JSON form is written with
/// shortest round-trip formatting and parsed back bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub layer_sizes: Vec<usize>,
    pub output_activation: ActivationKind,
    #[serde(default)]
    pub options: NetworkOptions,
    pub layers: Vec<LayerConfig>,
}

impl NetworkConfig {
    /// Checks that the record describes a buildable network.
    pub fn validate(&self) -> Result<()> {
        validate_layer_sizes(&self.layer_sizes)?;

        let expected_layers = self.layer_sizes.len() - 1;
        if self.layers.len() != expected_layers {
            return Err(Error::dimension("configured layers", expected_layers, self.layers.len()));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            let size = self.layer_sizes[i + 1];
            let input_size = self.layer_sizes[i];
            if layer.neurons.len() != size {
                return Err(Error::dimension(
                    format!("neurons of layer {}", i + 1),
                    size,
                    layer.neurons.len(),
                ));
            }
            for (j, neuron) in layer.neurons.iter().enumerate() {
                if neuron.weights.len() != input_size {
                    return Err(Error::dimension(
                        format!("weights of neuron {} in layer {}", j, i + 1),
                        input_size,
                        neuron.weights.len(),
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a record produced by `to_json`.
    pub fn from_json(json: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// At least an input and an output layer, none of them empty.
pub fn validate_layer_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(Error::InvalidTopology(format!(
            "need at least 2 layer sizes, got {}",
            sizes.len()
        )));
    }
    if let Some(i) = sizes.iter().position(|&s| s == 0) {
        return Err(Error::InvalidTopology(format!("layer {i} has size 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NetworkConfig {
        NetworkConfig {
            layer_sizes: vec![2, 1],
            output_activation: ActivationKind::Linear,
            options: NetworkOptions::default(),
            layers: vec![LayerConfig {
                neurons: vec![NeuronConfig { bias: 0.1, weights: vec![0.2, -0.3] }],
            }],
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_short_or_empty_topologies() {
        assert!(matches!(validate_layer_sizes(&[3]), Err(Error::InvalidTopology(_))));
        assert!(matches!(validate_layer_sizes(&[]), Err(Error::InvalidTopology(_))));
        assert!(matches!(validate_layer_sizes(&[2, 0, 1]), Err(Error::InvalidTopology(_))));
    }

    #[test]
    fn rejects_missing_layer() {
        let mut c = config();
        c.layers.clear();
        assert!(matches!(
            c.validate(),
            Err(Error::DimensionMismatch { expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn rejects_wrong_weight_count() {
        let mut c = config();
        c.layers[0].neurons[0].weights.push(1.0);
        assert!(matches!(
            c.validate(),
            Err(Error::DimensionMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn rejects_wrong_neuron_count() {
        let mut c = config();
        c.layers[0].neurons.push(NeuronConfig { bias: 0.0, weights: vec![0.0, 0.0] });
        assert!(matches!(
            c.validate(),
            Err(Error::DimensionMismatch { expected: 1, actual: 2, .. })
        ));
    }

    #[test]
    fn json_round_trip_is_exact() {
        let mut c = config();
        c.layers[0].neurons[0].bias = 0.1 + f32::EPSILON;
        c.layers[0].neurons[0].weights = vec![std::f32::consts::PI, -1.0e-7];
        let back = NetworkConfig::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(back, c);
        for (a, b) in back.layers[0].neurons[0].weights.iter().zip(&c.layers[0].neurons[0].weights) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn json_without_options_uses_defaults() {
        let json = r#"{
            "layer_sizes": [1, 1],
            "output_activation": "linear",
            "layers": [{ "neurons": [{ "bias": 0.5, "weights": [2.0] }] }]
        }"#;
        let c = NetworkConfig::from_json(json).unwrap();
        assert_eq!(c.options, NetworkOptions::default());
    }

    #[test]
    fn json_missing_field_is_an_error() {
        let json = r#"{ "layer_sizes": [2, 1], "layers": [] }"#;
        assert!(matches!(NetworkConfig::from_json(json), Err(Error::Json(_))));
    }
}
