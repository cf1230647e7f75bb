use tracing::trace;

use crate::error::{Error, Result};
use crate::network::network::NeuralNetwork;

/// Runs one full train cycle on a single sample: forward pass, error terms,
/// weight update.
///
/// Returns the network's cost of the output computed *before* the update.
pub fn train_sample(
    network: &mut NeuralNetwork,
    input: &[f32],
    expected: &[f32],
    rate: f32,
) -> Result<f32> {
    network.set_input(input)?;
    network.set_expected_output(expected)?;
    network.feed_forward();

    let loss = network.cost_function().loss(network.output_buffer(), expected);

    network.back_propagate(rate)?;
    network.update_weights()?;

    trace!(loss, "Trained sample");
    Ok(loss)
}

/// One pass over `inputs` in order. Returns the mean pre-update loss.
pub fn train_network(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f32>],
    expected_outputs: &[Vec<f32>],
    rate: f32,
) -> Result<f32> {
    check_samples(inputs, expected_outputs)?;

    let mut total_loss = 0.0;
    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        total_loss += train_sample(network, input, expected, rate)?;
    }

    Ok(total_loss / inputs.len() as f32)
}

/// Sample and label counts must agree, and there must be something to train on.
pub(crate) fn check_samples(inputs: &[Vec<f32>], labels: &[Vec<f32>]) -> Result<()> {
    if inputs.len() != labels.len() {
        return Err(Error::dimension("training labels", inputs.len(), labels.len()));
    }
    if inputs.is_empty() {
        return Err(Error::dimension("training samples", 1, 0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn net() -> NeuralNetwork {
        NeuralNetwork::with_layer_sizes(&[2, 3, 1], ActivationKind::Linear, &mut StdRng::seed_from_u64(5))
            .unwrap()
    }

    #[test]
    fn train_sample_reduces_error_on_repeat() {
        let mut net = net();
        let first = train_sample(&mut net, &[0.2, 0.4], &[0.7], 0.1).unwrap();
        let mut last = first;
        for _ in 0..50 {
            last = train_sample(&mut net, &[0.2, 0.4], &[0.7], 0.1).unwrap();
        }
        assert!(last < first, "loss went from {first} to {last}");
    }

    #[test]
    fn train_sample_checks_dimensions() {
        let mut net = net();
        assert!(matches!(
            train_sample(&mut net, &[0.2], &[0.7], 0.1),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            train_sample(&mut net, &[0.2, 0.1], &[0.7, 0.1], 0.1),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn train_network_rejects_mismatched_labels() {
        let mut net = net();
        let inputs = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let labels = vec![vec![1.0]];
        assert!(train_network(&mut net, &inputs, &labels, 0.1).is_err());
        assert!(train_network(&mut net, &[], &[], 0.1).is_err());
    }
}
