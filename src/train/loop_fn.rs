use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::network::NeuralNetwork;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_samples, train_sample};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs, one sample at a time, and
/// returns the statistics of the **last completed epoch**.
///
/// # Arguments
/// - `network`      — mutable reference to the network; modified in place
/// - `train_inputs` — training samples, each of length `input_size`
/// - `train_labels` — corresponding targets, same length as `train_inputs`
/// - `val_inputs`   — optional validation samples
/// - `val_labels`   — optional validation targets (used iff `val_inputs` is `Some`)
/// - `config`       — epochs, learning rate, shuffling
/// - `rng`          — sample-order source when `config.shuffle` is set
///
/// # Errors
/// `DimensionMismatch` if the sample sets are empty, their lengths disagree,
/// or a sample does not fit the network.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut NeuralNetwork,
    train_inputs: &[Vec<f32>],
    train_labels: &[Vec<f32>],
    val_inputs: Option<&[Vec<f32>]>,
    val_labels: Option<&[Vec<f32>]>,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<EpochStats> {
    check_samples(train_inputs, train_labels)?;

    let mut order: Vec<usize> = (0..train_inputs.len()).collect();
    let mut last = EpochStats {
        epoch: 0,
        total_epochs: config.epochs,
        train_loss: 0.0,
        val_loss: None,
        elapsed_ms: 0,
    };

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if config.shuffle {
            order.shuffle(rng);
        }

        // ── One full pass over the training data ───────────────────────────
        let mut total_loss = 0.0;
        for &idx in &order {
            total_loss += train_sample(
                network,
                &train_inputs[idx],
                &train_labels[idx],
                config.learning_rate,
            )?;
        }
        let train_loss = total_loss / order.len() as f32;

        // ── Validation ────────────────────────────────────────────────────
        let val_loss = match (val_inputs, val_labels) {
            (Some(vi), Some(vl)) => Some(evaluate(network, vi, vl)?),
            _ => None,
        };

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!(epoch, train_loss, ?val_loss, elapsed_ms, "Finished epoch");

        last = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            val_loss,
            elapsed_ms,
        };
    }

    Ok(last)
}

/// Mean loss over a full dataset. Weights and the expected-output buffer
/// are left alone.
pub fn evaluate(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f32>],
    labels: &[Vec<f32>],
) -> Result<f32> {
    check_samples(inputs, labels)?;

    let cost = network.cost_function();
    let output_size = network.output_size();
    let mut total = 0.0;
    for (input, label) in inputs.iter().zip(labels.iter()) {
        if label.len() != output_size {
            return Err(Error::dimension("evaluation label", output_size, label.len()));
        }
        let output = network.predict(input)?;
        total += cost.loss(output, label);
    }
    Ok(total / inputs.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn or_gate() -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];
        (inputs, labels)
    }

    #[test]
    fn loop_reports_last_epoch_and_lowers_loss() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut net = NeuralNetwork::with_layer_sizes(&[2, 1], ActivationKind::Logistic, &mut rng).unwrap();
        let (inputs, labels) = or_gate();

        let before = evaluate(&mut net, &inputs, &labels).unwrap();
        let config = TrainConfig::new(500, 2.0).shuffled();
        let stats = train_loop(&mut net, &inputs, &labels, Some(&inputs), Some(&labels), &config, &mut rng)
            .unwrap();

        assert_eq!(stats.epoch, 500);
        assert_eq!(stats.total_epochs, 500);
        let val_loss = stats.val_loss.unwrap();
        assert!(val_loss < before, "validation loss {val_loss} not below {before}");
        assert!(val_loss < 0.05);
    }

    #[test]
    fn evaluate_leaves_weights_alone() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut net = NeuralNetwork::with_layer_sizes(&[2, 2, 1], ActivationKind::Linear, &mut rng).unwrap();
        let (inputs, labels) = or_gate();
        let before = net.save_configuration();
        evaluate(&mut net, &inputs, &labels).unwrap();
        assert_eq!(net.save_configuration(), before);
    }

    #[test]
    fn evaluate_checks_labels_without_touching_expected_output() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut net = NeuralNetwork::with_layer_sizes(&[2, 1], ActivationKind::Linear, &mut rng).unwrap();
        net.set_expected_output(&[0.25]).unwrap();

        let (inputs, labels) = or_gate();
        evaluate(&mut net, &inputs, &labels).unwrap();
        assert_eq!(net.expected_output_buffer(), &[0.25]);

        let wide = vec![vec![1.0, 0.0]; inputs.len()];
        assert!(matches!(
            evaluate(&mut net, &inputs, &wide),
            Err(Error::DimensionMismatch { expected: 1, actual: 2, .. })
        ));
        assert_eq!(net.expected_output_buffer(), &[0.25]);
    }

    #[test]
    fn zero_epochs_returns_empty_stats() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut net = NeuralNetwork::with_layer_sizes(&[2, 1], ActivationKind::Linear, &mut rng).unwrap();
        let (inputs, labels) = or_gate();
        let stats = train_loop(&mut net, &inputs, &labels, None, None, &TrainConfig::new(0, 0.1), &mut rng)
            .unwrap();
        assert_eq!(stats.epoch, 0);
        assert_eq!(stats.val_loss, None);
    }
}
