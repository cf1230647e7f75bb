use ferrite_mlp::{train_loop, ActivationKind, NeuralNetwork, TrainConfig, UniformSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::EnvFilter;

/// Learns `s` back from the pair `(3s/2, s/3)`.
fn main() -> ferrite_mlp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2015);
    let mut network = NeuralNetwork::with_layer_sizes(&[2, 2, 1], ActivationKind::Linear, &mut rng)?;

    let (inputs, labels): (Vec<Vec<f32>>, Vec<Vec<f32>>) = (0..300)
        .map(|_| {
            let s = rng.next_uniform(0.10, 0.90) as f32;
            (vec![3.0 * s / 2.0, s / 3.0], vec![s])
        })
        .unzip();

    let config = TrainConfig::new(10, 0.5).shuffled();
    let stats = train_loop(&mut network, &inputs, &labels, None, None, &config, &mut rng)?;
    println!("Trained {} epochs, last loss = {:.6}", stats.epoch, stats.train_loss);

    // Persist and reload through the JSON form.
    let json = network.to_json()?;
    let mut restored = NeuralNetwork::from_json(&json)?;

    for s in [0.15_f32, 0.5, 0.85] {
        let input = [3.0 * s / 2.0, s / 3.0];
        let original = network.predict(&input)?[0];
        let reloaded = restored.predict(&input)?[0];
        println!("s = {s:.2} -> {original:.4} (reloaded {reloaded:.4})");
    }

    Ok(())
}
