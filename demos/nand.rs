use ferrite_mlp::{train_network, ActivationKind, NeuralNetwork};
use tracing_subscriber::filter::EnvFilter;

fn main() -> ferrite_mlp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The leading 1.0 acts as a constant bias input.
    let mut network = NeuralNetwork::new(&[3, 1], ActivationKind::Step)?;

    let inputs = vec![
        vec![1.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 20;

    for epoch in 0..epochs {
        let loss = train_network(&mut network, &inputs, &expected_outputs, 0.1)?;
        println!("Epoch {epoch}: loss = {loss:.6}");
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.1}", input, network.predict(input)?[0]);
    }

    Ok(())
}
