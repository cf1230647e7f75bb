pub struct BceLoss;

const EPS: f32 = 1e-7;

impl BceLoss {
    /// Scalar BCE: -mean(y·log(p+ε) + (1-y)·log(1-p+ε))
    pub fn loss(predicted: &[f32], expected: &[f32]) -> f32 {
        let n = predicted.len() as f32;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| -(y * (p + EPS).ln() + (1.0 - y) * (1.0 - p + EPS).ln()))
            .sum::<f32>() / n
    }
}
