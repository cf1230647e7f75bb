pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f32], expected: &[f32]) -> f32 {
        let n = predicted.len() as f32;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f32>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_mean_of_squares() {
        assert_eq!(MseLoss::loss(&[1.0, 3.0], &[0.0, 1.0]), 2.5);
        assert_eq!(MseLoss::loss(&[0.5], &[0.5]), 0.0);
    }
}
