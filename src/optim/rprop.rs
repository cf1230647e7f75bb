/// Step size every parameter starts from.
pub const INITIAL_STEP: f32 = 0.1;
pub const STEP_INCREASE: f32 = 1.2;
pub const STEP_DECREASE: f32 = 0.5;
pub const MAX_STEP: f32 = 50.0;
pub const MIN_STEP: f32 = 1e-6;

/// Per-parameter step sizes and the gradients seen on the previous update.
#[derive(Debug, Clone, PartialEq)]
pub struct RpropState {
    pub bias_step: f32,
    pub bias_gradient: f32,
    pub weight_steps: Vec<f32>,
    pub weight_gradients: Vec<f32>,
}

impl RpropState {
    pub fn new(input_size: usize) -> RpropState {
        RpropState {
            bias_step: INITIAL_STEP,
            bias_gradient: 0.0,
            weight_steps: vec![INITIAL_STEP; input_size],
            weight_gradients: vec![0.0; input_size],
        }
    }
}

/// iRprop⁻ update for one parameter; returns the amount to add to it.
///
/// `gradient` points in the direction the parameter should move. A sign
/// change shrinks the step and skips the update; a repeated sign grows it.
pub fn delta(step: &mut f32, last_gradient: &mut f32, gradient: f32) -> f32 {
    let product = gradient * *last_gradient;
    if product < 0.0 {
        *step = (*step * STEP_DECREASE).max(MIN_STEP);
        *last_gradient = 0.0;
        return 0.0;
    }
    if product > 0.0 {
        *step = (*step * STEP_INCREASE).min(MAX_STEP);
    }
    *last_gradient = gradient;
    if gradient == 0.0 { 0.0 } else { gradient.signum() * *step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_uses_initial_step() {
        let (mut step, mut last) = (INITIAL_STEP, 0.0);
        assert_eq!(delta(&mut step, &mut last, -3.0), -INITIAL_STEP);
        assert_eq!(step, INITIAL_STEP);
        assert_eq!(last, -3.0);
    }

    #[test]
    fn same_sign_grows_step() {
        let (mut step, mut last) = (INITIAL_STEP, 0.5);
        let d = delta(&mut step, &mut last, 2.0);
        assert_eq!(step, INITIAL_STEP * STEP_INCREASE);
        assert_eq!(d, step);
    }

    #[test]
    fn sign_flip_shrinks_step_and_skips() {
        let (mut step, mut last) = (INITIAL_STEP, 0.5);
        assert_eq!(delta(&mut step, &mut last, -2.0), 0.0);
        assert_eq!(step, INITIAL_STEP * STEP_DECREASE);
        assert_eq!(last, 0.0);
        // The following update is treated as a fresh start.
        assert_eq!(delta(&mut step, &mut last, -2.0), -INITIAL_STEP * STEP_DECREASE);
    }

    #[test]
    fn step_is_clamped() {
        let (mut step, mut last) = (MAX_STEP, 1.0);
        delta(&mut step, &mut last, 1.0);
        assert_eq!(step, MAX_STEP);

        let (mut step, mut last) = (MIN_STEP, 1.0);
        delta(&mut step, &mut last, -1.0);
        assert_eq!(step, MIN_STEP);
    }

    #[test]
    fn zero_gradient_does_not_move() {
        let (mut step, mut last) = (INITIAL_STEP, 0.0);
        assert_eq!(delta(&mut step, &mut last, 0.0), 0.0);
    }
}
