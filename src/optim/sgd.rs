/// Plain gradient step: `rate * δ * input`.
#[inline]
pub fn delta(rate: f32, error_term: f32, input: f32) -> f32 {
    rate * error_term * input
}
