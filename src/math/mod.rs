pub mod random;

pub use random::{UniformSource, WeightInit};
