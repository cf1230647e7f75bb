pub mod activation;

pub use activation::{ActivationFns, ActivationKind};
