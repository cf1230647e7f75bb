pub mod back_propagation;
pub mod rprop;
pub mod sgd;

pub use back_propagation::BackPropagationType;
pub use rprop::RpropState;
