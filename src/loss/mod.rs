pub mod bce;
pub mod cost_function;
pub mod mse;

pub use bce::BceLoss;
pub use cost_function::CostFunction;
pub use mse::MseLoss;
