//! Policy quote inputs and their validation

mod data;

pub use data::{CalculationInput, validate_quote, build_inputs};
