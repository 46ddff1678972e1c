//! Insurance projection, equivalent-rate solving and forward reconciliation

pub mod interest;
mod insurance;
mod solver;
mod reconcile;
mod results;
mod engine;

pub use insurance::{project, InsuranceProjection};
pub use solver::{EquivalentRateSolver, EquivalentRateResult};
pub use reconcile::{ForwardReconciler, ReconciliationResult};
pub use results::TermResult;
pub use engine::EquivalenceEngine;
