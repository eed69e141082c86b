//! Domain model types for the transportation problem.
//!
//! Provides the core abstractions: a validated problem instance (supplies,
//! demands, unit-cost matrix), the allocation matrix the heuristics fill in,
//! and the solution type bundling the allocation with its total cost and
//! the order in which cells were filled.

mod allocation;
mod cost_matrix;
mod problem;
mod solution;

pub use allocation::Allocation;
pub use cost_matrix::CostMatrix;
pub use problem::{ProblemError, TransportProblem};
pub use solution::{TransportSolution, Violation, ViolationType};
