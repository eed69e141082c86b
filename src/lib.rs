//! # u-transport
//!
//! Initial feasible solutions for the classical transportation problem:
//! given per-origin supplies, per-destination demands, and a unit-cost
//! matrix, build an allocation satisfying every constraint and report its
//! total cost. Three construction heuristics trade simplicity for solution
//! quality; none of them performs optimality improvement (stepping-stone,
//! MODI), they produce the starting allocation such methods refine.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (CostMatrix, Allocation, TransportProblem, TransportSolution)
//! - [`constructive`] — Construction heuristics (North-West Corner, Least Cost, Vogel)
//! - [`evaluation`] — Solution verification against the problem's constraints
//! - [`api`] — Request/response boundary with JSON marshaling

pub mod api;
pub mod constructive;
pub mod evaluation;
pub mod models;
