//! Construction heuristics for initial transportation-problem solutions.
//!
//! - [`north_west_corner`] — Cost-blind corner-filling traversal, O(m + n)
//! - [`least_cost`] — Greedy global-minimum-cost selection, O((m + n)·m·n)
//! - [`vogel_approximation`] — Penalty-driven selection (Vogel's
//!   Approximation Method), most accurate of the three
//!
//! All three consume a validated [`TransportProblem`](crate::models::TransportProblem)
//! by shared reference, copy its supply and demand into private working
//! state, and return a fresh [`TransportSolution`](crate::models::TransportSolution).
//! Every greedy choice has a deterministic tie-break, so repeated calls with
//! the same input produce identical output.

mod least_cost;
mod north_west_corner;
mod vogel;

pub use least_cost::least_cost;
pub use north_west_corner::north_west_corner;
pub use vogel::vogel_approximation;
