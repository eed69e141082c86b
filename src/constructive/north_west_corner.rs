//! North-West Corner method.
//!
//! # Algorithm
//!
//! Keep a cursor at the "north-west" (top-left) cell of the remaining
//! matrix. Allocate as much as the current origin and destination allow,
//! then move the cursor: down when the origin's supply is exhausted,
//! right when the destination's demand is. Costs play no role in the
//! choice of cells; only the final tally uses them.
//!
//! # Complexity
//!
//! O(m + n) where m = origins, n = destinations: each step exhausts at
//! least one origin or destination, so at most m + n - 1 steps occur on a
//! balanced problem.

use crate::models::{TransportProblem, TransportSolution};

/// Constructs an initial allocation with the North-West Corner method.
///
/// The fastest and least accurate of the three heuristics; useful as a
/// baseline and as a starting point for improvement methods.
///
/// When an allocation exhausts supply and demand simultaneously, the
/// cursor moves down (the row advances). The next step then records a
/// zero allocation before moving right, which is how degenerate solutions
/// surface in the highlighted-cell trail.
///
/// # Examples
///
/// ```
/// use u_transport::constructive::north_west_corner;
/// use u_transport::models::TransportProblem;
///
/// let problem = TransportProblem::new(
///     vec![20.0, 30.0, 25.0],
///     vec![10.0, 25.0, 40.0],
///     vec![
///         vec![8.0, 6.0, 10.0],
///         vec![9.0, 12.0, 13.0],
///         vec![14.0, 9.0, 16.0],
///     ],
/// )?;
/// let solution = north_west_corner(&problem);
/// assert_eq!(solution.total_cost(), 915.0);
/// assert_eq!(solution.highlighted_cells()[0], (0, 0));
/// # Ok::<(), u_transport::models::ProblemError>(())
/// ```
pub fn north_west_corner(problem: &TransportProblem) -> TransportSolution {
    let rows = problem.num_origins();
    let cols = problem.num_destinations();
    log::debug!("north-west corner start: {rows}x{cols}");

    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut solution = TransportSolution::new(rows, cols);

    let (mut i, mut j) = (0, 0);
    while i < rows && j < cols {
        let quantity = supply[i].min(demand[j]);
        solution.record(i, j, quantity, problem.costs().get(i, j));
        supply[i] -= quantity;
        demand[j] -= quantity;

        // The row advances first when both hit zero together.
        if supply[i] == 0.0 {
            i += 1;
        } else if demand[j] == 0.0 {
            j += 1;
        }
    }

    solution
}
