//! Least Cost method.
//!
//! # Algorithm
//!
//! While any supply and any demand remain, scan the whole matrix for the
//! cheapest cell whose origin still has supply and whose destination still
//! has demand, and allocate as much as both allow. Ties go to the first
//! minimum in row-major scan order (strict `<` against the running
//! minimum).
//!
//! # Complexity
//!
//! O((m + n)·m·n): each of the at most m + n - 1 steps performs a full
//! matrix scan. Fine for the small, interactive instances this crate
//! targets.

use crate::models::{TransportProblem, TransportSolution};

/// Constructs an initial allocation with the Least Cost method.
///
/// Greedier than North-West Corner: always fills the globally cheapest
/// eligible cell next, which usually lands noticeably closer to optimal.
///
/// # Examples
///
/// ```
/// use u_transport::constructive::least_cost;
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
/// let solution = least_cost(&problem);
/// // Cheapest cell (0, 1) at cost 6 goes first.
/// assert_eq!(solution.highlighted_cells()[0], (0, 1));
/// # Ok::<(), u_transport::models::ProblemError>(())
/// ```
pub fn least_cost(problem: &TransportProblem) -> TransportSolution {
    let rows = problem.num_origins();
    let cols = problem.num_destinations();
    log::debug!("least cost start: {rows}x{cols}");

    let costs = problem.costs();
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut solution = TransportSolution::new(rows, cols);

    while supply.iter().any(|&s| s > 0.0) && demand.iter().any(|&d| d > 0.0) {
        let mut min_cost = f64::INFINITY;
        let mut min_cell: Option<(usize, usize)> = None;

        for i in 0..rows {
            if supply[i] <= 0.0 {
                continue;
            }
            for j in 0..cols {
                if demand[j] > 0.0 && costs.get(i, j) < min_cost {
                    min_cost = costs.get(i, j);
                    min_cell = Some((i, j));
                }
            }
        }

        // A balanced problem always has an eligible cell while the loop
        // guard holds.
        let (i, j) = min_cell.expect("balanced problem left no eligible cell");
        let quantity = supply[i].min(demand[j]);
        solution.record(i, j, quantity, min_cost);
        supply[i] -= quantity;
        demand[j] -= quantity;
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::north_west_corner;

    fn textbook_problem() -> TransportProblem {
        TransportProblem::new(
            vec![20.0, 30.0, 25.0],
            vec![10.0, 25.0, 40.0],
            vec![
                vec![8.0, 6.0, 10.0],
                vec![9.0, 12.0, 13.0],
                vec![14.0, 9.0, 16.0],
            ],
        )
        .expect("balanced")
    }

    #[test]
    fn test_lc_exact_layout() {
        let sol = least_cost(&textbook_problem());
        let alloc = sol.allocation();
        // 6 at (0,1) → 20; 9 at (1,0) first in row-major order → 10;
        // 9 at (2,1) → 5; 13 at (1,2) → 20; 16 at (2,2) → 20.
        assert_eq!(alloc.get(0, 1), 20.0);
        assert_eq!(alloc.get(1, 0), 10.0);
        assert_eq!(alloc.get(2, 1), 5.0);
        assert_eq!(alloc.get(1, 2), 20.0);
        assert_eq!(alloc.get(2, 2), 20.0);
        assert_eq!(sol.total_cost(), 835.0);
        assert_eq!(
            sol.highlighted_cells(),
            &[(0, 1), (1, 0), (2, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_lc_beats_or_matches_nw() {
        let problem = textbook_problem();
        let lc = least_cost(&problem);
        let nw = north_west_corner(&problem);
        assert!(lc.total_cost() <= nw.total_cost());
    }

    #[test]
    fn test_lc_conservation() {
        let problem = textbook_problem();
        let sol = least_cost(&problem);
        for i in 0..problem.num_origins() {
            assert_eq!(sol.allocation().row_sum(i), problem.supply()[i]);
        }
        for j in 0..problem.num_destinations() {
            assert_eq!(sol.allocation().col_sum(j), problem.demand()[j]);
        }
    }

    #[test]
    fn test_lc_tie_goes_to_first_in_row_major_order() {
        // Equal costs everywhere: the scan must settle on (0, 0) each time.
        let problem = TransportProblem::new(
            vec![5.0, 5.0],
            vec![5.0, 5.0],
            vec![vec![7.0, 7.0], vec![7.0, 7.0]],
        )
        .expect("balanced");
        let sol = least_cost(&problem);
        // (0, 0) wins the four-way tie; it exhausts row 0 and column 0, so
        // only (1, 1) stays eligible.
        assert_eq!(sol.highlighted_cells(), &[(0, 0), (1, 1)]);
        assert_eq!(sol.allocation().get(0, 0), 5.0);
        assert_eq!(sol.allocation().get(0, 1), 0.0);
        assert_eq!(sol.allocation().get(1, 1), 5.0);
    }

    #[test]
    fn test_lc_trivial_1x1() {
        let problem =
            TransportProblem::new(vec![5.0], vec![5.0], vec![vec![3.0]]).expect("balanced");
        let sol = least_cost(&problem);
        assert_eq!(sol.allocation().get(0, 0), 5.0);
        assert_eq!(sol.total_cost(), 15.0);
        assert_eq!(sol.highlighted_cells(), &[(0, 0)]);
    }
}
