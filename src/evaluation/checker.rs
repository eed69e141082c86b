//! Checks a solution against its problem's constraints.

use std::collections::HashSet;

use crate::models::{TransportProblem, TransportSolution, Violation, ViolationType};

/// Tolerance for float comparisons in the checks. The heuristics only move
/// exact quantities around, but the total cost is accumulated in a
/// different order than the checker recomputes it.
const TOL: f64 = 1e-6;

/// Verifies a solution against its problem, returning every violation found.
///
/// Checks, in order: each origin ships exactly its supply, each destination
/// receives exactly its demand, no cell is negative, the reported total
/// cost matches the allocation, and every positive cell appears in the
/// highlighted-cell trail.
///
/// # Examples
///
/// ```
/// use u_transport::constructive::least_cost;
/// use u_transport::evaluation;
/// use u_transport::models::TransportProblem;
///
/// let problem = TransportProblem::new(
///     vec![5.0, 5.0],
///     vec![6.0, 4.0],
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
/// )?;
/// let solution = least_cost(&problem);
/// assert!(evaluation::verify(&problem, &solution).is_empty());
/// # Ok::<(), u_transport::models::ProblemError>(())
/// ```
pub fn verify(problem: &TransportProblem, solution: &TransportSolution) -> Vec<Violation> {
    let mut violations = Vec::new();
    let alloc = solution.allocation();
    let rows = problem.num_origins();
    let cols = problem.num_destinations();

    for (i, &supply) in problem.supply().iter().enumerate() {
        let shipped = alloc.row_sum(i);
        if (shipped - supply).abs() > TOL {
            violations.push(Violation::new(ViolationType::SupplyNotExhausted {
                origin: i,
                shipped,
                supply,
            }));
        }
    }

    for (j, &demand) in problem.demand().iter().enumerate() {
        let received = alloc.col_sum(j);
        if (received - demand).abs() > TOL {
            violations.push(Violation::new(ViolationType::DemandNotMet {
                destination: j,
                received,
                demand,
            }));
        }
    }

    for i in 0..rows {
        for j in 0..cols {
            let quantity = alloc.get(i, j);
            if quantity < 0.0 {
                violations.push(Violation::new(ViolationType::NegativeAllocation {
                    origin: i,
                    destination: j,
                    quantity,
                }));
            }
        }
    }

    let computed: f64 = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| alloc.get(i, j) * problem.costs().get(i, j))
        .sum();
    if (solution.total_cost() - computed).abs() > TOL {
        violations.push(Violation::new(ViolationType::CostMismatch {
            reported: solution.total_cost(),
            computed,
        }));
    }

    let recorded: HashSet<(usize, usize)> = solution.highlighted_cells().iter().copied().collect();
    for i in 0..rows {
        for j in 0..cols {
            if alloc.get(i, j) > 0.0 && !recorded.contains(&(i, j)) {
                violations.push(Violation::new(ViolationType::UnrecordedCell {
                    origin: i,
                    destination: j,
                }));
            }
        }
    }

    violations
}

/// Returns `true` if the solution satisfies every constraint.
pub fn is_feasible(problem: &TransportProblem, solution: &TransportSolution) -> bool {
    verify(problem, solution).is_empty()
}
