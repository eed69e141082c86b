//! Validated transportation problem instance.

use thiserror::Error;

use super::CostMatrix;

/// Tolerance for the supply/demand balance check.
const BALANCE_EPS: f64 = 1e-9;

/// Errors returned by [`TransportProblem::new`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProblemError {
    /// Supply, demand, or the cost matrix is empty.
    #[error("supply, demand, and costs must all be non-empty")]
    Empty,
    /// The cost matrix rows have unequal lengths.
    #[error("cost matrix rows must all have the same length")]
    RaggedCosts,
    /// The cost matrix shape does not match the supply/demand lengths.
    #[error(
        "cost matrix is {rows}x{cols} but supply has {supply_len} entries \
         and demand has {demand_len}"
    )]
    ShapeMismatch {
        /// Cost matrix row count.
        rows: usize,
        /// Cost matrix column count.
        cols: usize,
        /// Number of supply entries.
        supply_len: usize,
        /// Number of demand entries.
        demand_len: usize,
    },
    /// A supply or demand quantity is negative.
    #[error("{axis} quantity at index {index} is negative ({value})")]
    NegativeQuantity {
        /// Which sequence the value came from (`"supply"` or `"demand"`).
        axis: &'static str,
        /// Index of the offending entry.
        index: usize,
        /// The negative value.
        value: f64,
    },
    /// Total supply differs from total demand.
    #[error("supply total {supply_total} does not match demand total {demand_total}")]
    Unbalanced {
        /// Sum of all supply entries.
        supply_total: f64,
        /// Sum of all demand entries.
        demand_total: f64,
    },
}

/// A balanced transportation problem: per-origin supplies, per-destination
/// demands, and a unit-cost matrix.
///
/// Construction validates shape, non-negativity, and balance, so the
/// heuristics never have to: any `TransportProblem` they receive is
/// well-formed. The instance is immutable; heuristics copy the supply and
/// demand sequences into their own working state and never touch the
/// caller's problem.
///
/// # Examples
///
/// ```
/// use u_transport::models::{ProblemError, TransportProblem};
///
/// let problem = TransportProblem::new(
///     vec![5.0],
///     vec![5.0],
///     vec![vec![3.0]],
/// )?;
/// assert_eq!(problem.num_origins(), 1);
///
/// let unbalanced = TransportProblem::new(vec![10.0], vec![5.0], vec![vec![1.0]]);
/// assert!(matches!(unbalanced, Err(ProblemError::Unbalanced { .. })));
/// # Ok::<(), ProblemError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransportProblem {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: CostMatrix,
}

impl TransportProblem {
    /// Validates and constructs a transportation problem.
    ///
    /// Rejects empty inputs, ragged or mis-shaped cost matrices, negative
    /// quantities, and unbalanced totals (total supply must equal total
    /// demand within `1e-9`).
    pub fn new(
        supply: Vec<f64>,
        demand: Vec<f64>,
        costs: Vec<Vec<f64>>,
    ) -> Result<Self, ProblemError> {
        if supply.is_empty() || demand.is_empty() || costs.is_empty() {
            return Err(ProblemError::Empty);
        }
        if costs.iter().any(Vec::is_empty) {
            return Err(ProblemError::Empty);
        }
        let costs = CostMatrix::from_rows(&costs).ok_or(ProblemError::RaggedCosts)?;
        if costs.num_origins() != supply.len() || costs.num_destinations() != demand.len() {
            return Err(ProblemError::ShapeMismatch {
                rows: costs.num_origins(),
                cols: costs.num_destinations(),
                supply_len: supply.len(),
                demand_len: demand.len(),
            });
        }
        for (axis, values) in [("supply", &supply), ("demand", &demand)] {
            if let Some((index, &value)) =
                values.iter().enumerate().find(|(_, &v)| v < 0.0)
            {
                return Err(ProblemError::NegativeQuantity { axis, index, value });
            }
        }
        let supply_total: f64 = supply.iter().sum();
        let demand_total: f64 = demand.iter().sum();
        if (supply_total - demand_total).abs() > BALANCE_EPS {
            return Err(ProblemError::Unbalanced {
                supply_total,
                demand_total,
            });
        }
        Ok(Self {
            supply,
            demand,
            costs,
        })
    }

    /// Per-origin supply quantities.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Per-destination demand quantities.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// The unit-cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Number of origins (rows).
    pub fn num_origins(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations (columns).
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_problem() {
        let p = TransportProblem::new(
            vec![20.0, 30.0],
            vec![10.0, 40.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .expect("valid");
        assert_eq!(p.num_origins(), 2);
        assert_eq!(p.num_destinations(), 2);
        assert_eq!(p.costs().get(1, 1), 4.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            TransportProblem::new(vec![], vec![1.0], vec![vec![1.0]]),
            Err(ProblemError::Empty)
        );
        assert_eq!(
            TransportProblem::new(vec![1.0], vec![], vec![vec![1.0]]),
            Err(ProblemError::Empty)
        );
        assert_eq!(
            TransportProblem::new(vec![1.0], vec![1.0], vec![]),
            Err(ProblemError::Empty)
        );
        assert_eq!(
            TransportProblem::new(vec![1.0], vec![1.0], vec![vec![]]),
            Err(ProblemError::Empty)
        );
    }

    #[test]
    fn test_ragged_costs() {
        assert_eq!(
            TransportProblem::new(
                vec![5.0, 5.0],
                vec![5.0, 5.0],
                vec![vec![1.0, 2.0], vec![3.0]],
            ),
            Err(ProblemError::RaggedCosts)
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let err = TransportProblem::new(
            vec![5.0, 5.0],
            vec![10.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        assert_eq!(
            err,
            Err(ProblemError::ShapeMismatch {
                rows: 2,
                cols: 2,
                supply_len: 2,
                demand_len: 1,
            })
        );
    }

    #[test]
    fn test_negative_quantity() {
        let err = TransportProblem::new(vec![5.0], vec![-5.0], vec![vec![1.0]]);
        assert_eq!(
            err,
            Err(ProblemError::NegativeQuantity {
                axis: "demand",
                index: 0,
                value: -5.0,
            })
        );
    }

    #[test]
    fn test_unbalanced() {
        let err = TransportProblem::new(vec![10.0], vec![5.0], vec![vec![1.0]]);
        assert_eq!(
            err,
            Err(ProblemError::Unbalanced {
                supply_total: 10.0,
                demand_total: 5.0,
            })
        );
    }

    #[test]
    fn test_zero_quantities_allowed() {
        let p = TransportProblem::new(
            vec![0.0, 5.0],
            vec![5.0, 0.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        assert!(p.is_ok());
    }
}
