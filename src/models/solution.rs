//! Solution and violation types.

use super::Allocation;

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// An origin's row sum differs from its supply.
    SupplyNotExhausted {
        /// Origin index.
        origin: usize,
        /// Quantity actually shipped out of the origin.
        shipped: f64,
        /// The origin's supply.
        supply: f64,
    },
    /// A destination's column sum differs from its demand.
    DemandNotMet {
        /// Destination index.
        destination: usize,
        /// Quantity actually received by the destination.
        received: f64,
        /// The destination's demand.
        demand: f64,
    },
    /// A cell holds a negative quantity.
    NegativeAllocation {
        /// Origin index.
        origin: usize,
        /// Destination index.
        destination: usize,
        /// The negative quantity.
        quantity: f64,
    },
    /// The reported total cost differs from the recomputed one.
    CostMismatch {
        /// Total cost carried by the solution.
        reported: f64,
        /// Total cost recomputed from the allocation.
        computed: f64,
    },
    /// A positive cell is missing from the highlighted-cell trail.
    UnrecordedCell {
        /// Origin index.
        origin: usize,
        /// Destination index.
        destination: usize,
    },
}

/// A constraint violation found when verifying a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete initial solution to a transportation problem.
///
/// Bundles the allocation matrix, its total cost, and the highlighted-cell
/// trail: every cell the heuristic touched, in the exact order allocations
/// were made. The order is part of the contract (a caller may replay it to
/// animate the construction), not incidental.
///
/// # Examples
///
/// ```
/// use u_transport::models::TransportSolution;
///
/// let mut sol = TransportSolution::new(2, 2);
/// sol.record(0, 1, 15.0, 6.0);
/// assert_eq!(sol.total_cost(), 90.0);
/// assert_eq!(sol.highlighted_cells(), &[(0, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransportSolution {
    allocation: Allocation,
    total_cost: f64,
    highlighted_cells: Vec<(usize, usize)>,
}

impl TransportSolution {
    /// Creates an empty solution for a rows×cols problem.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            allocation: Allocation::zeros(rows, cols),
            total_cost: 0.0,
            highlighted_cells: Vec::new(),
        }
    }

    /// Records an allocation of `quantity` units at cell `(i, j)`.
    ///
    /// Writes the cell, adds `quantity * unit_cost` to the total, and
    /// appends `(i, j)` to the highlighted-cell trail.
    pub fn record(&mut self, i: usize, j: usize, quantity: f64, unit_cost: f64) {
        self.allocation.set(i, j, quantity);
        self.total_cost += quantity * unit_cost;
        self.highlighted_cells.push((i, j));
    }

    /// The allocation matrix.
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Total cost of the allocation.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Every cell touched, in allocation order.
    pub fn highlighted_cells(&self) -> &[(usize, usize)] {
        &self.highlighted_cells
    }

    /// Number of allocation steps taken.
    ///
    /// Fewer than `rows + cols - 1` positive cells means the solution is
    /// degenerate.
    pub fn num_allocations(&self) -> usize {
        self.highlighted_cells.len()
    }
}
