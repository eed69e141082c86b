//! Request/response boundary for dispatching solve requests.
//!
//! Mirrors the wire contract of the service this library backs: a request
//! names one of the three methods and carries the supply, demand, and cost
//! arrays; the response carries the allocation, total cost, and
//! highlighted cells. Transport (HTTP, CORS, process wiring) stays with
//! the embedding service; this module only parses, validates, dispatches,
//! and serializes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constructive::{least_cost, north_west_corner, vogel_approximation};
use crate::models::{ProblemError, TransportProblem, TransportSolution};

/// The construction heuristic a request dispatches to.
///
/// Wire names are kebab-case; any other string fails deserialization and
/// surfaces as a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// North-West Corner method.
    #[serde(rename = "north-west")]
    NorthWest,
    /// Least Cost method.
    #[serde(rename = "least-cost")]
    LeastCost,
    /// Vogel's Approximation Method.
    #[serde(rename = "vogel")]
    Vogel,
}

/// A solve request: the method plus the three problem arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Which heuristic to run.
    pub method: Method,
    /// Per-origin supply quantities.
    pub supply: Vec<f64>,
    /// Per-destination demand quantities.
    pub demand: Vec<f64>,
    /// Unit-cost matrix as nested rows.
    pub costs: Vec<Vec<f64>>,
}

/// A solve response, serialized with camelCase wire field names
/// (`totalCost`, `highlightedCells`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// The allocation matrix as nested rows.
    pub allocation: Vec<Vec<f64>>,
    /// Total cost of the allocation.
    pub total_cost: f64,
    /// Every cell touched, in allocation order.
    pub highlighted_cells: Vec<(usize, usize)>,
}

impl From<TransportSolution> for SolveResponse {
    fn from(solution: TransportSolution) -> Self {
        Self {
            allocation: solution.allocation().to_rows(),
            total_cost: solution.total_cost(),
            highlighted_cells: solution.highlighted_cells().to_vec(),
        }
    }
}

/// Reasons a request is rejected. All of them are client errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body is not valid JSON for [`SolveRequest`], including
    /// an unrecognized method name.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The arrays do not form a valid balanced problem.
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Validates the request and dispatches it to the chosen heuristic.
///
/// # Examples
///
/// ```
/// use u_transport::api::{solve, Method, SolveRequest};
///
/// let request = SolveRequest {
///     method: Method::NorthWest,
///     supply: vec![5.0],
///     demand: vec![5.0],
///     costs: vec![vec![3.0]],
/// };
/// let response = solve(&request)?;
/// assert_eq!(response.total_cost, 15.0);
/// # Ok::<(), u_transport::api::RequestError>(())
/// ```
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, RequestError> {
    let problem = TransportProblem::new(
        request.supply.clone(),
        request.demand.clone(),
        request.costs.clone(),
    )?;
    let solution = match request.method {
        Method::NorthWest => north_west_corner(&problem),
        Method::LeastCost => least_cost(&problem),
        Method::Vogel => vogel_approximation(&problem),
    };
    Ok(solution.into())
}

/// JSON-in/JSON-out variant of [`solve`] for embedding behind a transport.
///
/// Deserializes the body, solves, and serializes the response. Validation
/// happens before any heuristic runs, so a rejected request does no
/// allocation work.
pub fn solve_json(body: &str) -> Result<String, RequestError> {
    let request: SolveRequest = serde_json::from_str(body)?;
    let response = solve(&request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_request(method: Method) -> SolveRequest {
        SolveRequest {
            method,
            supply: vec![20.0, 30.0, 25.0],
            demand: vec![10.0, 25.0, 40.0],
            costs: vec![
                vec![8.0, 6.0, 10.0],
                vec![9.0, 12.0, 13.0],
                vec![14.0, 9.0, 16.0],
            ],
        }
    }

    #[test]
    fn test_dispatch_north_west() {
        let response = solve(&textbook_request(Method::NorthWest)).expect("valid");
        assert_eq!(response.total_cost, 915.0);
        assert_eq!(response.allocation[0], vec![10.0, 10.0, 0.0]);
    }

    #[test]
    fn test_dispatch_least_cost() {
        let response = solve(&textbook_request(Method::LeastCost)).expect("valid");
        assert_eq!(response.total_cost, 835.0);
    }

    #[test]
    fn test_dispatch_vogel() {
        let response = solve(&textbook_request(Method::Vogel)).expect("valid");
        assert_eq!(response.total_cost, 775.0);
    }

    #[test]
    fn test_unbalanced_rejected_before_dispatch() {
        let request = SolveRequest {
            method: Method::NorthWest,
            supply: vec![10.0],
            demand: vec![5.0],
            costs: vec![vec![1.0]],
        };
        let err = solve(&request).expect_err("unbalanced");
        assert!(matches!(
            err,
            RequestError::Problem(ProblemError::Unbalanced {
                supply_total,
                demand_total,
            }) if supply_total == 10.0 && demand_total == 5.0
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let request = SolveRequest {
            method: Method::Vogel,
            supply: vec![],
            demand: vec![],
            costs: vec![],
        };
        assert!(matches!(
            solve(&request),
            Err(RequestError::Problem(ProblemError::Empty))
        ));
    }

    #[test]
    fn test_unknown_method_rejected() {
        let body = r#"{"method":"modi","supply":[5],"demand":[5],"costs":[[3]]}"#;
        assert!(matches!(
            solve_json(body),
            Err(RequestError::Malformed(_))
        ));
    }

    #[test]
    fn test_solve_json_round_trip() {
        let body = r#"{"method":"north-west","supply":[5],"demand":[5],"costs":[[3]]}"#;
        let out = solve_json(body).expect("valid");
        let response: SolveResponse = serde_json::from_str(&out).expect("well-formed");
        assert_eq!(response.allocation, vec![vec![5.0]]);
        assert_eq!(response.total_cost, 15.0);
        assert_eq!(response.highlighted_cells, vec![(0, 0)]);
        // Wire field names are camelCase.
        assert!(out.contains("\"totalCost\""));
        assert!(out.contains("\"highlightedCells\""));
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&Method::NorthWest).expect("serializable"),
            "\"north-west\""
        );
        assert_eq!(
            serde_json::to_string(&Method::LeastCost).expect("serializable"),
            "\"least-cost\""
        );
        assert_eq!(
            serde_json::to_string(&Method::Vogel).expect("serializable"),
            "\"vogel\""
        );
    }
}
