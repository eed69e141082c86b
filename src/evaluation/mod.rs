//! Solution verification: conservation, non-negativity, cost consistency,
//! and highlighted-cell coverage.

mod checker;

pub use checker::{is_feasible, verify};
