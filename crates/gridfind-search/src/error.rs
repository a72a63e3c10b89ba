//! Search error types.

use std::fmt;

use gridfind_core::{Coord, GridError};

/// Why a pair of endpoints was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    /// Start and goal name the same cell.
    Identical,
    /// The start cell is a barrier.
    StartIsBarrier,
    /// The goal cell is a barrier.
    GoalIsBarrier,
}

/// Errors reported by [`SearchEngine::run`](crate::SearchEngine::run).
///
/// These are caller errors, fatal to the call: fix the grid or the
/// endpoints and retry. Exhaustion and cancellation are not errors; they
/// are [`Outcome`](crate::Outcome) variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint coordinate lies outside the grid.
    OutOfBounds(GridError),
    /// The endpoints are in bounds but unusable.
    InvalidEndpoints {
        start: Coord,
        goal: Coord,
        issue: EndpointIssue,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "endpoint out of bounds: {e}"),
            Self::InvalidEndpoints { start, goal, issue } => match issue {
                EndpointIssue::Identical => {
                    write!(f, "invalid endpoints: start and goal are both {start}")
                }
                EndpointIssue::StartIsBarrier => {
                    write!(f, "invalid endpoints: start {start} is a barrier")
                }
                EndpointIssue::GoalIsBarrier => {
                    write!(f, "invalid endpoints: goal {goal} is a barrier")
                }
            },
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::InvalidEndpoints { .. } => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::OutOfBounds(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let e = SearchError::InvalidEndpoints {
            start: Coord::new(1, 1),
            goal: Coord::new(2, 2),
            issue: EndpointIssue::GoalIsBarrier,
        };
        assert_eq!(e.to_string(), "invalid endpoints: goal (2, 2) is a barrier");
    }

    #[test]
    fn out_of_bounds_keeps_its_source() {
        use std::error::Error;
        let e = SearchError::from(GridError::OutOfBounds {
            row: 9,
            col: 0,
            rows: 5,
        });
        assert!(e.source().is_some());
        assert!(e.to_string().contains("(9, 0)"));
    }
}
