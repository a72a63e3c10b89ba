//! The [`Cell`] type — a persistent role plus a transient search marking.

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// A cell's persistent role, chosen by the external editor.
///
/// Kinds survive across searches; the engine reads them but never writes
/// them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Passable, unremarkable cell.
    #[default]
    Empty,
    /// Impassable cell; never enumerated as a neighbour.
    Barrier,
    /// The search origin.
    Start,
    /// The search target.
    Goal,
}

impl CellKind {
    /// Whether this kind blocks movement.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// A cell's transient marking during one search invocation.
///
/// Reset to [`Unvisited`](SearchState::Unvisited) when a search starts and
/// written only by the engine for that search's duration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Not yet reached.
    #[default]
    Unvisited,
    /// Pending expansion.
    Open,
    /// Expanded; never expanded again.
    Closed,
    /// On the reconstructed path, strictly between start and goal.
    Path,
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One addressable grid cell: `kind` and `state` are independent axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub state: SearchState,
}

impl Cell {
    /// Set the kind (builder).
    #[inline]
    pub const fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the search state (builder).
    #[inline]
    pub const fn with_state(mut self, state: SearchState) -> Self {
        self.state = state;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::default().with_kind(CellKind::Goal);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
