//! The [`SearchEngine`] — A* over a [`Grid`], one run at a time.

use std::collections::BinaryHeap;

use gridfind_core::{Coord, Grid, SearchState};

use crate::distance::manhattan;
use crate::error::{EndpointIssue, SearchError};
use crate::observer::{Observer, Step};

/// Sentinel score meaning "no path known yet".
const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is the insertion counter: among equal `f`, the earlier-inserted
/// cell pops first, which is what makes path selection deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    seq: u64,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (f, seq) first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a search run ended. All three are normal completions, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A minimum-step path exists; coords ordered start to goal inclusive.
    Found(Vec<Coord>),
    /// Every reachable cell was expanded without meeting the goal.
    NotFound,
    /// The observer requested cancellation mid-run.
    Aborted,
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// A* search engine over a [`Grid`].
///
/// The engine owns a flat node arena reused across runs and invalidated
/// lazily by a generation counter, so repeated searches allocate nothing
/// once warmed up. All score bookkeeping is logically per-run; only the
/// grid's cell kinds persist between runs.
pub struct SearchEngine {
    nodes: Vec<Node>,
    generation: u32,
    rows: i32,
    nbuf: Vec<Coord>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create an engine with empty caches; they are sized to the grid on
    /// the first [`run`](SearchEngine::run).
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            rows: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Size the node arena for a `rows × rows` grid, reallocating only on
    /// growth.
    fn fit_to(&mut self, rows: i32) {
        let len = (rows.max(0) as usize) * (rows.max(0) as usize);
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.rows = rows;
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        (c.row * self.rows + c.col) as usize
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        let rows = self.rows as usize;
        Coord::new((idx / rows) as i32, (idx % rows) as i32)
    }

    /// Find a minimum-step 4-directional path from `start` to `goal`.
    ///
    /// Runs A* with the Manhattan heuristic to completion, resetting every
    /// cell's search state first and then mutating states as it goes:
    /// cells pending expansion become [`Open`](SearchState::Open), expanded
    /// cells become [`Closed`](SearchState::Closed) (the start cell stays
    /// `Open`), and on success the strictly-intermediate path cells become
    /// [`Path`](SearchState::Path). `obs` is notified once per expansion
    /// round and once per path cell marked, always after the grid reflects
    /// the change, and its abort flag is polled once per round.
    ///
    /// # Errors
    ///
    /// [`SearchError::OutOfBounds`] if either endpoint lies outside the
    /// grid, [`SearchError::InvalidEndpoints`] if the endpoints are
    /// identical or either is a barrier. Exhaustion and cancellation are
    /// reported through [`Outcome`], not as errors.
    pub fn run<O: Observer>(
        &mut self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        obs: &mut O,
    ) -> Result<Outcome, SearchError> {
        let start_kind = grid.kind_at(start)?;
        let goal_kind = grid.kind_at(goal)?;
        if start == goal {
            return Err(SearchError::InvalidEndpoints {
                start,
                goal,
                issue: EndpointIssue::Identical,
            });
        }
        if start_kind.is_barrier() {
            return Err(SearchError::InvalidEndpoints {
                start,
                goal,
                issue: EndpointIssue::StartIsBarrier,
            });
        }
        if goal_kind.is_barrier() {
            return Err(SearchError::InvalidEndpoints {
                start,
                goal,
                issue: EndpointIssue::GoalIsBarrier,
            });
        }

        log::debug!(
            "searching {start} -> {goal} on a {}x{} grid",
            grid.rows(),
            grid.rows()
        );

        grid.reset_search_state();
        self.fit_to(grid.rows());

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start_idx = self.idx(start);
        let goal_idx = self.idx(goal);

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(start, goal);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            f: self.nodes[start_idx].f,
            seq: 0,
            idx: start_idx,
        });
        let mut seq: u64 = 1;
        grid.set_state(start, SearchState::Open)?;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        loop {
            // Cooperative cancellation, polled once per expansion round.
            if obs.abort() {
                self.nbuf = nbuf;
                log::debug!("search aborted by observer");
                return Ok(Outcome::Aborted);
            }

            let Some(current) = open.pop() else {
                break;
            };
            let ci = current.idx;

            // Skip stale entries: superseded pushes and anything already
            // expanded.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            let cp = self.coord(ci);
            if grid.state_at(cp)? == SearchState::Closed {
                continue;
            }
            self.nodes[ci].open = false;

            if ci == goal_idx {
                self.nbuf = nbuf;
                let path = self.mark_path(grid, goal_idx, obs)?;
                log::debug!("found a path of {} steps", path.len() - 1);
                return Ok(Outcome::Found(path));
            }

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            grid.neighbors_of(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let ni = self.idx(np);
                let tentative = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.open = false;
                }

                n.g = tentative;
                n.f = tentative + manhattan(np, goal);
                n.parent = ci;

                // An already-pending neighbour keeps its queued entry; the
                // score update above is enough.
                if n.open {
                    continue;
                }
                n.open = true;
                let f = n.f;
                open.push(OpenEntry { f, seq, idx: ni });
                seq += 1;
                grid.set_state(np, SearchState::Open)?;
            }

            // The popped cell closes only after its own expansion, and the
            // start cell never does.
            if ci != start_idx {
                grid.set_state(cp, SearchState::Closed)?;
            }
            obs.on_step(Step::Expanded { coord: cp });
        }

        self.nbuf = nbuf;
        log::debug!("open set exhausted: no path");
        Ok(Outcome::NotFound)
    }

    /// Walk parent links back from the goal, mark the strictly-intermediate
    /// cells and return the full start-to-goal path.
    fn mark_path<O: Observer>(
        &self,
        grid: &Grid,
        goal_idx: usize,
        obs: &mut O,
    ) -> Result<Vec<Coord>, SearchError> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        // Start and goal keep their kind-derived identity.
        for &c in &path[1..path.len() - 1] {
            grid.set_state(c, SearchState::Path)?;
            obs.on_step(Step::PathMarked { coord: c });
        }
        Ok(path)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = Outcome::Found(vec![Coord::new(0, 0), Coord::new(0, 1)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }

    #[test]
    fn step_round_trip() {
        let step = Step::PathMarked {
            coord: Coord::new(3, 4),
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
