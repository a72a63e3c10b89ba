//! **gridfind-search** — A* shortest-path search over gridfind grids.
//!
//! [`SearchEngine::run`] finds a minimum-step 4-directional path between a
//! start and a goal cell of a [`Grid`](gridfind_core::Grid), mutating each
//! cell's transient search state as it goes and notifying an [`Observer`]
//! after every expansion round. The engine owns and reuses its internal
//! caches, so repeated runs incur no allocations after warm-up.
//!
//! A run ends in one of three normal outcomes: [`Outcome::Found`] with the
//! full start-to-goal path, [`Outcome::NotFound`] when the reachable set is
//! exhausted, or [`Outcome::Aborted`] when the observer requested
//! cancellation. Precondition violations are reported as [`SearchError`]s
//! instead.

mod distance;
mod engine;
mod error;
mod observer;

pub use distance::manhattan;
pub use engine::{Outcome, SearchEngine};
pub use error::{EndpointIssue, SearchError};
pub use observer::{Observer, Step};
