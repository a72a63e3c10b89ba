//! The step-observer seam between the engine and an external renderer.

use gridfind_core::Coord;

/// One observable engine event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// An expansion round finished for the cell at `coord`.
    Expanded { coord: Coord },
    /// The cell at `coord` was marked as part of the reconstructed path.
    PathMarked { coord: Coord },
}

/// Observer of search progress.
///
/// [`on_step`](Observer::on_step) fires after each expansion round and
/// after each path-marking step during reconstruction, once the grid
/// reflects the change. Renderers are expected to redraw from their own
/// [`Grid`](gridfind_core::Grid) handle; the payload only says what moved.
/// The engine assumes nothing about the callback beyond it returning
/// before the next step begins.
pub trait Observer {
    fn on_step(&mut self, step: Step);

    /// Polled once per expansion round. Returning `true` ends the search
    /// with [`Outcome::Aborted`](crate::Outcome::Aborted) before any
    /// further mutation.
    fn abort(&self) -> bool {
        false
    }
}

/// Closure observers never abort.
impl<F: FnMut(Step)> Observer for F {
    fn on_step(&mut self, step: Step) {
        self(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_observe_and_never_abort() {
        let mut seen = Vec::new();
        {
            let mut obs = |step: Step| seen.push(step);
            obs.on_step(Step::Expanded {
                coord: Coord::new(1, 2),
            });
            assert!(!obs.abort());
        }
        assert_eq!(
            seen,
            vec![Step::Expanded {
                coord: Coord::new(1, 2)
            }]
        );
    }
}
