//! Route lookup between any two stations.

use tracing::debug;

use super::walker::Walker;
use crate::domain::{Direction, InvalidStation, Path, Station};
use crate::topology::{SKYTRAIN, Topology};

/// Why no route was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// An endpoint is not a station on the diagram
    #[error(transparent)]
    OutOfRange(#[from] InvalidStation),

    /// Neither direction reaches the destination
    #[error("no route from {from} to {to}")]
    Unreachable { from: Station, to: Station },
}

/// Finds routes by walking forward, then backward.
///
/// # Examples
///
/// ```
/// use line_diagram::planner::PathFinder;
///
/// let finder = PathFinder::default();
/// let path = finder.find(0, 3);
/// let ids: Vec<usize> = path.iter().map(|s| s.index()).collect();
/// assert_eq!(ids, vec![0, 1, 2, 3]);
///
/// // Out-of-range endpoints produce no route.
/// assert!(finder.find(39, 0).is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'t> {
    walker: Walker<'t>,
}

impl<'t> PathFinder<'t> {
    pub fn new(topology: &'t Topology) -> Self {
        Self {
            walker: Walker::new(topology),
        }
    }

    /// Route between two raw station ids; empty if there is none or an id
    /// is out of range.
    pub fn find(&self, from: usize, to: usize) -> Path {
        self.try_find(from, to).unwrap_or_default()
    }

    /// Route between two raw station ids, with the reason on failure.
    pub fn try_find(&self, from: usize, to: usize) -> Result<Path, RouteError> {
        let from = Station::new(from)?;
        let to = Station::new(to)?;
        self.route(from, to)
    }

    /// Route between two validated stations.
    pub fn route(&self, from: Station, to: Station) -> Result<Path, RouteError> {
        for direction in Direction::BOTH {
            let path = self.walker.walk(from, to, direction);
            if !path.is_empty() {
                debug!(
                    from = from.index(),
                    to = to.index(),
                    %direction,
                    stations = path.len(),
                    "route found"
                );
                return Ok(path);
            }
        }

        debug!(from = from.index(), to = to.index(), "no route");
        Err(RouteError::Unreachable { from, to })
    }
}

impl Default for PathFinder<'static> {
    fn default() -> Self {
        Self::new(&SKYTRAIN)
    }
}

/// Route between two raw station ids on the reference network.
pub fn find(from: usize, to: usize) -> Path {
    PathFinder::default().find(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(path: &Path) -> Vec<usize> {
        path.iter().map(|s| s.index()).collect()
    }

    #[test]
    fn linear_scenarios() {
        assert_eq!(ids(&find(0, 5)), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(ids(&find(5, 0)), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(ids(&find(10, 10)), vec![10]);
        assert_eq!(ids(&find(0, 0)), vec![0]);
    }

    #[test]
    fn out_of_range_is_empty() {
        assert!(find(39, 0).is_empty());
        assert!(find(0, 39).is_empty());
        assert!(find(39, 39).is_empty());
        assert!(find(usize::MAX, 3).is_empty());
    }

    #[test]
    fn try_find_reports_out_of_range() {
        let finder = PathFinder::default();
        let err = finder.try_find(3, 40).unwrap_err();
        assert_eq!(err.to_string(), "invalid station 40: must be below 39");
        assert!(matches!(err, RouteError::OutOfRange(e) if e.id() == 40));
    }

    #[test]
    fn backward_used_when_forward_fails() {
        // Forward from Sapperton reaches Columbia off the spur and stops.
        assert_eq!(ids(&find(27, 26)), vec![27, 26]);
        assert_eq!(ids(&find(38, 36)), vec![38, 37, 36]);
    }

    #[test]
    fn spur_to_far_branch() {
        assert_eq!(ids(&find(27, 19)), vec![27, 15, 16, 17, 18, 19]);
        assert_eq!(ids(&find(26, 20)), vec![26, 28, 25, 24, 23, 22, 21, 20]);
        assert_eq!(
            ids(&find(38, 19)),
            vec![38, 37, 36, 35, 34, 33, 32, 31, 30, 29, 28, 26, 27, 15, 16, 17, 18, 19]
        );
    }

    #[test]
    fn branch_to_branch() {
        assert_eq!(ids(&find(21, 20)), vec![21, 20]);
        assert_eq!(ids(&find(22, 30)), vec![22, 23, 24, 25, 28, 29, 30]);
        assert_eq!(ids(&find(19, 14)), vec![19, 18, 17, 16, 15, 14]);
    }

    #[test]
    fn unreachable_on_broken_topology() {
        use crate::topology::{Terminus, Topology};

        // Cut the line after Burrard.
        static TERMINI: [Terminus; 2] = [
            Terminus {
                station: Station::BURRARD,
                dead_end: Direction::Forward,
            },
            Terminus {
                station: Station::GRANVILLE,
                dead_end: Direction::Backward,
            },
        ];
        let broken = Topology {
            termini: &TERMINI,
            ..SKYTRAIN
        };
        let finder = PathFinder::new(&broken);

        assert_eq!(
            finder.try_find(0, 3),
            Err(RouteError::Unreachable {
                from: Station::WATERFRONT,
                to: Station::STADIUM,
            })
        );
        assert!(finder.find(0, 3).is_empty());
        assert_eq!(ids(&finder.find(0, 1)), vec![0, 1]);
    }
}
