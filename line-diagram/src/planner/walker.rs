//! Single-direction route walking.
//!
//! A walk steps through the topology in one direction until it reaches the
//! destination, falls off a terminus, or arrives at a junction. At a junction
//! the remainder of the route is resolved by fresh walks down each branch,
//! and failing those, along the spur to the other junction.

use tracing::trace;

use crate::domain::{Direction, Path, Station};
use crate::topology::{Junction, Topology};

/// Walks routes through a fixed topology.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'t> {
    topology: &'t Topology,
}

impl<'t> Walker<'t> {
    pub fn new(topology: &'t Topology) -> Self {
        Self { topology }
    }

    /// Build a simple path from `from` to `to` moving only in `direction`.
    ///
    /// Returns an empty path if the destination is not reachable that way.
    pub fn walk(&self, from: Station, to: Station, direction: Direction) -> Path {
        self.try_walk(from, to, direction).unwrap_or_default()
    }

    /// Like [`Walker::walk`], with the direction given as a `+1`/`-1` step.
    ///
    /// Any other step yields an empty path.
    pub fn walk_step(&self, from: Station, to: Station, step: i8) -> Path {
        match Direction::try_from(step) {
            Ok(direction) => self.walk(from, to, direction),
            Err(e) => {
                trace!(error = %e, "rejecting walk");
                Path::new()
            }
        }
    }

    fn try_walk(&self, from: Station, to: Station, direction: Direction) -> Option<Path> {
        if from == to {
            return Some(Path::single(from));
        }

        // Nothing lies this way from the start.
        self.topology.neighbour(from, direction)?;

        let mut path = Path::new();
        let mut current = from;

        loop {
            path.push(current).ok()?;

            if current == to {
                return Some(path);
            }

            if let Some(junction) = self.topology.junction(current) {
                return self.branch(path, junction, to);
            }

            if current != from && self.topology.is_terminus(current) {
                trace!(
                    from = from.index(),
                    to = to.index(),
                    %direction,
                    terminus = current.index(),
                    "walk reached a terminus"
                );
                return None;
            }

            current = self.topology.neighbour(current, direction)?;
        }
    }

    /// Resolve the rest of a route that has just reached `junction`.
    ///
    /// `path` ends at the junction. The edge it arrived along is never taken
    /// back out.
    fn branch(&self, mut path: Path, junction: &Junction, to: Station) -> Option<Path> {
        let arrived_from = path.previous();

        for exit in junction.branches {
            if Some(exit.first) == arrived_from {
                continue;
            }
            let rest = self.walk(exit.first, to, exit.direction);
            if !rest.is_empty() {
                path.extend_from_slice(rest.as_slice()).ok()?;
                return Some(path);
            }
        }

        if arrived_from.is_some() && arrived_from == junction.spur.entry() {
            // Came in off the spur and neither branch leads on.
            return None;
        }

        for &station in junction.spur.stations {
            path.push(station).ok()?;
            if station == to {
                return Some(path);
            }
        }

        let far = junction.spur.far_junction;
        path.push(far).ok()?;
        if far == to {
            return Some(path);
        }

        let far_junction = self.topology.junction(far)?;
        trace!(
            junction = junction.station.index(),
            far = far.index(),
            to = to.index(),
            "crossing spur"
        );
        self.branch(path, far_junction, to)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
