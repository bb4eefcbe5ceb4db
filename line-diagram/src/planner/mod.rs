//! Route finding across the line diagram.
//!
//! Routes are built by walking the topology in a single direction and
//! branching at junctions. The network has no loops, so whichever walk
//! succeeds yields the only simple path between the two stations.

mod finder;
mod walker;

pub use finder::{PathFinder, RouteError, find};
pub use walker::Walker;
