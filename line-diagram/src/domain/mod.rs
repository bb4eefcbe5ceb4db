//! Domain types for the line diagram.
//!
//! Stations, paths, directions and colours. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod colour;
mod direction;
mod line;
mod path;
mod station;

pub use colour::Rgb;
pub use direction::{Direction, InvalidDirection};
pub use line::Line;
pub use path::{Path, PathFull};
pub use station::{InvalidStation, STATION_COUNT, Station};
