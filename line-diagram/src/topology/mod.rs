//! Static station topology.
//!
//! The network is almost a single line: stepping by identifier reaches the
//! next station everywhere except at a handful of overridden edges, the four
//! termini, and the two junctions where the line forks. Those exceptions are
//! all the topology records; there is no general graph structure.

mod skytrain;

pub use skytrain::SKYTRAIN;

use crate::domain::{Direction, STATION_COUNT, Station};

/// One way out of a junction along a main line: the first station
/// reached, and the direction to keep walking in from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub first: Station,
    pub direction: Direction,
}

/// The short side line linking one junction to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spur {
    /// Stations between the two junctions, nearest first.
    pub stations: &'static [Station],
    /// Direction of travel along `stations`.
    pub direction: Direction,
    /// The junction the spur rejoins.
    pub far_junction: Station,
}

impl Spur {
    /// The station adjacent to the junction this spur leaves from.
    pub fn entry(&self) -> Option<Station> {
        self.stations.first().copied()
    }

    /// The spur station adjacent to the far junction.
    pub fn exit(&self) -> Option<Station> {
        self.stations.last().copied()
    }
}

/// A station where the line forks.
///
/// `branches` are tried in order; the order decides which route is
/// returned when more than one simple path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junction {
    pub station: Station,
    pub branches: [Exit; 2],
    pub spur: Spur,
}

/// A neighbour that is not the plain identifier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub from: Station,
    pub direction: Direction,
    pub to: Station,
}

/// A terminus and the direction in which it has no neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminus {
    pub station: Station,
    pub dead_end: Direction,
}

/// Read-only description of the network.
#[derive(Debug, Clone, Copy)]
pub struct Topology {
    pub termini: &'static [Terminus],
    pub junctions: &'static [Junction],
    pub overrides: &'static [Override],
}

impl Topology {
    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        STATION_COUNT
    }

    /// The station reached by moving one step from `station` in `direction`.
    ///
    /// Returns `None` past a terminus.
    pub fn neighbour(&self, station: Station, direction: Direction) -> Option<Station> {
        if self
            .termini
            .iter()
            .any(|t| t.station == station && t.dead_end == direction)
        {
            return None;
        }

        self.overrides
            .iter()
            .find(|o| o.from == station && o.direction == direction)
            .map(|o| o.to)
            .or_else(|| station.offset(direction.step()))
    }

    pub fn is_terminus(&self, station: Station) -> bool {
        self.termini.iter().any(|t| t.station == station)
    }

    pub fn junction(&self, station: Station) -> Option<&Junction> {
        self.junctions.iter().find(|j| j.station == station)
    }

    /// Returns true if a train can run directly between `a` and `b`.
    pub fn is_adjacent(&self, a: Station, b: Station) -> bool {
        self.links_to(a, b) || self.links_to(b, a)
    }

    fn links_to(&self, from: Station, to: Station) -> bool {
        if let Some(junction) = self.junction(from) {
            return junction.branches.iter().any(|e| e.first == to)
                || junction.spur.entry() == Some(to);
        }
        Direction::BOTH
            .iter()
            .any(|&d| self.neighbour(from, d) == Some(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_steps() {
        let t = SKYTRAIN;
        assert_eq!(
            t.neighbour(Station::BURRARD, Direction::Forward),
            Some(Station::GRANVILLE)
        );
        assert_eq!(
            t.neighbour(Station::BURRARD, Direction::Backward),
            Some(Station::WATERFRONT)
        );
        assert_eq!(
            t.neighbour(Station::PRODUCTION, Direction::Backward),
            Some(Station::LOUGHEED)
        );
    }

    #[test]
    fn overridden_steps() {
        let t = SKYTRAIN;
        assert_eq!(
            t.neighbour(Station::BRAID, Direction::Backward),
            Some(Station::LOUGHEED)
        );
        assert_eq!(
            t.neighbour(Station::SAPPERTON, Direction::Forward),
            Some(Station::COLUMBIA)
        );
        assert_eq!(
            t.neighbour(Station::BURQUITLAM, Direction::Forward),
            Some(Station::LOUGHEED)
        );
    }

    #[test]
    fn termini_have_no_neighbour_outwards() {
        let t = SKYTRAIN;
        assert_eq!(t.neighbour(Station::WATERFRONT, Direction::Backward), None);
        assert_eq!(t.neighbour(Station::VCC_CLARK, Direction::Forward), None);
        assert_eq!(t.neighbour(Station::LAFARGE, Direction::Backward), None);
        assert_eq!(t.neighbour(Station::KING_GEORGE, Direction::Forward), None);

        assert_eq!(
            t.neighbour(Station::KING_GEORGE, Direction::Backward),
            Some(Station::SURREY_CENTRAL)
        );
        assert_eq!(
            t.neighbour(Station::LAFARGE, Direction::Forward),
            Some(Station::LINCOLN)
        );
    }

    #[test]
    fn exactly_four_termini_and_two_junctions() {
        let t = SKYTRAIN;
        assert_eq!(t.termini.len(), 4);
        assert_eq!(t.junctions.len(), 2);
        assert!(t.is_terminus(Station::WATERFRONT));
        assert!(!t.is_terminus(Station::COLUMBIA));
        assert!(t.junction(Station::COLUMBIA).is_some());
        assert!(t.junction(Station::LOUGHEED).is_some());
        assert!(t.junction(Station::BRAID).is_none());
    }

    #[test]
    fn spurs_mirror_each_other() {
        let t = SKYTRAIN;
        let columbia = t.junction(Station::COLUMBIA).unwrap();
        let lougheed = t.junction(Station::LOUGHEED).unwrap();

        assert_eq!(columbia.spur.far_junction, Station::LOUGHEED);
        assert_eq!(lougheed.spur.far_junction, Station::COLUMBIA);

        let mut reversed = lougheed.spur.stations.to_vec();
        reversed.reverse();
        assert_eq!(columbia.spur.stations, reversed.as_slice());
        assert_eq!(columbia.spur.direction, lougheed.spur.direction.reverse());
    }

    #[test]
    fn spur_steps_follow_neighbours() {
        let t = SKYTRAIN;
        for junction in t.junctions {
            let spur = junction.spur;
            let mut stations = vec![junction.station];
            stations.extend_from_slice(spur.stations);
            stations.push(spur.far_junction);
            for pair in stations.windows(2) {
                assert!(t.is_adjacent(pair[0], pair[1]), "{:?}", pair);
            }
            for pair in spur.stations.windows(2) {
                assert_eq!(t.neighbour(pair[0], spur.direction), Some(pair[1]));
            }
            assert_eq!(
                spur.exit().and_then(|s| t.neighbour(s, spur.direction)),
                Some(spur.far_junction)
            );
        }
    }

    #[test]
    fn branch_exits_are_adjacent() {
        let t = SKYTRAIN;
        for junction in t.junctions {
            for exit in junction.branches {
                assert!(t.is_adjacent(junction.station, exit.first));
                assert_eq!(
                    t.neighbour(exit.first, exit.direction.reverse()),
                    Some(junction.station)
                );
            }
        }
    }

    #[test]
    fn network_is_a_tree() {
        let t = SKYTRAIN;
        let mut edges = 0;
        for a in Station::all() {
            for b in Station::all().filter(|&b| b > a) {
                if t.is_adjacent(a, b) {
                    edges += 1;
                }
            }
        }
        assert_eq!(edges, t.station_count() - 1);
    }

    #[test]
    fn no_shortcut_between_junction_neighbours() {
        let t = SKYTRAIN;
        assert!(!t.is_adjacent(Station::SAPPERTON, Station::LOUGHEED));
        assert!(!t.is_adjacent(Station::BURQUITLAM, Station::BRAID));
        assert!(!t.is_adjacent(Station::KING_GEORGE, Station::LAFARGE));
    }
}
