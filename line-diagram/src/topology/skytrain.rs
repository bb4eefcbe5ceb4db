//! The Expo and Millennium lines as wired on the diagram.

use super::{Exit, Junction, Override, Spur, Terminus, Topology};
use crate::domain::{Direction, Station};

const TERMINI: [Terminus; 4] = [
    Terminus {
        station: Station::WATERFRONT,
        dead_end: Direction::Backward,
    },
    Terminus {
        station: Station::VCC_CLARK,
        dead_end: Direction::Forward,
    },
    Terminus {
        station: Station::LAFARGE,
        dead_end: Direction::Backward,
    },
    Terminus {
        station: Station::KING_GEORGE,
        dead_end: Direction::Forward,
    },
];

const OVERRIDES: [Override; 4] = [
    Override {
        from: Station::BRAID,
        direction: Direction::Backward,
        to: Station::LOUGHEED,
    },
    Override {
        from: Station::SAPPERTON,
        direction: Direction::Forward,
        to: Station::COLUMBIA,
    },
    Override {
        from: Station::BURQUITLAM,
        direction: Direction::Forward,
        to: Station::LOUGHEED,
    },
    Override {
        from: Station::LOUGHEED,
        direction: Direction::Backward,
        to: Station::BURQUITLAM,
    },
];

// Branch order differs between the two junctions: Columbia prefers the
// Surrey branch, Lougheed prefers the Evergreen branch.
const JUNCTIONS: [Junction; 2] = [
    Junction {
        station: Station::COLUMBIA,
        branches: [
            Exit {
                first: Station::SCOTT_ROAD,
                direction: Direction::Forward,
            },
            Exit {
                first: Station::NEW_WESTMINSTER,
                direction: Direction::Backward,
            },
        ],
        spur: Spur {
            stations: &[Station::SAPPERTON, Station::BRAID],
            direction: Direction::Backward,
            far_junction: Station::LOUGHEED,
        },
    },
    Junction {
        station: Station::LOUGHEED,
        branches: [
            Exit {
                first: Station::BURQUITLAM,
                direction: Direction::Backward,
            },
            Exit {
                first: Station::PRODUCTION,
                direction: Direction::Forward,
            },
        ],
        spur: Spur {
            stations: &[Station::BRAID, Station::SAPPERTON],
            direction: Direction::Forward,
            far_junction: Station::COLUMBIA,
        },
    },
];

/// The reference network: 39 stations, two junctions, one spur.
pub const SKYTRAIN: Topology = Topology {
    termini: &TERMINI,
    junctions: &JUNCTIONS,
    overrides: &OVERRIDES,
};
