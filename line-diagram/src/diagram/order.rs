//! Physical ordering of the station lights.
//!
//! Station ids already follow the strip's data order, head to tail. The
//! x order is the left-to-right order the lights appear in on the panel.

use crate::domain::{STATION_COUNT, Station};

/// Stations from left to right across the panel.
pub const X_ORDER: [Station; STATION_COUNT] = [
    Station::WATERFRONT,
    Station::BURRARD,
    Station::GRANVILLE,
    Station::STADIUM,
    Station::VCC_CLARK,
    Station::MAIN_STREET,
    Station::BROADWAY,
    Station::COMMERCIAL,
    Station::NANAIMO,
    Station::RENFREW,
    Station::TWENTY_NINTH_AVENUE,
    Station::RUPERT,
    Station::JOYCE,
    Station::GILMORE,
    Station::PATTERSON,
    Station::BRENTWOOD,
    Station::METROTOWN,
    Station::HOLDOM,
    Station::ROYAL_OAK,
    Station::SPERLING,
    Station::EDMONDS,
    Station::LAKE_CITY_WAY,
    Station::TWENTY_SECOND_STREET,
    Station::PRODUCTION,
    Station::NEW_WESTMINSTER,
    Station::LOUGHEED,
    Station::COLUMBIA,
    Station::BURQUITLAM,
    Station::BRAID,
    Station::SAPPERTON,
    Station::SCOTT_ROAD,
    Station::MOODY_CENTRE,
    Station::GATEWAY,
    Station::INLET_CENTRE,
    Station::SURREY_CENTRAL,
    Station::COQUITLAM_CENTRAL,
    Station::KING_GEORGE,
    Station::LINCOLN,
    Station::LAFARGE,
];

/// Index of the strip pixel that lights `station`.
pub fn pixel_index(station: Station) -> usize {
    station.index()
}

/// Column of `station` counting from the left edge of the panel.
pub fn x_position(station: Station) -> usize {
    X_ORDER
        .iter()
        .position(|&s| s == station)
        .unwrap_or(station.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_order_is_a_permutation() {
        let mut seen = [false; STATION_COUNT];
        for station in X_ORDER {
            assert!(!seen[station.index()]);
            seen[station.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn positions() {
        assert_eq!(x_position(Station::WATERFRONT), 0);
        assert_eq!(x_position(Station::VCC_CLARK), 4);
        assert_eq!(x_position(Station::LAFARGE), STATION_COUNT - 1);
        for (column, &station) in X_ORDER.iter().enumerate() {
            assert_eq!(x_position(station), column);
        }
    }

    #[test]
    fn pixel_follows_data_order() {
        assert_eq!(pixel_index(Station::WATERFRONT), 0);
        assert_eq!(pixel_index(Station::VCC_CLARK), 38);
    }
}
