//! Line membership.

use std::fmt;

use serde::Serialize;

use super::colour::Rgb;
use super::station::Station;

/// The SkyTrain line a station's light is painted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    Expo,
    Millennium,
}

impl Line {
    /// The line a station belongs to on the diagram.
    ///
    /// Braid and Sapperton sit on the Millennium side of the data order but
    /// are served by the Expo Line.
    pub fn of(station: Station) -> Line {
        if station <= Station::KING_GEORGE
            || station == Station::BRAID
            || station == Station::SAPPERTON
        {
            Line::Expo
        } else {
            Line::Millennium
        }
    }

    pub fn colour(self) -> Rgb {
        match self {
            Line::Expo => Rgb::EXPO,
            Line::Millennium => Rgb::MILLENNIUM,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Expo => f.write_str("Expo"),
            Line::Millennium => f.write_str("Millennium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_stations() {
        assert_eq!(Line::of(Station::WATERFRONT), Line::Expo);
        assert_eq!(Line::of(Station::COLUMBIA), Line::Expo);
        assert_eq!(Line::of(Station::KING_GEORGE), Line::Expo);
        assert_eq!(Line::of(Station::BRAID), Line::Expo);
        assert_eq!(Line::of(Station::SAPPERTON), Line::Expo);
    }

    #[test]
    fn millennium_stations() {
        assert_eq!(Line::of(Station::LAFARGE), Line::Millennium);
        assert_eq!(Line::of(Station::BURQUITLAM), Line::Millennium);
        assert_eq!(Line::of(Station::LOUGHEED), Line::Millennium);
        assert_eq!(Line::of(Station::VCC_CLARK), Line::Millennium);
    }

    #[test]
    fn colours() {
        assert_eq!(Line::Expo.colour(), Rgb::EXPO);
        assert_eq!(Line::Millennium.colour(), Rgb::MILLENNIUM);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Line::Expo).unwrap(), "\"expo\"");
    }
}
