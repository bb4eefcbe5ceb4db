//! Fixed-capacity station path.

use std::fmt;

use super::station::{STATION_COUNT, Station};

/// Error returned when a path would grow past one entry per station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("path capacity of {STATION_COUNT} stations exceeded")]
pub struct PathFull;

/// An ordered sequence of stations, at most one entry per station.
///
/// The buffer is sized for the whole network so building a path never
/// allocates. An empty path means "no route"; a route from a station to
/// itself holds that single station.
///
/// # Examples
///
/// ```
/// use line_diagram::domain::{Path, Station};
///
/// let mut path = Path::new();
/// assert!(path.is_empty());
///
/// path.push(Station::WATERFRONT).unwrap();
/// path.push(Station::BURRARD).unwrap();
/// assert_eq!(path.as_slice(), &[Station::WATERFRONT, Station::BURRARD]);
/// ```
#[derive(Clone, Copy)]
pub struct Path {
    stations: [Station; STATION_COUNT],
    len: usize,
}

impl Path {
    /// Create an empty path.
    pub const fn new() -> Self {
        Self {
            stations: [Station::WATERFRONT; STATION_COUNT],
            len: 0,
        }
    }

    /// Create a path holding a single station.
    pub fn single(station: Station) -> Self {
        let mut path = Self::new();
        path.stations[0] = station;
        path.len = 1;
        path
    }

    /// Build a path from a slice of stations.
    pub fn from_stations(stations: &[Station]) -> Result<Self, PathFull> {
        let mut path = Self::new();
        path.extend_from_slice(stations)?;
        Ok(path)
    }

    /// Number of stations in the path.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the path holds no stations ("no route").
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The stations in travel order.
    pub fn as_slice(&self) -> &[Station] {
        &self.stations[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.as_slice().iter()
    }

    pub fn first(&self) -> Option<Station> {
        self.as_slice().first().copied()
    }

    pub fn last(&self) -> Option<Station> {
        self.as_slice().last().copied()
    }

    /// The station visited just before the current end of the path.
    ///
    /// At a junction this is the edge the path arrived along.
    pub fn previous(&self) -> Option<Station> {
        self.len
            .checked_sub(2)
            .map(|idx| self.stations[idx])
    }

    pub fn contains(&self, station: Station) -> bool {
        self.as_slice().contains(&station)
    }

    /// Append a station.
    pub fn push(&mut self, station: Station) -> Result<(), PathFull> {
        if self.len == STATION_COUNT {
            return Err(PathFull);
        }
        self.stations[self.len] = station;
        self.len += 1;
        Ok(())
    }

    /// Append every station of `stations`, leaving the path unchanged on overflow.
    pub fn extend_from_slice(&mut self, stations: &[Station]) -> Result<(), PathFull> {
        let end = self.len + stations.len();
        if end > STATION_COUNT {
            return Err(PathFull);
        }
        self.stations[self.len..end].copy_from_slice(stations);
        self.len = end;
        Ok(())
    }

    /// Drop every station, turning the path into the "no route" value.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the same stations in the opposite order.
    pub fn reversed(&self) -> Self {
        let mut path = *self;
        path.stations[..self.len].reverse();
        path
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Path {}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|s| s.index()))
            .finish()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(ids: &[usize]) -> Vec<Station> {
        ids.iter().map(|&id| Station::new(id).unwrap()).collect()
    }

    #[test]
    fn new_path_is_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
        assert_eq!(path.previous(), None);
    }

    #[test]
    fn single_station() {
        let path = Path::single(Station::METROTOWN);
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), Some(Station::METROTOWN));
        assert_eq!(path.last(), Some(Station::METROTOWN));
        assert_eq!(path.previous(), None);
    }

    #[test]
    fn previous_is_second_to_last() {
        let path = Path::from_stations(&stations(&[13, 14, 15])).unwrap();
        assert_eq!(path.previous(), Some(Station::NEW_WESTMINSTER));
        assert_eq!(path.last(), Some(Station::COLUMBIA));
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut path = Path::new();
        for station in Station::all() {
            path.push(station).unwrap();
        }
        assert_eq!(path.len(), STATION_COUNT);
        assert_eq!(path.push(Station::WATERFRONT), Err(PathFull));
        assert_eq!(path.len(), STATION_COUNT);
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut path = Path::from_stations(&stations(&[0, 1])).unwrap();
        let all: Vec<_> = Station::all().collect();
        assert_eq!(path.extend_from_slice(&all), Err(PathFull));
        assert_eq!(path.as_slice(), stations(&[0, 1]).as_slice());

        path.extend_from_slice(&stations(&[2, 3])).unwrap();
        assert_eq!(path.as_slice(), stations(&[0, 1, 2, 3]).as_slice());
    }

    #[test]
    fn clear_ignores_stale_entries_in_equality() {
        let mut a = Path::from_stations(&stations(&[4, 5, 6])).unwrap();
        a.clear();
        assert_eq!(a, Path::new());
        assert!(!a.contains(Station::MAIN_STREET));
    }

    #[test]
    fn reversed() {
        let path = Path::from_stations(&stations(&[26, 27, 15])).unwrap();
        assert_eq!(path.reversed().as_slice(), stations(&[15, 27, 26]).as_slice());
    }

    #[test]
    fn debug_lists_ids() {
        let path = Path::from_stations(&stations(&[0, 1, 2])).unwrap();
        assert_eq!(format!("{:?}", path), "[0, 1, 2]");
    }
}
